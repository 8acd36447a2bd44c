//! Definition of the [`MatchResult`] type.

use serde::{Deserialize, Serialize};

use super::location::Coordinate;

/// A matched entity annotated with its distance from the search origin
/// and its resolved position.
///
/// On the wire the entity's own fields are flattened next to
/// `distanceKm`, `latitude` and `longitude`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<E> {
    #[serde(flatten)]
    pub entity: E,

    /// Kilometers from the origin, rounded to 2 decimal places.
    pub distance_km: f64,

    pub latitude: f64,
    pub longitude: f64,
}

impl<E> MatchResult<E> {
    /// The resolved position of the matched entity.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}
