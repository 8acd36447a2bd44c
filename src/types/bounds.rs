//! Definition of the [`BoundingBox`] type.

use serde::{Deserialize, Serialize};

use crate::utils::bounds::is_within_region_bounds;

/// An axis-aligned rectangle in degrees.
///
/// Used both as a coarse search envelope (see
/// [`bounding_box`](crate::utils::envelope::bounding_box)) and as the
/// rectangle approximation of a [`Region`](super::region::Region).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// Country bounds of Guatemala.
pub const GUATEMALA_BOUNDS: BoundingBox = BoundingBox {
    north: 17.82,
    south: 13.74,
    east: -88.22,
    west: -92.23,
};

impl BoundingBox {
    /// Closed-interval containment test on all four edges.
    #[inline]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        is_within_region_bounds(latitude, longitude, self)
    }
}
