//! Struct definitions and implementations for [`Coordinate`].
//!
//! A `Coordinate` is the single canonical point type of the crate. All
//! the embedded location shapes accepted from callers are resolved into
//! it once, at the decode boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoError;
use crate::utils::{bounds, haversine, wkt};

/// A [`Coordinate`] is a geographic position in degrees.
///
/// It is an immutable value type. The plain constructor [`Coordinate::new`]
/// does not validate, since distance math accepts any finite pair. Use
/// [`Coordinate::try_new`] when the range contract must hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate without range checks.
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate, rejecting non-finite or out-of-range values.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::InvalidLongitude(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Returns true if both components are finite and within range.
    #[inline]
    pub fn is_valid(&self) -> bool {
        bounds::is_valid_coordinate(self.latitude, self.longitude)
    }

    /// Great-circle distance to `other` in kilometers.
    ///
    /// See [`haversine::distance`].
    #[inline]
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine::distance(self, other)
    }
}

/// Renders the point geometry literal, `POINT(<lon> <lat>)`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&wkt::encode(self))
    }
}

impl FromStr for Coordinate {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        wkt::decode(Some(s)).ok_or_else(|| GeoError::InvalidGeometry(s.to_string()))
    }
}
