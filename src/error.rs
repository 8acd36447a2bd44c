//! Error type for the fallible construction paths.
//!
//! The matching functions themselves never fail; they drop or return
//! [`None`] for data they cannot use. Errors only surface when a caller
//! builds a validated value such as a [`Coordinate`](crate::Coordinate)
//! or a [`RegionTable`](crate::RegionTable).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("invalid latitude: {0} (must be a finite number between -90 and 90)")]
    InvalidLatitude(f64),

    #[error("invalid longitude: {0} (must be a finite number between -180 and 180)")]
    InvalidLongitude(f64),

    #[error("invalid radius: {0} km (must be a finite, non-negative number)")]
    InvalidRadius(f64),

    #[error("invalid point geometry: '{0}' (expected POINT(<lon> <lat>))")]
    InvalidGeometry(String),

    #[error("invalid region '{name}': {reason}")]
    InvalidRegion { name: String, reason: String },

    #[error("failed to parse region table: {0}")]
    RegionTable(String),
}

impl From<serde_json::Error> for GeoError {
    fn from(err: serde_json::Error) -> Self {
        GeoError::RegionTable(err.to_string())
    }
}
