//! Coordinate range validation and rectangle membership.

use crate::types::bounds::BoundingBox;

/// True iff both values are finite and within ±90 / ±180.
pub fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}

/// Inclusive containment: points on any of the four edges are inside.
pub fn is_within_region_bounds(latitude: f64, longitude: f64, bounds: &BoundingBox) -> bool {
    (bounds.south..=bounds.north).contains(&latitude)
        && (bounds.west..=bounds.east).contains(&longitude)
}
