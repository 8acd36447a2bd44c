//! Search envelope around a point.

use crate::types::bounds::BoundingBox;

/// Approximate kilometers per degree of latitude.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Returns a rectangle enclosing a `radius_km` circle around the point.
///
/// Planar approximation for small radii. The longitude delta divides by
/// `cos(latitude)` and diverges towards the poles; no clamping is done,
/// so callers must not rely on the result near ±90°.
pub fn bounding_box(latitude: f64, longitude: f64, radius_km: f64) -> BoundingBox {
    let delta_lat = radius_km / KM_PER_DEGREE;
    let delta_lon = radius_km / (KM_PER_DEGREE * latitude.to_radians().cos());

    BoundingBox {
        north: latitude + delta_lat,
        south: latitude - delta_lat,
        east: longitude + delta_lon,
        west: longitude - delta_lon,
    }
}
