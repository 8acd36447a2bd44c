//! Arithmetic centroid of a set of coordinates.

use crate::types::location::Coordinate;

/// Averages latitudes and longitudes independently.
///
/// Returns [`None`] for an empty slice. Flat averaging only: a set that
/// straddles the antimeridian averages towards longitude 0.
pub fn centroid(points: &[Coordinate]) -> Option<Coordinate> {
    if points.is_empty() {
        return None;
    }

    let (lat_sum, lon_sum) = points.iter().fold((0.0, 0.0), |(lat, lon), point| {
        (lat + point.latitude, lon + point.longitude)
    });
    let count = points.len() as f64;

    Some(Coordinate::new(lat_sum / count, lon_sum / count))
}
