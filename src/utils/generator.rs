//! Generates random located entities, mostly for fixtures and tests.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::entity::LocatedEntity;
use crate::types::location::Coordinate;
use crate::utils::haversine::EARTH_RADIUS_KM;

/// Record carried by generated entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRecord {
    pub id: String,
}

/// Generates `capacity` entities scattered within `radius_km` of
/// `origin`.
///
/// Each entity's record carries a synthetic id (`"entity_<n>"`). Positions
/// are drawn as a uniform bearing and a uniform fraction of the radius,
/// then projected with the spherical destination-point formula, so every
/// generated point lies inside the radius (up to rounding).
///
/// # Arguments
/// * `origin` - The center of the circle.
/// * `radius_km` - Maximum distance from `origin`.
/// * `capacity` - Number of entities to generate.
pub fn generate_entities_near(
    origin: &Coordinate,
    radius_km: f64,
    capacity: usize,
) -> Vec<LocatedEntity<GeneratedRecord>> {
    let mut rng = rand::thread_rng();
    (0..capacity)
        .map(|index| {
            let bearing = rng.gen_range(0.0..std::f64::consts::TAU);
            let reach = rng.gen_range(0.0..=1.0) * radius_km;
            LocatedEntity::at(
                GeneratedRecord {
                    id: format!("entity_{}", index),
                },
                destination(origin, bearing, reach),
            )
        })
        .collect()
}

/// Destination point reached from `origin` travelling `distance_km`
/// along the initial `bearing` (radians).
fn destination(origin: &Coordinate, bearing: f64, distance_km: f64) -> Coordinate {
    let angular = distance_km / EARTH_RADIUS_KM;
    let lat = origin.latitude.to_radians();
    let lon = origin.longitude.to_radians();

    let dest_lat = (lat.sin() * angular.cos() + lat.cos() * angular.sin() * bearing.cos()).asin();
    let dest_lon = lon
        + (bearing.sin() * angular.sin() * lat.cos()).atan2(angular.cos() - lat.sin() * dest_lat.sin());

    Coordinate::new(dest_lat.to_degrees(), dest_lon.to_degrees())
}
