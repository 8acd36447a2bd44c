//! Proximity matching.
//!
//! Given a point of reference and a collection of located entities,
//! produces the entities within a radius, annotated with their distance
//! and sorted closest-first.

use ordered_float::OrderedFloat;

use crate::error::GeoError;
use crate::types::entity::AsLocated;
use crate::types::location::Coordinate;
use crate::types::matched::MatchResult;
use crate::utils::haversine;

/// Query struct for searching entities near a location.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NearbyQuery {
    /// Point of reference.
    pub origin: Coordinate,
    /// Inclusive search radius in kilometers.
    pub radius_km: f64,
    /// Maximum number of results kept after sorting.
    pub limit: Option<usize>,
}

impl NearbyQuery {
    /// Creates a query without a result limit.
    ///
    /// Fails if the origin is out of range or the radius is negative or
    /// not finite.
    pub fn new(origin: Coordinate, radius_km: f64) -> Result<Self, GeoError> {
        let origin = Coordinate::try_new(origin.latitude, origin.longitude)?;
        if !radius_km.is_finite() || radius_km < 0.0 {
            return Err(GeoError::InvalidRadius(radius_km));
        }
        Ok(NearbyQuery {
            origin,
            radius_km,
            limit: None,
        })
    }

    /// Keeps at most `limit` results.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Rounds to 2 decimal places, half away from zero.
fn round_km(distance_km: f64) -> f64 {
    (distance_km * 100.0).round() / 100.0
}

fn annotate<E: AsLocated + Clone>(origin: &Coordinate, entity: &E) -> Option<MatchResult<E>> {
    let Some(coordinate) = entity.coordinate() else {
        trace!("Dropping entity without a decodable location");
        return None;
    };
    Some(MatchResult {
        entity: entity.clone(),
        distance_km: round_km(haversine::distance(origin, &coordinate)),
        latitude: coordinate.latitude,
        longitude: coordinate.longitude,
    })
}

/// Returns the entities within `radius_km` of `origin`, closest first.
///
/// Entities whose location cannot be decoded are silently dropped.
/// `distance_km` is rounded to 2 decimal places (half away from zero)
/// and the radius test is done on the rounded value, inclusively.
/// Entities at equal distance keep their input order.
///
/// # Time Complexity
/// *O*(*n* log *n*) for the sort.
pub fn find_nearby<E>(origin: &Coordinate, radius_km: f64, entities: &[E]) -> Vec<MatchResult<E>>
where
    E: AsLocated + Clone,
{
    debug!(
        "Finding entities within {} km of {:?} among {} candidates",
        radius_km,
        origin,
        entities.len()
    );

    let mut matches: Vec<MatchResult<E>> = entities
        .iter()
        .filter_map(|entity| annotate(origin, entity))
        .filter(|matched| {
            let keep = matched.distance_km <= radius_km;
            if !keep {
                trace!(
                    "Excluding entity at {} km (radius {} km)",
                    matched.distance_km,
                    radius_km
                );
            }
            keep
        })
        .collect();

    // sort_by_key is stable
    matches.sort_by_key(|matched| OrderedFloat(matched.distance_km));

    debug!("Found {} nearby entities", matches.len());
    matches
}

/// Same as [`find_nearby`], driven by a [`NearbyQuery`] and honouring its
/// `limit`.
pub fn find_nearby_with<E>(query: &NearbyQuery, entities: &[E]) -> Vec<MatchResult<E>>
where
    E: AsLocated + Clone,
{
    let mut matches = find_nearby(&query.origin, query.radius_km, entities);
    if let Some(limit) = query.limit {
        matches.truncate(limit);
    }
    matches
}

/// Returns the closest decodable entity regardless of distance.
///
/// On ties the entity appearing first in `entities` wins. Returns
/// [`None`] if no entity has a decodable location.
pub fn find_nearest<E>(origin: &Coordinate, entities: &[E]) -> Option<MatchResult<E>>
where
    E: AsLocated + Clone,
{
    debug!("Finding nearest of {} entities to {:?}", entities.len(), origin);

    let mut nearest: Option<(&E, Coordinate, f64)> = None;
    for entity in entities {
        let Some(coordinate) = entity.coordinate() else {
            continue;
        };
        let distance_km = haversine::distance(origin, &coordinate);
        if nearest.map_or(true, |(_, _, best)| distance_km < best) {
            nearest = Some((entity, coordinate, distance_km));
        }
    }

    nearest.map(|(entity, coordinate, distance_km)| MatchResult {
        entity: entity.clone(),
        distance_km: round_km(distance_km),
        latitude: coordinate.latitude,
        longitude: coordinate.longitude,
    })
}

#[cfg(test)]
mod proximity_tests {
    use super::*;
    use crate::types::entity::{EmbeddedLocation, LocatedEntity};
    use crate::utils::generator::generate_entities_near;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    const GUATEMALA_CITY: Coordinate = Coordinate {
        latitude: 14.6349,
        longitude: -90.5069,
    };
    const ANTIGUA: Coordinate = Coordinate {
        latitude: 14.5586,
        longitude: -90.7342,
    };
    const FLORES: Coordinate = Coordinate {
        latitude: 16.93,
        longitude: -89.89,
    };

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Activity {
        title: String,
    }

    fn activities() -> Vec<LocatedEntity<Activity>> {
        vec![
            LocatedEntity::new(
                Activity {
                    title: "Reforestation in Petén".to_string(),
                },
                Some(EmbeddedLocation::GeoJson {
                    coordinates: vec![FLORES.longitude, FLORES.latitude],
                }),
            ),
            LocatedEntity::at(
                Activity {
                    title: "Tutoring in Antigua".to_string(),
                },
                ANTIGUA,
            ),
            LocatedEntity::at(
                Activity {
                    title: "Food bank in Zona 1".to_string(),
                },
                GUATEMALA_CITY,
            ),
        ]
    }

    fn titles(matches: &[MatchResult<LocatedEntity<Activity>>]) -> Vec<&str> {
        matches
            .iter()
            .map(|m| m.entity.record.title.as_str())
            .collect()
    }

    #[test]
    fn test_filters_by_radius_and_sorts_closest_first() {
        let matches = find_nearby(&GUATEMALA_CITY, 30.0, &activities());

        assert_eq!(
            titles(&matches),
            vec!["Food bank in Zona 1", "Tutoring in Antigua"]
        );
        assert_eq!(matches[0].distance_km, 0.0);
        assert_eq!(matches[1].distance_km, 25.89);
        assert_eq!(matches[1].coordinate(), ANTIGUA);
    }

    #[test]
    fn test_small_radius_keeps_only_exact_match() {
        let matches = find_nearby(&GUATEMALA_CITY, 1.0, &activities());
        assert_eq!(titles(&matches), vec!["Food bank in Zona 1"]);
    }

    #[test]
    fn test_radius_boundary_is_inclusive() {
        let matches = find_nearby(&GUATEMALA_CITY, 25.89, &activities());
        assert_eq!(matches.len(), 2);

        let matches = find_nearby(&GUATEMALA_CITY, 25.88, &activities());
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_heterogeneous_locations() {
        let entities: Vec<LocatedEntity<Activity>> = serde_json::from_value(json!([
            {"title": "geojson", "location": {"coordinates": [-90.7342, 14.5586]}},
            {"title": "named", "location": {"latitude": 14.6349, "longitude": -90.5069}},
            {"title": "null", "location": null},
            {"title": "empty", "location": {}},
        ]))
        .unwrap();

        let matches = find_nearby(&GUATEMALA_CITY, 100.0, &entities);
        assert_eq!(titles(&matches), vec!["named", "geojson"]);
    }

    #[test]
    fn test_empty_inputs_yield_empty_results() {
        let none: Vec<LocatedEntity<Activity>> = Vec::new();
        assert!(find_nearby(&GUATEMALA_CITY, 30.0, &none).is_empty());
        assert!(find_nearby(&FLORES, 1.0, &activities()[1..]).is_empty());
        assert!(find_nearest(&GUATEMALA_CITY, &none).is_none());
    }

    #[test]
    fn test_equal_distances_keep_input_order() {
        let entities: Vec<LocatedEntity<String>> = (0..5)
            .map(|i| LocatedEntity::at(format!("same_{}", i), ANTIGUA))
            .collect();
        let matches = find_nearby(&GUATEMALA_CITY, 30.0, &entities);
        let ids: Vec<&str> = matches.iter().map(|m| m.entity.record.as_str()).collect();
        assert_eq!(ids, vec!["same_0", "same_1", "same_2", "same_3", "same_4"]);
    }

    #[test]
    fn test_generated_entities_are_all_found_sorted() {
        let entities = generate_entities_near(&GUATEMALA_CITY, 20.0, 300);
        let matches = find_nearby(&GUATEMALA_CITY, 20.01, &entities);
        assert_eq!(matches.len(), 300);
        assert!(matches
            .windows(2)
            .all(|pair| pair[0].distance_km <= pair[1].distance_km));
    }

    #[test]
    fn test_query_limit_and_validation() {
        let query = NearbyQuery::new(GUATEMALA_CITY, 30.0).unwrap().with_limit(1);
        let matches = find_nearby_with(&query, &activities());
        assert_eq!(titles(&matches), vec!["Food bank in Zona 1"]);

        assert_eq!(
            NearbyQuery::new(GUATEMALA_CITY, -1.0),
            Err(GeoError::InvalidRadius(-1.0))
        );
        assert!(NearbyQuery::new(GUATEMALA_CITY, f64::NAN).is_err());
        assert!(NearbyQuery::new(Coordinate::new(100.0, 0.0), 5.0).is_err());
    }

    #[test]
    fn test_find_nearest_ignores_radius() {
        let nearest = find_nearest(&FLORES, &activities()[1..]).unwrap();
        assert_eq!(nearest.entity.record.title, "Food bank in Zona 1");
        assert!(nearest.distance_km > 100.0);
    }

    #[test]
    fn test_match_result_wire_format() {
        let matches = find_nearby(&GUATEMALA_CITY, 1.0, &activities());
        let json = serde_json::to_value(&matches[0]).unwrap();
        assert_eq!(json["title"], "Food bank in Zona 1");
        assert_eq!(json["distanceKm"], 0.0);
        assert_eq!(json["latitude"], 14.6349);
        assert_eq!(json["longitude"], -90.5069);
    }

    #[test]
    fn test_flat_records_are_matched() {
        let entities: Vec<LocatedEntity<Activity>> = serde_json::from_value(json!([
            {"title": "flat", "latitude": 14.6349, "longitude": -90.5069},
        ]))
        .unwrap();
        let matches = find_nearby(&GUATEMALA_CITY, 30.0, &entities);
        assert_eq!(titles(&matches), vec!["flat"]);
        assert_eq!(matches[0].distance_km, 0.0);
    }

    #[test]
    fn test_match_results_can_be_matched_again() {
        let flat = MatchResult {
            entity: Activity {
                title: "Tutoring in Antigua".to_string(),
            },
            distance_km: 25.89,
            latitude: ANTIGUA.latitude,
            longitude: ANTIGUA.longitude,
        };
        let wire = serde_json::to_value(vec![flat]).unwrap();
        let entities: Vec<LocatedEntity<Activity>> = serde_json::from_value(wire).unwrap();
        let matches = find_nearby(&GUATEMALA_CITY, 30.0, &entities);
        assert_eq!(titles(&matches), vec!["Tutoring in Antigua"]);
        assert_eq!(matches[0].distance_km, 25.89);

        let first_pass = find_nearby(&GUATEMALA_CITY, 30.0, &activities());
        let wire = serde_json::to_value(&first_pass).unwrap();
        let entities: Vec<LocatedEntity<Activity>> = serde_json::from_value(wire).unwrap();
        let second_pass = find_nearby(&GUATEMALA_CITY, 30.0, &entities);
        assert_eq!(
            titles(&second_pass),
            vec!["Food bank in Zona 1", "Tutoring in Antigua"]
        );
    }
}
