//! Struct definitions and implementations for objects that carry a
//! location.
//!
//! Upstream data arrives in different shapes depending on its origin:
//! raw store rows carry a GeoJSON-style `{coordinates: [lon, lat]}` pair
//! or a point geometry literal, while already-processed API payloads
//! carry named `{latitude, longitude}` fields. [`EmbeddedLocation`] is
//! the sum type over those shapes, and [`EmbeddedLocation::resolve`]
//! turns any of them into a [`Coordinate`].
//!
//! Like the node types of a routing graph, the matcher does not care
//! what an entity actually is. Any type implementing [`AsLocated`] can
//! be matched; [`LocatedEntity`] is a ready-made generic wrapper.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::location::Coordinate;
use crate::utils::wkt;

/// Implemented by anything the proximity matcher can rank.
pub trait AsLocated {
    /// Returns the embedded location, if the record has one.
    fn embedded_location(&self) -> Option<&EmbeddedLocation>;

    /// Resolves the embedded location into a [`Coordinate`].
    fn coordinate(&self) -> Option<Coordinate> {
        self.embedded_location().and_then(EmbeddedLocation::resolve)
    }
}

/// The location shapes accepted on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddedLocation {
    /// `{coordinates: [lon, lat]}`, longitude first.
    GeoJson { coordinates: Vec<f64> },

    /// `{latitude, longitude}`.
    Named { latitude: f64, longitude: f64 },

    /// `"POINT(<lon> <lat>)"`.
    Geometry(String),
}

impl EmbeddedLocation {
    /// Converts the embedded shape into a canonical [`Coordinate`].
    ///
    /// Returns [`None`] for a coordinates array holding fewer than two
    /// numbers, for non-finite members and for malformed geometry text.
    pub fn resolve(&self) -> Option<Coordinate> {
        let coordinate = match self {
            EmbeddedLocation::GeoJson { coordinates } => match coordinates.as_slice() {
                [longitude, latitude, ..] => Coordinate::new(*latitude, *longitude),
                _ => return None,
            },
            EmbeddedLocation::Named {
                latitude,
                longitude,
            } => Coordinate::new(*latitude, *longitude),
            EmbeddedLocation::Geometry(text) => return wkt::decode(Some(text.as_str())),
        };

        if coordinate.latitude.is_finite() && coordinate.longitude.is_finite() {
            Some(coordinate)
        } else {
            None
        }
    }
}

impl From<Coordinate> for EmbeddedLocation {
    fn from(coordinate: Coordinate) -> Self {
        EmbeddedLocation::Named {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        }
    }
}

/// A caller-supplied record together with its (optional) location.
///
/// The record's own fields are flattened next to `location` on the
/// wire. On decode the nested `location` key is tried first; if it is
/// missing or unrecognised, top-level `coordinates` or
/// `latitude`/`longitude` fields are used instead, so flat payloads
/// (including serialized [`MatchResult`](super::matched::MatchResult)s)
/// keep their position. `null`, `{}` and unrecognised shapes become
/// [`None`] instead of failing the whole payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocatedEntity<T> {
    #[serde(flatten)]
    pub record: T,

    pub location: Option<EmbeddedLocation>,
}

impl<T> LocatedEntity<T> {
    pub fn new(record: T, location: Option<EmbeddedLocation>) -> Self {
        Self { record, location }
    }

    /// Wraps `record` with a named `{latitude, longitude}` location.
    pub fn at(record: T, coordinate: Coordinate) -> Self {
        Self::new(record, Some(coordinate.into()))
    }
}

impl<T> AsLocated for LocatedEntity<T> {
    fn embedded_location(&self) -> Option<&EmbeddedLocation> {
        self.location.as_ref()
    }
}

/// Top-level keys that can carry a location next to the record fields.
const FLAT_LOCATION_KEYS: [&str; 3] = ["coordinates", "latitude", "longitude"];

impl<'de, T> Deserialize<'de> for LocatedEntity<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;

        let location = fields
            .remove("location")
            .and_then(|value| EmbeddedLocation::deserialize(value).ok())
            .or_else(|| flat_location(&fields));

        let record = T::deserialize(Value::Object(fields)).map_err(D::Error::custom)?;
        Ok(LocatedEntity { record, location })
    }
}

fn flat_location(fields: &Map<String, Value>) -> Option<EmbeddedLocation> {
    let candidate: Map<String, Value> = FLAT_LOCATION_KEYS
        .iter()
        .filter_map(|key| fields.get(*key).map(|value| (key.to_string(), value.clone())))
        .collect();
    if candidate.is_empty() {
        return None;
    }
    EmbeddedLocation::deserialize(Value::Object(candidate)).ok()
}
