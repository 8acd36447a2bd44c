//! Geospatial Proximity Matching Library.
//! Matches people to nearby volunteer activities by coordinates.
//!
//! Everything in this crate is a pure function over plain values. Data
//! access, authentication and rendering belong to the host service.

#[macro_use]
extern crate log;

pub mod error;

pub mod types {
    pub mod bounds;
    pub mod entity;
    pub mod location;
    pub mod matched;
    pub mod region;
}

pub mod utils {
    pub mod bounds;
    pub mod centroid;
    pub mod envelope;
    pub mod generator;
    pub mod haversine;
    pub mod wkt;
}

pub mod algorithms {
    pub mod proximity;
    pub mod region;
}

pub use algorithms::proximity::{find_nearby, find_nearby_with, find_nearest, NearbyQuery};
pub use algorithms::region::{RegionResolver, UNKNOWN_REGION};
pub use error::GeoError;
pub use types::bounds::{BoundingBox, GUATEMALA_BOUNDS};
pub use types::entity::{AsLocated, EmbeddedLocation, LocatedEntity};
pub use types::location::Coordinate;
pub use types::matched::MatchResult;
pub use types::region::{Region, RegionTable};
pub use utils::bounds::{is_valid_coordinate, is_within_region_bounds};
pub use utils::centroid::centroid;
pub use utils::envelope::bounding_box;
pub use utils::haversine::distance;
pub use utils::wkt::{decode, encode};
