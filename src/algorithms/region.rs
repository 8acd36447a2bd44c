//! Coarse administrative region resolution.
//!
//! Used by the host for display and classification, not for precise
//! geofencing.

use crate::types::location::Coordinate;
use crate::types::region::RegionTable;
use crate::utils::bounds::is_within_region_bounds;

/// Name returned when no region contains the point.
pub const UNKNOWN_REGION: &str = "Unknown";

/// Resolves coordinates against an injected, read-only [`RegionTable`].
///
/// Holding only a shared reference, a resolver is cheap to copy and
/// safe to use from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct RegionResolver<'a> {
    table: &'a RegionTable,
}

impl<'a> RegionResolver<'a> {
    pub fn new(table: &'a RegionTable) -> Self {
        RegionResolver { table }
    }

    pub fn table(&self) -> &'a RegionTable {
        self.table
    }

    /// Returns the name of the first region, in table order, whose
    /// rectangle contains the point (edges inclusive), or
    /// [`UNKNOWN_REGION`].
    ///
    /// Rectangles may overlap. First match is the tie-break, even where
    /// it disagrees with the real boundary.
    pub fn resolve_region(&self, latitude: f64, longitude: f64) -> &'a str {
        let name = self
            .table
            .regions()
            .iter()
            .find(|region| is_within_region_bounds(latitude, longitude, &region.bounds))
            .map_or(UNKNOWN_REGION, |region| region.name.as_str());
        debug!("Resolved ({}, {}) to region {}", latitude, longitude, name);
        name
    }

    /// See [`RegionResolver::resolve_region`].
    pub fn resolve(&self, coordinate: &Coordinate) -> &'a str {
        self.resolve_region(coordinate.latitude, coordinate.longitude)
    }
}

/// Uses the built-in Guatemala department table.
impl Default for RegionResolver<'static> {
    fn default() -> Self {
        RegionResolver::new(RegionTable::guatemala())
    }
}
