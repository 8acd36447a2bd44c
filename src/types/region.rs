//! Struct definitions for [`Region`] and the [`RegionTable`] lookup data.
//!
//! A region is a coarse administrative area approximated by an
//! axis-aligned rectangle. Real boundaries are neither rectangular nor
//! disjoint, so rectangles may overlap; the order of the table is the
//! tie-break and must be kept stable.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::bounds::BoundingBox;
use crate::error::GeoError;

/// A named rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    #[serde(flatten)]
    pub bounds: BoundingBox,
}

impl Region {
    /// Creates a region, rejecting empty names, non-finite edges and
    /// inverted rectangles.
    pub fn new(
        name: impl Into<String>,
        north: f64,
        south: f64,
        east: f64,
        west: f64,
    ) -> Result<Self, GeoError> {
        let region = Region {
            name: name.into(),
            bounds: BoundingBox {
                north,
                south,
                east,
                west,
            },
        };
        region.validate()?;
        Ok(region)
    }

    fn validate(&self) -> Result<(), GeoError> {
        let invalid = |reason: &str| GeoError::InvalidRegion {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        let BoundingBox {
            north,
            south,
            east,
            west,
        } = self.bounds;

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if ![north, south, east, west].iter().all(|edge| edge.is_finite()) {
            return Err(invalid("edges must be finite"));
        }
        if south > north {
            return Err(invalid("south edge lies north of the north edge"));
        }
        if west > east {
            return Err(invalid("west edge lies east of the east edge"));
        }
        Ok(())
    }
}

/// Immutable, ordered region lookup data.
///
/// Built once and shared read-only; there is no way to mutate a table
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionTable {
    regions: Vec<Region>,
}

static GUATEMALA: Lazy<RegionTable> = Lazy::new(|| {
    // (name, north, south, east, west), first match wins.
    const DEPARTMENTS: [(&str, f64, f64, f64, f64); 22] = [
        ("Guatemala", 14.95, 14.30, -90.27, -90.70),
        ("Sacatepéquez", 14.75, 14.38, -90.62, -90.80),
        ("Chimaltenango", 14.95, 14.40, -90.65, -91.15),
        ("Escuintla", 14.40, 13.75, -90.40, -91.30),
        ("Santa Rosa", 14.45, 13.80, -89.95, -90.45),
        ("El Progreso", 15.10, 14.75, -89.80, -90.35),
        ("Zacapa", 15.35, 14.85, -89.20, -89.85),
        ("Chiquimula", 15.00, 14.35, -89.15, -89.85),
        ("Jalapa", 14.85, 14.45, -89.75, -90.20),
        ("Jutiapa", 14.50, 13.90, -89.50, -90.10),
        ("Izabal", 15.95, 15.00, -88.20, -89.40),
        ("Alta Verapaz", 16.05, 15.20, -89.40, -90.70),
        ("Baja Verapaz", 15.30, 14.90, -90.00, -90.75),
        ("Petén", 17.82, 15.85, -89.15, -91.45),
        ("Huehuetenango", 16.10, 15.10, -91.20, -92.10),
        ("Retalhuleu", 14.70, 14.20, -91.55, -92.05),
        ("San Marcos", 15.45, 14.50, -91.60, -92.25),
        ("Suchitepéquez", 14.65, 14.00, -91.10, -91.70),
        ("Quetzaltenango", 15.10, 14.50, -91.40, -91.90),
        ("Totonicapán", 15.10, 14.80, -91.20, -91.45),
        ("Sololá", 14.95, 14.55, -91.00, -91.40),
        ("Quiché", 16.10, 14.75, -90.60, -91.45),
    ];

    RegionTable {
        regions: DEPARTMENTS
            .iter()
            .map(|&(name, north, south, east, west)| Region {
                name: name.to_string(),
                bounds: BoundingBox {
                    north,
                    south,
                    east,
                    west,
                },
            })
            .collect(),
    }
});

impl RegionTable {
    /// Builds a table from regions in lookup order, validating each one.
    pub fn new(regions: Vec<Region>) -> Result<Self, GeoError> {
        for region in &regions {
            region.validate()?;
        }
        debug!("Region table built with {} regions", regions.len());
        Ok(RegionTable { regions })
    }

    /// Parses a JSON array of `{name, north, south, east, west}` objects.
    pub fn from_json(json: &str) -> Result<Self, GeoError> {
        let regions: Vec<Region> = serde_json::from_str(json)?;
        Self::new(regions)
    }

    /// The 22 departments of Guatemala, initialized on first use and
    /// shared for the lifetime of the process.
    pub fn guatemala() -> &'static RegionTable {
        &GUATEMALA
    }

    /// Regions in lookup order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
