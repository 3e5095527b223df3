//! Point-of-interest domain model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::profile::AccessibilityProfile;

/// Kind of location a POI represents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PoiCategory {
    Animal,
    Amenity,
    Exit,
    Dining,
}

/// Normalized map coordinates, both axes in percent (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_within_bounds(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

/// A single mappable zoo location with accessibility metadata.
///
/// POIs are immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Poi {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub category: PoiCategory,
    pub position: MapPoint,
    pub description: String,
    pub notes: BTreeMap<AccessibilityProfile, String>,
}

impl Poi {
    /// Note for a single profile, if the POI has one.
    pub fn note(&self, profile: AccessibilityProfile) -> Option<&str> {
        self.notes.get(&profile).map(String::as_str)
    }

    /// Upper-cased category label used in the detail view.
    pub fn category_label(&self) -> String {
        self.category.to_string().to_uppercase()
    }
}
