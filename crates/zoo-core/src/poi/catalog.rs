//! Static POI catalog.
//!
//! The catalog is loaded once at startup, either from the guidebook embedded
//! in the binary or from a TOML file with the same layout, and is read-only
//! afterwards.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, ZooError};
use crate::poi::model::{MapPoint, Poi, PoiCategory};
use crate::profile::AccessibilityProfile;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.toml");

/// On-disk layout of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "poi")]
    pois: Vec<PoiRecord>,
}

#[derive(Debug, Deserialize)]
struct PoiRecord {
    id: String,
    name: String,
    #[serde(default)]
    emoji: String,
    category: PoiCategory,
    x: f64,
    y: f64,
    description: String,
    #[serde(default)]
    notes: BTreeMap<String, String>,
}

impl PoiRecord {
    fn into_poi(self) -> Result<Poi> {
        let mut notes = BTreeMap::new();
        for (key, note) in self.notes {
            let profile = AccessibilityProfile::from_str(&key).map_err(|_| {
                ZooError::config(format!(
                    "POI '{}' has a note for unknown profile '{}'",
                    self.id, key
                ))
            })?;
            if !note.trim().is_empty() {
                notes.insert(profile, note);
            }
        }

        let position = MapPoint::new(self.x, self.y);
        if !position.is_within_bounds() {
            return Err(ZooError::config(format!(
                "POI '{}' has coordinates outside 0-100: ({}, {})",
                self.id, self.x, self.y
            )));
        }

        Ok(Poi {
            id: self.id,
            name: self.name,
            emoji: self.emoji,
            category: self.category,
            position,
            description: self.description,
            notes,
        })
    }
}

/// Ordered, immutable collection of POIs.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pois: Vec<Poi>,
}

impl Catalog {
    /// Builds a catalog from already-constructed POIs, validating ids.
    pub fn new(pois: Vec<Poi>) -> Result<Self> {
        let mut seen = HashSet::new();
        for poi in &pois {
            if poi.id.trim().is_empty() {
                return Err(ZooError::config(format!(
                    "POI '{}' has an empty id",
                    poi.name
                )));
            }
            if !seen.insert(poi.id.as_str()) {
                return Err(ZooError::config(format!("Duplicate POI id '{}'", poi.id)));
            }
        }
        Ok(Self { pois })
    }

    /// The guidebook compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        let pois = file
            .pois
            .into_iter()
            .map(PoiRecord::into_poi)
            .collect::<Result<Vec<_>>>()?;
        Self::new(pois)
    }

    /// Loads a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded {} POIs from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// POIs in declaration order.
    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    pub fn get(&self, id: &str) -> Option<&Poi> {
        self.pois.iter().find(|poi| poi.id == id)
    }

    pub fn len(&self) -> usize {
        self.pois.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }
}
