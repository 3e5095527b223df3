//! The guide screen: category filter over the catalog and the POI detail view.

use std::sync::Arc;

use zoo_core::ProfileSet;
use zoo_core::poi::{self, Catalog, Poi, PoiFilter, resolve_notes};

use crate::error::{AppError, Result};

pub const ROUTE_HINT: &str = "Ask ZooBuddy for the best route here!";

/// Everything the detail view shows for one POI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoiDetail {
    pub id: String,
    pub emoji: String,
    pub name: String,
    pub category_label: String,
    pub description: String,
    /// Merged guidance for the active profiles.
    pub guidance: String,
    pub hint: &'static str,
}

/// Filter and selection state of the guide.
///
/// Neither the filter nor the selection ever touches the catalog, and
/// closing the detail view leaves the filter as it was.
#[derive(Debug, Clone)]
pub struct GuideState {
    catalog: Arc<Catalog>,
    profiles: ProfileSet,
    filter: PoiFilter,
    selected: Option<String>,
}

impl GuideState {
    pub fn new(catalog: Arc<Catalog>, profiles: ProfileSet) -> Self {
        Self {
            catalog,
            profiles,
            filter: PoiFilter::default(),
            selected: None,
        }
    }

    pub fn filter(&self) -> PoiFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: PoiFilter) {
        tracing::debug!("Guide filter: {}", filter);
        self.filter = filter;
    }

    pub fn profiles(&self) -> &ProfileSet {
        &self.profiles
    }

    /// POIs admitted by the current filter, in catalog order.
    pub fn visible(&self) -> Vec<&Poi> {
        poi::filter(&self.catalog, self.filter)
    }

    /// Opens the detail view for the POI with `id`.
    pub fn select(&mut self, id: &str) -> Result<&Poi> {
        let poi = self
            .catalog
            .get(id)
            .ok_or_else(|| AppError::UnknownPoi(id.to_string()))?;
        self.selected = Some(poi.id.clone());
        Ok(poi)
    }

    /// Opens the detail view for the `position`-th visible POI (1-based).
    pub fn select_visible(&mut self, position: usize) -> Result<&Poi> {
        let id = position
            .checked_sub(1)
            .and_then(|index| self.visible().get(index).map(|poi| poi.id.clone()))
            .ok_or_else(|| AppError::UnknownPoi(position.to_string()))?;
        self.select(&id)
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Poi> {
        self.selected.as_deref().and_then(|id| self.catalog.get(id))
    }

    /// The open detail view, if any.
    pub fn detail(&self) -> Option<PoiDetail> {
        self.selected().map(|poi| PoiDetail {
            id: poi.id.clone(),
            emoji: poi.emoji.clone(),
            name: poi.name.clone(),
            category_label: poi.category_label(),
            description: poi.description.clone(),
            guidance: resolve_notes(poi, &self.profiles),
            hint: ROUTE_HINT,
        })
    }
}
