//! Points of interest: the static catalog and the pure operations over it.
//!
//! # Module Structure
//!
//! - `model`: POI, category and coordinate types
//! - `catalog`: loading and validating the read-only catalog
//! - `guidance`: profile-aware note resolution
//! - `filter`: category filter buckets
//! - `map`: static placement on a character grid

mod catalog;
mod filter;
mod guidance;
mod map;
mod model;

pub use catalog::Catalog;
pub use filter::{PoiFilter, filter};
pub use guidance::{DEFAULT_GUIDANCE, resolve_notes};
pub use map::{LegendEntry, TextMap};
pub use model::{MapPoint, Poi, PoiCategory};
