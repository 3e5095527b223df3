//! Application layer of the zoo accessibility guide.
//!
//! Coordinates the domain, the persisted session and the assistant into the
//! three screens of the guide.

pub mod app;
pub mod error;
pub mod guide;
pub mod profile_selector;

pub use app::{AppServices, Screen, ZooApp, route_question};
pub use error::AppError;
pub use guide::{GuideState, PoiDetail, ROUTE_HINT};
pub use profile_selector::{ProfileSelector, SelectorMode};
