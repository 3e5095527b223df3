//! Domain layer of the zoo accessibility guide.
//!
//! Everything here is pure or trait-only: the profile enumeration, the
//! read-only POI catalog and the operations over it, the visitor session
//! record, and the seams (authenticator, repository) the outer crates plug
//! into.

pub mod chat;
pub mod config;
pub mod error;
pub mod poi;
pub mod profile;
pub mod user;

// Re-export common types
pub use error::ZooError;
pub use profile::{AccessibilityProfile, ProfileSet};
