//! Visitor session state.

use serde::{Deserialize, Serialize};

use crate::profile::ProfileSet;

/// Username given to the automatic session in guest-only mode.
pub const GUEST_USERNAME: &str = "guest";

/// The current visitor session.
///
/// Persisted as one JSON record on every change and restored at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    #[serde(default)]
    pub is_logged_in: bool,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub profiles: ProfileSet,
}

impl UserState {
    /// A fresh session: logged out, no profiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// A logged-in session with no profiles selected yet.
    pub fn logged_in(username: impl Into<String>) -> Self {
        Self {
            is_logged_in: true,
            username: username.into(),
            profiles: ProfileSet::new(),
        }
    }

    /// The automatic session used in guest-only mode.
    pub fn guest() -> Self {
        Self::logged_in(GUEST_USERNAME)
    }

    pub fn has_profiles(&self) -> bool {
        !self.profiles.is_empty()
    }
}
