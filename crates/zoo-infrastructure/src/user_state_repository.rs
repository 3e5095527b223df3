//! JSON-file implementation of the user state repository.

use std::path::PathBuf;

use async_trait::async_trait;
use zoo_core::error::{Result, ZooError};
use zoo_core::user::{GUEST_USERNAME, UserState, UserStateRepository};

use crate::storage::AtomicJsonFile;

/// Persists the visitor session as a single JSON record.
///
/// Loading never fails on bad data: a missing, empty or malformed file is
/// logged and replaced by a fresh session. In guest-only mode every loaded
/// session is forced to logged-in.
#[derive(Debug, Clone)]
pub struct JsonUserStateRepository {
    path: PathBuf,
    guest_only: bool,
}

impl JsonUserStateRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            guest_only: false,
        }
    }

    pub fn with_guest_only(mut self, guest_only: bool) -> Self {
        self.guest_only = guest_only;
        self
    }

    fn fresh_state(&self) -> UserState {
        if self.guest_only {
            UserState::guest()
        } else {
            UserState::new()
        }
    }

    fn restore(&self, loaded: std::result::Result<Option<UserState>, ZooError>) -> UserState {
        let mut state = match loaded {
            Ok(Some(state)) => {
                tracing::debug!("Restored user state from {}", self.path.display());
                state
            }
            Ok(None) => {
                tracing::debug!("No saved user state at {}", self.path.display());
                self.fresh_state()
            }
            Err(e) => {
                tracing::warn!(
                    "Discarding unreadable user state at {}: {}",
                    self.path.display(),
                    e
                );
                self.fresh_state()
            }
        };

        if self.guest_only {
            state.is_logged_in = true;
            if state.username.is_empty() {
                state.username = GUEST_USERNAME.to_string();
            }
        }
        state
    }
}

#[async_trait]
impl UserStateRepository for JsonUserStateRepository {
    async fn load(&self) -> Result<UserState> {
        let path = self.path.clone();
        let loaded = tokio::task::spawn_blocking(move || AtomicJsonFile::<UserState>::new(path).load())
            .await
            .map_err(|e| ZooError::internal(format!("Failed to join task: {}", e)))?;
        Ok(self.restore(loaded))
    }

    async fn save(&self, state: &UserState) -> Result<()> {
        let path = self.path.clone();
        let state = state.clone();
        tokio::task::spawn_blocking(move || {
            AtomicJsonFile::<UserState>::new(path).update(UserState::new(), |stored| {
                *stored = state;
                Ok(())
            })
        })
        .await
        .map_err(|e| ZooError::internal(format!("Failed to join task: {}", e)))??;

        tracing::debug!("Saved user state to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use zoo_core::AccessibilityProfile;

    #[tokio::test]
    async fn test_absent_file_yields_fresh_session() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonUserStateRepository::new(temp_dir.path().join("state.json"));
        assert_eq!(repo.load().await.unwrap(), UserState::new());
    }

    #[tokio::test]
    async fn test_malformed_file_yields_fresh_session() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        std::fs::write(&path, r#"{"isLoggedIn": "yes""#).unwrap();
        let repo = JsonUserStateRepository::new(path);
        assert_eq!(repo.load().await.unwrap(), UserState::new());
    }

    #[tokio::test]
    async fn test_save_recovers_from_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();
        let repo = JsonUserStateRepository::new(path);
        assert_eq!(repo.load().await.unwrap(), UserState::new());

        let mut state = UserState::guest();
        state.profiles.insert(AccessibilityProfile::Mobility);
        repo.save(&state).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), state);
    }

    #[tokio::test]
    async fn test_unknown_profile_yields_fresh_session() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        std::fs::write(
            &path,
            r#"{"isLoggedIn": true, "username": "guest", "profiles": ["Telepathic"]}"#,
        )
        .unwrap();
        let repo = JsonUserStateRepository::new(path);
        assert_eq!(repo.load().await.unwrap(), UserState::new());
    }

    #[tokio::test]
    async fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonUserStateRepository::new(temp_dir.path().join("nested/state.json"));

        let mut state = UserState::logged_in("Guest");
        state.profiles.insert(AccessibilityProfile::Cognitive);
        state.profiles.insert(AccessibilityProfile::Visual);
        repo.save(&state).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), state);
    }

    #[tokio::test]
    async fn test_guest_only_forces_login() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");

        let plain = JsonUserStateRepository::new(path.clone());
        let mut state = UserState::new();
        state.profiles.insert(AccessibilityProfile::Auditory);
        plain.save(&state).await.unwrap();

        let guest_repo = JsonUserStateRepository::new(path).with_guest_only(true);
        let loaded = guest_repo.load().await.unwrap();
        assert!(loaded.is_logged_in);
        assert_eq!(loaded.username, GUEST_USERNAME);
        assert_eq!(loaded.profiles, state.profiles);
    }

    #[tokio::test]
    async fn test_guest_only_fresh_session_is_logged_in() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonUserStateRepository::new(temp_dir.path().join("state.json"))
            .with_guest_only(true);
        assert_eq!(repo.load().await.unwrap(), UserState::guest());
    }
}
