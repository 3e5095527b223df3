//! Pluggable credential check guarding the login screen.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of a failed login. Deliberately does not say which field was wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password.")]
    InvalidCredentials,
}

/// Checks submitted credentials.
///
/// The login screen only sees this trait, so the fixed guest pair can be
/// swapped for a real identity provider without touching the state machine.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError>;
}

/// A fixed username/password pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "guest".to_string(),
            password: "zoo".to_string(),
        }
    }
}

/// Accepts exactly one credential pair, compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct CredentialAuthenticator {
    credentials: Credentials,
}

impl CredentialAuthenticator {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl Authenticator for CredentialAuthenticator {
    fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        // Both fields are always compared.
        let user_ok = username.to_lowercase() == self.credentials.username.to_lowercase();
        let pass_ok = password.to_lowercase() == self.credentials.password.to_lowercase();
        if user_ok && pass_ok {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_pair_accepted_case_insensitively() {
        let auth = CredentialAuthenticator::default();
        assert!(auth.authenticate("guest", "zoo").is_ok());
        assert!(auth.authenticate("GUEST", "Zoo").is_ok());
    }

    #[test]
    fn test_wrong_pairs_share_one_error() {
        let auth = CredentialAuthenticator::default();
        let wrong_user = auth.authenticate("visitor", "zoo").unwrap_err();
        let wrong_pass = auth.authenticate("guest", "park").unwrap_err();
        let both = auth.authenticate("", "").unwrap_err();
        assert_eq!(wrong_user, wrong_pass);
        assert_eq!(wrong_pass, both);
        assert_eq!(wrong_user.to_string(), "Invalid username or password.");
    }

    #[test]
    fn test_custom_credentials() {
        let auth = CredentialAuthenticator::new(Credentials {
            username: "keeper".to_string(),
            password: "Habitat".to_string(),
        });
        assert!(auth.authenticate("Keeper", "habitat").is_ok());
        assert!(auth.authenticate("guest", "zoo").is_err());
    }
}
