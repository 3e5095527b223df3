//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: the persisted visitor session
//! - `auth`: the authenticator seam and the fixed-credential implementation
//! - `repository`: persistence trait for the session record

mod auth;
mod model;
mod repository;

pub use auth::{AuthError, Authenticator, CredentialAuthenticator, Credentials};
pub use model::{GUEST_USERNAME, UserState};
pub use repository::UserStateRepository;
