//! User state repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::user::model::UserState;

/// Durable storage for the single visitor session record.
#[async_trait]
pub trait UserStateRepository: Send + Sync {
    /// Reads the stored session.
    ///
    /// Absent or unreadable data yields a fresh default session rather than
    /// an error; `Err` is reserved for storage that cannot be reached at all.
    async fn load(&self) -> Result<UserState>;

    /// Replaces the stored session.
    async fn save(&self, state: &UserState) -> Result<()>;
}
