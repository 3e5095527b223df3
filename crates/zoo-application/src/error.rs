//! Errors surfaced by the view state machine.
//!
//! Every variant is recoverable: the state is left unchanged and the message
//! is shown to the visitor.

use thiserror::Error;
use zoo_core::AccessibilityProfile;
use zoo_core::user::AuthError;

use crate::app::Screen;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Not available on the {actual} screen (needs {expected})")]
    WrongScreen { expected: Screen, actual: Screen },

    #[error("Select at least one profile to continue.")]
    EmptySelection,

    #[error("Custom selection is not active")]
    NotCustomizing,

    #[error("{0} cannot be picked in a custom selection")]
    NotSelectable(AccessibilityProfile),

    #[error("Logout is not available in guest-only mode")]
    GuestOnly,

    #[error("No point of interest with id '{0}'")]
    UnknownPoi(String),

    #[error("No point of interest is open")]
    NoSelection,
}

pub type Result<T> = std::result::Result<T, AppError>;
