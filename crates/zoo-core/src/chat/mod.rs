//! Assistant chat types.

mod message;

pub use message::{ChatMessage, MessageRole};
