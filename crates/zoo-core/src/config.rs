//! Application configuration model.
//!
//! Read from `config.toml`; every field has a default so a partial or
//! missing file is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::user::Credentials;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 16_000;

/// Environment variables checked, in order, for the generation API key.
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Skip the login screen and always boot as the guest visitor.
    pub guest_only: bool,
    /// Catalog file replacing the built-in guidebook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<PathBuf>,
    /// The credential pair accepted by the login screen.
    pub credentials: Credentials,
    pub assistant: AssistantConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub model: String,
    pub api_base_url: String,
    /// Upper bound on the guidebook context sent with each question.
    pub max_context_chars: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the platform location of the session record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,
}
