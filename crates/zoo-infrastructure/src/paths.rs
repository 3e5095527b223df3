//! Unified path management for zoo guide files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/zoo-guide/                 # Config directory
//! └── config.toml                      # Application configuration
//!
//! ~/.local/share/zoo-guide/            # Data directory
//! ├── zoo_guide_user_state.json        # Persisted visitor session
//! └── logs/                            # Application logs
//!     └── zoo-guide.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

use zoo_core::error::{Result, ZooError};

const APP_DIR: &str = "zoo-guide";

/// Fixed namespace key of the persisted session record; also its file stem.
pub const USER_STATE_KEY: &str = "zoo_guide_user_state";

pub struct ZooPaths;

impl ZooPaths {
    /// Returns the zoo guide configuration directory.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ZooError::config("Cannot find config directory"))
    }

    /// Returns the zoo guide data directory.
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ZooError::config("Cannot find data directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the persisted session record.
    pub fn state_file() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join(format!("{USER_STATE_KEY}.json")))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("logs"))
    }
}
