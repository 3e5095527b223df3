//! Loading `config.toml`.

use std::path::Path;

use zoo_core::config::AppConfig;
use zoo_core::error::Result;

/// Reads the configuration file.
///
/// A missing file yields the defaults. A file that exists but cannot be
/// parsed is logged and also yields the defaults.
pub fn load_config(path: &Path) -> AppConfig {
    match try_load_config(path) {
        Ok(Some(config)) => {
            tracing::debug!("Loaded config from {}", path.display());
            config
        }
        Ok(None) => {
            tracing::debug!("No config at {}, using defaults", path.display());
            AppConfig::default()
        }
        Err(e) => {
            tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
            AppConfig::default()
        }
    }
}

fn try_load_config(path: &Path) -> Result<Option<AppConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    Ok(Some(toml::from_str(&content)?))
}

/// Writes `config` as TOML, creating parent directories.
pub fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}
