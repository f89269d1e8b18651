use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load configuration from the given TOML file.
///
/// A missing file is normal on first launch; an unreadable or invalid one is
/// logged. Both cases fall back to defaults so the UI always starts.
pub fn load_config(path: &Path) -> AppConfig {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(_) => {
            info!(path = %path.display(), "No configuration file, using defaults");
            return AppConfig::default();
        }
    };

    match parse_config(&data) {
        Ok(config) => {
            info!(path = %path.display(), "Loaded configuration");
            config
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid configuration, using defaults: {err}");
            AppConfig::default()
        }
    }
}

/// Parse a TOML configuration document into an [`AppConfig`].
pub fn parse_config(data: &str) -> Result<AppConfig> {
    let tables: ConfigTables =
        toml::from_str(data).context("Failed to parse configuration TOML")?;
    Ok(tables.into())
}
