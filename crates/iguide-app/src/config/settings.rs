//! Settings parser for config.toml

use super::types::Settings;
use iguide_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "insight-guide";

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "IGUIDE_CONFIG";

const DEFAULT_CONFIG: &str = r#"# Insight Guide Configuration

[behavior]
default_os = "unix"       # "unix" or "windows"

[ui]
icons = "unicode"         # "unicode" or "nerd_fonts"
copy_feedback_ms = 2000   # How long the copied indicator stays on
"#;

/// Resolve the config file path.
///
/// Order: `IGUIDE_CONFIG`, then `<config_dir>/insight-guide/config.toml`.
pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from a config file, falling back to defaults
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the default config file if it does not exist yet.
///
/// Returns `true` when a new file was written.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        debug!("Config file already exists at {:?}", config_path);
        return Ok(false);
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write config: {}", e)))?;
    info!("Created default config at {:?}", config_path);

    Ok(true)
}
