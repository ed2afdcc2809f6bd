//! Configuration file parsing for Insight Guide
//!
//! Supports `<config_dir>/insight-guide/config.toml` (or `IGUIDE_CONFIG`).

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, CONFIG_ENV_VAR};
pub use types::*;
