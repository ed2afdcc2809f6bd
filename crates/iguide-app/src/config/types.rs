//! Configuration types for Insight Guide
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - Related sub-types and enums

use iguide_core::TargetOs;
use serde::{Deserialize, Serialize};

/// Smallest accepted copy-feedback duration
pub const MIN_COPY_FEEDBACK_MS: u64 = 100;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// OS whose command variants are shown at startup
    #[serde(default)]
    pub default_os: TargetOs,
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals, default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// How long the copied indicator stays on, in milliseconds
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            copy_feedback_ms: default_copy_feedback_ms(),
        }
    }
}

impl UiSettings {
    /// Copy feedback duration, clamped to [`MIN_COPY_FEEDBACK_MS`]
    pub fn copy_feedback(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.copy_feedback_ms.max(MIN_COPY_FEEDBACK_MS))
    }
}

fn default_copy_feedback_ms() -> u64 {
    2000
}
