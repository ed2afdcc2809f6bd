//! Core domain types shared by every layer

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operating system family used to pick shell-specific command variants.
///
/// Always exactly one of two values; defaults to the unix-like family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetOs {
    /// macOS / Linux shells
    #[default]
    Unix,
    /// Windows `cmd.exe`
    Windows,
}

impl TargetOs {
    pub const ALL: [TargetOs; 2] = [TargetOs::Unix, TargetOs::Windows];

    /// The other OS family
    pub fn toggled(self) -> Self {
        match self {
            TargetOs::Unix => TargetOs::Windows,
            TargetOs::Windows => TargetOs::Unix,
        }
    }

    /// Human-readable label shown on the selector buttons
    pub fn label(self) -> &'static str {
        match self {
            TargetOs::Unix => "macOS / Linux",
            TargetOs::Windows => "Windows",
        }
    }

    /// Short identifier used on the command line and in config files
    pub fn as_str(self) -> &'static str {
        match self {
            TargetOs::Unix => "unix",
            TargetOs::Windows => "windows",
        }
    }
}

impl fmt::Display for TargetOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetOs {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unix" | "linux" | "macos" | "mac" => Ok(TargetOs::Unix),
            "windows" | "win" => Ok(TargetOs::Windows),
            other => Err(format!(
                "unknown OS '{}' (expected 'unix' or 'windows')",
                other
            )),
        }
    }
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unix() {
        assert_eq!(TargetOs::default(), TargetOs::Unix);
    }

    #[test]
    fn test_toggle_round_trip() {
        for os in TargetOs::ALL {
            assert_ne!(os.toggled(), os);
            assert_eq!(os.toggled().toggled(), os);
        }
    }

    #[test]
    fn test_from_str_accepts_aliases() {
        assert_eq!("unix".parse::<TargetOs>(), Ok(TargetOs::Unix));
        assert_eq!("Linux".parse::<TargetOs>(), Ok(TargetOs::Unix));
        assert_eq!("macos".parse::<TargetOs>(), Ok(TargetOs::Unix));
        assert_eq!("WINDOWS".parse::<TargetOs>(), Ok(TargetOs::Windows));
        assert_eq!(" win ".parse::<TargetOs>(), Ok(TargetOs::Windows));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "beos".parse::<TargetOs>().unwrap_err();
        assert!(err.contains("beos"));
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(TargetOs::Unix.to_string(), "unix");
        assert_eq!(TargetOs::Windows.to_string(), "windows");
    }

    #[test]
    fn test_serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&TargetOs::Windows).unwrap(),
            "\"windows\""
        );
        let os: TargetOs = serde_json::from_str("\"unix\"").unwrap();
        assert_eq!(os, TargetOs::Unix);
    }
}
