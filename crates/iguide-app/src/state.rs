//! Application state (Model in TEA pattern)

use std::collections::HashMap;

use crate::config::Settings;
use crate::page_view_state::PageViewState;
use iguide_core::{AppPhase, CopyTarget, Document, TargetOs};

/// One entry of the copy-state map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CopyFlag {
    copied: bool,
    /// Generation of the copy that last set the flag
    generation: u64,
}

/// Action identifier -> "recently copied" flag.
///
/// Every successful copy bumps a generation counter; a reset only clears the
/// flag when it carries the generation of the most recent copy for that key.
#[derive(Debug, Clone, Default)]
pub struct CopyStates {
    flags: HashMap<String, CopyFlag>,
    next_generation: u64,
    /// Most recent key still flagged, for the status bar
    last_copied: Option<String>,
}

impl CopyStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to copied and return the generation its reset must carry
    pub fn mark_copied(&mut self, key: &str) -> u64 {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.flags.insert(
            key.to_string(),
            CopyFlag {
                copied: true,
                generation,
            },
        );
        self.last_copied = Some(key.to_string());
        generation
    }

    /// Clear `key` if `generation` is still current.
    ///
    /// Returns `true` if the flag was cleared.
    pub fn expire(&mut self, key: &str, generation: u64) -> bool {
        let Some(flag) = self.flags.get_mut(key) else {
            return false;
        };
        if !flag.copied || flag.generation != generation {
            return false;
        }

        flag.copied = false;
        if self.last_copied.as_deref() == Some(key) {
            self.last_copied = None;
        }
        true
    }

    pub fn is_copied(&self, key: &str) -> bool {
        self.flags.get(key).is_some_and(|flag| flag.copied)
    }

    /// Key of the most recent copy whose flag is still set
    pub fn last_copied(&self) -> Option<&str> {
        self.last_copied.as_deref()
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Loaded configuration
    pub settings: Settings,

    /// OS whose command variants are displayed
    pub selected_os: TargetOs,

    /// The guide laid out for `selected_os`
    document: Document,

    /// Transient "recently copied" flags
    pub copy_states: CopyStates,

    /// Index into `document.copy_targets()` of the copy cursor
    pub focus: usize,

    /// Scroll state of the page body
    pub page_view_state: PageViewState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create state with the configured default OS selected
    pub fn with_settings(settings: Settings) -> Self {
        let selected_os = settings.behavior.default_os;
        Self {
            phase: AppPhase::Running,
            settings,
            selected_os,
            document: Document::build(selected_os),
            copy_states: CopyStates::new(),
            focus: 0,
            page_view_state: PageViewState::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// The guide as currently displayed
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Switch the displayed command variants
    pub fn select_os(&mut self, os: TargetOs) {
        if self.selected_os == os {
            return;
        }
        self.selected_os = os;
        self.document = Document::build(os);

        let count = self.document.copy_targets().len();
        if self.focus >= count {
            self.focus = count.saturating_sub(1);
        }
    }

    /// The copy target under the copy cursor
    pub fn focused_target(&self) -> Option<CopyTarget> {
        self.document.copy_targets().get(self.focus).copied()
    }

    /// Move the copy cursor by `delta`, wrapping at both ends
    pub fn move_focus(&mut self, delta: isize) {
        let count = self.document.copy_targets().len();
        if count == 0 {
            return;
        }
        let count = count as isize;
        self.focus = (self.focus as isize + delta).rem_euclid(count) as usize;
        self.page_view_state.reveal_focus = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BehaviorSettings;

    #[test]
    fn test_copy_states_start_empty() {
        let states = CopyStates::new();
        assert!(!states.is_copied("install"));
        assert_eq!(states.last_copied(), None);
    }

    #[test]
    fn test_mark_then_expire_clears_flag() {
        let mut states = CopyStates::new();
        let generation = states.mark_copied("install");
        assert!(states.is_copied("install"));
        assert_eq!(states.last_copied(), Some("install"));

        assert!(states.expire("install", generation));
        assert!(!states.is_copied("install"));
        assert_eq!(states.last_copied(), None);
    }

    #[test]
    fn test_stale_generation_does_not_clear_newer_copy() {
        let mut states = CopyStates::new();
        let first = states.mark_copied("install");
        let second = states.mark_copied("install");
        assert_ne!(first, second);

        assert!(!states.expire("install", first));
        assert!(states.is_copied("install"));

        assert!(states.expire("install", second));
        assert!(!states.is_copied("install"));
    }

    #[test]
    fn test_expire_leaves_other_keys_alone() {
        let mut states = CopyStates::new();
        let install = states.mark_copied("install");
        states.mark_copied("version");

        states.expire("install", install);

        assert!(!states.is_copied("install"));
        assert!(states.is_copied("version"));
        assert_eq!(states.last_copied(), Some("version"));
    }

    #[test]
    fn test_expire_unknown_key_is_noop() {
        let mut states = CopyStates::new();
        assert!(!states.expire("missing", 1));
    }

    #[test]
    fn test_new_state_defaults_to_unix() {
        let state = AppState::new();
        assert_eq!(state.selected_os, TargetOs::Unix);
        assert_eq!(state.document().os, TargetOs::Unix);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_with_settings_uses_configured_os() {
        let settings = Settings {
            behavior: BehaviorSettings {
                default_os: TargetOs::Windows,
            },
            ..Default::default()
        };
        let state = AppState::with_settings(settings);
        assert_eq!(state.selected_os, TargetOs::Windows);
        assert_eq!(state.document().os, TargetOs::Windows);
    }

    #[test]
    fn test_select_os_rebuilds_document() {
        let mut state = AppState::new();
        state.select_os(TargetOs::Windows);

        let activate = state.document().copy_target("venv-activate").unwrap();
        assert_eq!(activate.text, r"venv\Scripts\activate");
    }

    #[test]
    fn test_move_focus_wraps() {
        let mut state = AppState::new();
        let count = state.document().copy_targets().len();

        state.move_focus(-1);
        assert_eq!(state.focus, count - 1);

        state.move_focus(1);
        assert_eq!(state.focus, 0);
        assert!(state.page_view_state.reveal_focus);
    }

    #[test]
    fn test_focused_target_starts_at_first_command() {
        let state = AppState::new();
        let target = state.focused_target().unwrap();
        assert_eq!(target.key, "quickstart-install");
    }
}
