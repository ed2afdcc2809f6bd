//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use iguide_core::TargetOs;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the guide (q, Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // OS Selection
    // ─────────────────────────────────────────────────────────
    /// Show the command variants for this OS
    SelectOs(TargetOs),
    /// Flip between the two OS families
    ToggleOs,

    // ─────────────────────────────────────────────────────────
    // Copy to Clipboard
    // ─────────────────────────────────────────────────────────
    /// Move the copy cursor to the next copyable command
    FocusNext,
    /// Move the copy cursor to the previous copyable command
    FocusPrevious,
    /// Copy the command under the copy cursor
    CopyFocused,
    /// Copy `text` and flash the confirmation flag named `key`
    CopyRequested { key: String, text: String },
    /// Clipboard write finished
    CopySucceeded { key: String },
    /// Clipboard write was rejected
    CopyFailed { key: String, reason: String },
    /// Reset timer fired for the copy identified by `generation`
    CopyFeedbackExpired { key: String, generation: u64 },

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,
}
