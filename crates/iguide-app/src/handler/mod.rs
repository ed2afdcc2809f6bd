//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers
//! - `copy`: Copy-to-clipboard handlers
//! - `scroll`: Scroll handlers

pub(crate) mod copy;
pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Write `text` to the clipboard in the background.
    ///
    /// Reports back with `CopySucceeded` or `CopyFailed` for `key`.
    WriteClipboard { key: String, text: String },

    /// Send `CopyFeedbackExpired { key, generation }` after `after`.
    ///
    /// Replaces any reset still pending for `key`.
    ScheduleCopyReset {
        key: String,
        generation: u64,
        after: Duration,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
