//! Copy-to-clipboard handlers
//!
//! A copy is a round trip through the event loop: `CopyRequested` asks for a
//! clipboard write, the write reports `CopySucceeded`/`CopyFailed`, and a
//! success schedules the `CopyFeedbackExpired` that turns the flag off again.

use crate::state::AppState;
use iguide_core::prelude::*;

use super::{UpdateAction, UpdateResult};
use crate::message::Message;

/// Copy the command under the copy cursor
pub fn handle_copy_focused(state: &AppState) -> UpdateResult {
    match state.focused_target() {
        Some(target) => UpdateResult::message(Message::CopyRequested {
            key: target.key.to_string(),
            text: target.text.to_string(),
        }),
        None => UpdateResult::none(),
    }
}

/// Ask the event loop to write to the clipboard
pub fn handle_copy_requested(key: String, text: String) -> UpdateResult {
    debug!("Copy requested for '{}'", key);
    UpdateResult::action(UpdateAction::WriteClipboard { key, text })
}

/// Flag `key` as copied and schedule its reset
pub fn handle_copy_succeeded(state: &mut AppState, key: String) -> UpdateResult {
    let generation = state.copy_states.mark_copied(&key);
    let after = state.settings.ui.copy_feedback();
    debug!("Copied '{}' (generation {})", key, generation);

    UpdateResult::action(UpdateAction::ScheduleCopyReset {
        key,
        generation,
        after,
    })
}

/// Clipboard failures are logged and otherwise ignored
pub fn handle_copy_failed(key: String, reason: String) -> UpdateResult {
    error!("Failed to copy '{}': {}", key, reason);
    UpdateResult::none()
}

/// Clear the flag unless a newer copy of the same key owns it
pub fn handle_copy_feedback_expired(
    state: &mut AppState,
    key: String,
    generation: u64,
) -> UpdateResult {
    if !state.copy_states.expire(&key, generation) {
        trace!("Ignoring stale reset for '{}' (generation {})", key, generation);
    }
    UpdateResult::none()
}
