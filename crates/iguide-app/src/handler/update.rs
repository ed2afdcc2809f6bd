//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use iguide_core::prelude::*;
use iguide_core::AppPhase;

use super::{copy, keys::handle_key, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // OS Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectOs(os) => {
            debug!("Selected OS: {}", os);
            state.select_os(os);
            UpdateResult::none()
        }

        Message::ToggleOs => UpdateResult::message(Message::SelectOs(state.selected_os.toggled())),

        // ─────────────────────────────────────────────────────────
        // Copy to Clipboard
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.move_focus(1);
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.move_focus(-1);
            UpdateResult::none()
        }

        Message::CopyFocused => copy::handle_copy_focused(state),
        Message::CopyRequested { key, text } => copy::handle_copy_requested(key, text),
        Message::CopySucceeded { key } => copy::handle_copy_succeeded(state, key),
        Message::CopyFailed { key, reason } => copy::handle_copy_failed(key, reason),
        Message::CopyFeedbackExpired { key, generation } => {
            copy::handle_copy_feedback_expired(state, key, generation)
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
    }
}
