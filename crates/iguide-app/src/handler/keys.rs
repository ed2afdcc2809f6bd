//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use iguide_core::TargetOs;

/// Convert key events to messages
pub fn handle_key(_state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // OS selection
        InputKey::Char('o') => Some(Message::ToggleOs),
        InputKey::Char('u') => Some(Message::SelectOs(TargetOs::Unix)),
        InputKey::Char('w') => Some(Message::SelectOs(TargetOs::Windows)),

        // Copy cursor
        InputKey::Tab | InputKey::Char('n') => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Char('p') => Some(Message::FocusPrevious),
        InputKey::Enter | InputKey::Char('c' | 'y') => Some(Message::CopyFocused),

        // Scrolling
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),

        _ => None,
    }
}
