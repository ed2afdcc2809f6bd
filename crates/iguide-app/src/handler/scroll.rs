//! Scroll message handlers
//!
//! Manual scrolling releases the copy cursor's hold on the viewport.

use crate::state::AppState;

use super::UpdateResult;

/// Handle scroll up message
pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.page_view_state.reveal_focus = false;
    state.page_view_state.scroll_up(1);
    UpdateResult::none()
}

/// Handle scroll down message
pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.page_view_state.reveal_focus = false;
    state.page_view_state.scroll_down(1);
    UpdateResult::none()
}

/// Handle scroll to top message
pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.page_view_state.reveal_focus = false;
    state.page_view_state.scroll_to_top();
    UpdateResult::none()
}

/// Handle scroll to bottom message
pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.page_view_state.reveal_focus = false;
    state.page_view_state.scroll_to_bottom();
    UpdateResult::none()
}

/// Handle page up message
pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.page_view_state.reveal_focus = false;
    state.page_view_state.page_up();
    UpdateResult::none()
}

/// Handle page down message
pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.page_view_state.reveal_focus = false;
    state.page_view_state.page_down();
    UpdateResult::none()
}
