//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use iguide_app::state::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// Only the page view state is written back: the page widget reports the
/// content size and follows the copy cursor.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(widgets::MainHeader::new(icons), areas.header);

    let focused = state.focused_target().map(|target| target.key);
    let mut page_view_state = state.page_view_state.clone();
    let page = widgets::Page::new(state.document(), &state.copy_states, icons).focused(focused);
    frame.render_stateful_widget(page, areas.page, &mut page_view_state);
    state.page_view_state = page_view_state;

    frame.render_widget(widgets::StatusBar::new(state, icons), areas.status);
}
