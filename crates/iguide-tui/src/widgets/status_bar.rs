//! Status bar widget
//!
//! Displays the selected OS, the copy cursor and the "Copied!" flash.

use iguide_app::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

/// Status bar widget showing page state
pub struct StatusBar<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn os_indicator(&self) -> Span<'static> {
        Span::styled(
            format!(" {} {}", self.icons.dot(), self.state.selected_os.label()),
            styles::accent(),
        )
    }

    /// Position and text of the focused copy target
    fn focus_indicator(&self) -> Option<Span<'static>> {
        let target = self.state.focused_target()?;
        let count = self.state.document().copy_targets().len();
        Some(Span::styled(
            format!(
                "{} {}/{} {}",
                self.icons.copy(),
                self.state.focus + 1,
                count,
                target.text
            ),
            styles::text_secondary(),
        ))
    }

    fn copied_flash(&self) -> Option<Span<'static>> {
        self.state.copy_states.last_copied().map(|_| {
            Span::styled(
                format!("{} Copied!", self.icons.check()),
                styles::status_green(),
            )
        })
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let separator = || Span::styled(" │ ", styles::text_muted());

        let mut spans = vec![self.os_indicator()];
        if let Some(focus) = self.focus_indicator() {
            spans.push(separator());
            spans.push(focus);
        }
        if let Some(flash) = self.copied_flash() {
            spans.push(separator());
            spans.push(flash);
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
