//! Header bar widget
//!
//! Provides the main header with the guide title and keybindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

/// Key hints shown on the right side of the header, most important first
const SHORTCUTS: &[(&str, &str)] = &[
    ("o", "OS"),
    ("Tab", "Next"),
    ("Enter", "Copy"),
    ("q", "Quit"),
];

/// Main header showing the app title and keybindings
pub struct MainHeader {
    icons: IconSet,
}

impl MainHeader {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Render glass container with rounded borders
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(format!(" {} ", self.icons.terminal()), styles::accent()),
            Span::styled("Insight CLI", styles::accent_bold()),
            Span::styled(" · Implementation Guide", styles::text_secondary()),
        ]);
        let title_width = title.width() as u16;
        buf.set_line(inner.x, inner.y, &title, inner.width);

        // Drop hints from the end until they fit next to the title
        let mut hints = SHORTCUTS.to_vec();
        loop {
            let line = shortcut_line(&hints);
            let width = line.width() as u16;
            if hints.is_empty() || title_width + width + 1 <= inner.width {
                if !hints.is_empty() {
                    let x = inner.x + inner.width - width;
                    buf.set_line(x, inner.y, &line, width);
                }
                break;
            }
            hints.pop();
        }
    }
}

fn shortcut_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(format!("[{}]", key), styles::keybinding()));
        spans.push(Span::styled(format!(" {} ", label), styles::text_muted()));
    }
    Line::from(spans)
}
