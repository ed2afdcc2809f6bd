//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title + keybindings
    pub header: Rect,

    /// Scrollable guide page
    pub page: Rect,

    /// One-line status bar
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, page, status] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenAreas {
        header,
        page,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.page.y, 3);
        assert_eq!(layout.page.height, 20); // 24 - 3 - 1
        assert_eq!(layout.status.y, 23);
        assert_eq!(layout.status.height, 1);
    }

    #[test]
    fn test_tiny_terminal_keeps_page_row() {
        let layout = create(Rect::new(0, 0, 40, 5));
        assert_eq!(layout.page.height, 1);
    }
}
