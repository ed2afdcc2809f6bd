//! Page view state - scroll position and viewport bounds.
//!
//! Shared by the handler layer (scroll commands) and the TUI layer, which
//! reports content and viewport size on every render.

/// Lines kept visible above/below a revealed line
const REVEAL_MARGIN: usize = 2;

/// State for page scrolling
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageViewState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Total number of lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
    /// Bring the focused copy target into view on the next render
    pub reveal_focus: bool,
}

impl PageViewState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Update with new content size, clamping the offset if content shrank
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Adjust the offset so `line` is visible with a small margin
    pub fn reveal(&mut self, line: usize) {
        if self.visible_lines == 0 {
            return;
        }

        let top = line.saturating_sub(REVEAL_MARGIN);
        let bottom = (line + REVEAL_MARGIN + 1).min(self.total_lines);

        if top < self.offset {
            self.offset = top;
        } else if bottom > self.offset + self.visible_lines {
            self.offset = bottom.saturating_sub(self.visible_lines);
        }
        self.offset = self.offset.min(self.max_offset());
    }
}
