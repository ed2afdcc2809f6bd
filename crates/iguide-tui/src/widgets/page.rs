//! Guide page widget
//!
//! Lays a [`Document`] out as styled lines for the available width and
//! renders the slice selected by [`PageViewState`]. Layout happens on every
//! frame, so a resize or an OS toggle never leaves stale line positions.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use iguide_app::{CopyStates, PageViewState};
use iguide_core::{Block, CalloutKind, Document, LineKind, TargetOs, Window, WindowLine};

use crate::theme::{icons::IconSet, palette, styles};

/// Border plus padding on each side of a window line
const WINDOW_CHROME: usize = 4;
/// Space kept free for the copy icon on copyable lines
const COPY_ICON_WIDTH: usize = 2;

/// A document laid out for one width
#[derive(Debug, Default)]
pub struct PageLines {
    pub lines: Vec<Line<'static>>,
    /// First line of each copy target, in display order
    pub targets: Vec<(&'static str, usize)>,
}

impl PageLines {
    /// Line index of the copy target `key`
    pub fn line_of(&self, key: &str) -> Option<usize> {
        self.targets
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, line)| *line)
    }
}

/// Lay `document` out for a content area `width` columns wide
pub fn layout_document(
    document: &Document,
    copy_states: &CopyStates,
    focused: Option<&str>,
    icons: IconSet,
    width: usize,
) -> PageLines {
    let mut builder = PageBuilder {
        copy_states,
        focused,
        icons,
        width: width.max(WINDOW_CHROME + COPY_ICON_WIDTH + 1),
        page: PageLines::default(),
    };

    for (index, block) in document.blocks.iter().enumerate() {
        if index > 0 {
            builder.blank();
        }
        builder.block(block);
    }

    builder.page
}

struct PageBuilder<'a> {
    copy_states: &'a CopyStates,
    focused: Option<&'a str>,
    icons: IconSet,
    width: usize,
    page: PageLines,
}

impl PageBuilder<'_> {
    fn push(&mut self, line: Line<'static>) {
        self.page.lines.push(line);
    }

    fn blank(&mut self) {
        self.push(Line::default());
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Title { text, subtitle } => {
                self.push(Line::from(Span::styled(*text, styles::title())));
                for row in wrap(subtitle, self.width) {
                    self.push(Line::from(Span::styled(row, styles::text_secondary())));
                }
            }

            Block::Heading { icon, text } => {
                let mut spans = Vec::new();
                if let Some(glyph) = self.icons.section(*icon) {
                    spans.push(Span::styled(format!("{} ", glyph), styles::accent()));
                }
                spans.push(Span::styled(*text, styles::text_bold()));
                self.push(Line::from(spans));
                self.push(Line::from(Span::styled(
                    "─".repeat(self.width),
                    styles::text_muted(),
                )));
            }

            Block::Step { number, title } => {
                self.push(Line::from(vec![
                    Span::styled(format!(" {} ", number), styles::step_badge()),
                    Span::raw(" "),
                    Span::styled(*title, styles::text_bold()),
                ]));
            }

            Block::Subheading { text } => {
                self.push(Line::from(vec![
                    Span::styled(format!("{} ", self.icons.chevron()), styles::accent()),
                    Span::styled(*text, styles::text_bold()),
                ]));
            }

            Block::Paragraph { text } => {
                for row in wrap(text, self.width) {
                    self.push(Line::from(Span::styled(row, styles::text_secondary())));
                }
            }

            Block::Bullets { items } => {
                for item in items.iter() {
                    for (index, row) in wrap(item, self.width.saturating_sub(4)).into_iter().enumerate() {
                        let marker = if index == 0 {
                            format!("  {} ", self.icons.chevron())
                        } else {
                            "    ".to_string()
                        };
                        self.push(Line::from(vec![
                            Span::styled(marker, styles::accent()),
                            Span::styled(row, styles::text_primary()),
                        ]));
                    }
                }
            }

            Block::Callout { kind, title, body } => self.callout(*kind, *title, *body),
            Block::OsSelector { selected } => self.os_selector(*selected),
            Block::Window(window) => self.window(window),
        }
    }

    fn callout(&mut self, kind: CalloutKind, title: &'static str, body: &'static str) {
        let bar = Span::styled("▌ ", styles::callout(kind));
        let icon = match kind {
            CalloutKind::Advice => self.icons.alert(),
            CalloutKind::Hint => self.icons.info(),
        };

        self.push(Line::from(vec![
            bar.clone(),
            Span::styled(format!("{} {}", icon, title), styles::callout(kind)),
        ]));
        for row in wrap(body, self.width.saturating_sub(2)) {
            self.push(Line::from(vec![
                bar.clone(),
                Span::styled(row, styles::text_secondary()),
            ]));
        }
    }

    fn os_selector(&mut self, selected: TargetOs) {
        let mut spans = vec![Span::styled("Select your OS  ", styles::text_muted())];
        for os in TargetOs::ALL {
            let is_selected = os == selected;
            let mark = if is_selected {
                self.icons.dot()
            } else {
                self.icons.circle()
            };
            spans.push(Span::styled(
                format!(" {} {} ", mark, os.label()),
                styles::os_choice(is_selected),
            ));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(" o", styles::keybinding()));
        spans.push(Span::styled(" toggle", styles::text_muted()));
        self.push(Line::from(spans));
    }

    fn window(&mut self, window: &Window) {
        let border = styles::border_inactive();

        // ╭─ ● ● ● Terminal ───╮
        let dot = self.icons.dot();
        let label = window.label.as_str();
        let head = format!("╭─ {dot} {dot} {dot} {label} ");
        let fill = self.width.saturating_sub(head.width() + 1);
        self.push(Line::from(vec![
            Span::styled("╭─ ", border),
            Span::styled(dot, Style::default().fg(palette::DOT_RED)),
            Span::raw(" "),
            Span::styled(dot, Style::default().fg(palette::DOT_YELLOW)),
            Span::raw(" "),
            Span::styled(dot, Style::default().fg(palette::DOT_GREEN)),
            Span::styled(format!(" {} ", label), styles::text_muted()),
            Span::styled(format!("{}╮", "─".repeat(fill)), border),
        ]));

        for line in &window.lines {
            self.window_line(line);
        }

        self.push(Line::from(Span::styled(
            format!("╰{}╯", "─".repeat(self.width.saturating_sub(2))),
            border,
        )));
    }

    fn window_line(&mut self, line: &WindowLine) {
        let segments: Vec<(String, Style)> = match line.kind {
            LineKind::Command { prompt } => vec![
                (format!("{} ", prompt.as_str()), styles::prompt()),
                (line.text.to_string(), styles::command()),
            ],
            LineKind::Note { label } => vec![
                (format!("{} ", label), styles::note_label()),
                (line.text.to_string(), styles::command()),
            ],
            LineKind::Output => vec![(line.text.to_string(), styles::output())],
            LineKind::Code => vec![(line.text.to_string(), styles::code())],
        };

        let inner = self.width - WINDOW_CHROME;
        let text_width = match line.copy_key {
            Some(_) => inner - COPY_ICON_WIDTH,
            None => inner,
        };
        let is_focused = line.copy_key.is_some() && line.copy_key == self.focused;

        if let Some(key) = line.copy_key {
            self.page.targets.push((key, self.page.lines.len()));
        }

        for (row_index, (mut spans, used)) in
            wrap_segments(&segments, text_width).into_iter().enumerate()
        {
            spans.insert(0, Span::styled("│ ", styles::border_inactive()));
            spans.push(Span::styled(
                " ".repeat(text_width.saturating_sub(used)),
                styles::window_body(),
            ));

            match line.copy_key {
                Some(key) if row_index == 0 => {
                    let copied = self.copy_states.is_copied(key);
                    let icon = if copied {
                        self.icons.check()
                    } else {
                        self.icons.copy()
                    };
                    spans.push(Span::styled(format!(" {}", icon), styles::copy_icon(copied)));
                }
                Some(_) => spans.push(Span::styled(" ".repeat(COPY_ICON_WIDTH), styles::window_body())),
                None => {}
            }
            spans.push(Span::styled(" │", styles::border_inactive()));

            if is_focused {
                // Highlight everything between the borders
                let last = spans.len() - 1;
                for span in &mut spans[1..last] {
                    span.style = span.style.patch(styles::focused());
                }
            }

            self.push(Line::from(spans));
        }
    }
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width > width {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width > width {
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width {
                    rows.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
            continue;
        }

        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Hard-wrap styled segments at `width` columns, keeping whitespace intact.
///
/// Returns each row's spans together with its display width.
fn wrap_segments(segments: &[(String, Style)], width: usize) -> Vec<(Vec<Span<'static>>, usize)> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for (text, style) in segments {
        let mut chunk = String::new();
        for ch in text.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if used + ch_width > width {
                if !chunk.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut chunk), *style));
                }
                rows.push((std::mem::take(&mut spans), used));
                used = 0;
            }
            chunk.push(ch);
            used += ch_width;
        }
        if !chunk.is_empty() {
            spans.push(Span::styled(chunk, *style));
        }
    }

    rows.push((spans, used));
    rows
}

/// Scrollable guide page
pub struct Page<'a> {
    document: &'a Document,
    copy_states: &'a CopyStates,
    focused: Option<&'a str>,
    icons: IconSet,
}

impl<'a> Page<'a> {
    pub fn new(document: &'a Document, copy_states: &'a CopyStates, icons: IconSet) -> Self {
        Self {
            document,
            copy_states,
            focused: None,
            icons,
        }
    }

    /// Highlight the copy target `key`
    pub fn focused(mut self, key: Option<&'a str>) -> Self {
        self.focused = key;
        self
    }
}

impl StatefulWidget for Page<'_> {
    type State = PageViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width < 3 || area.height == 0 {
            return;
        }

        let [content, scrollbar_area] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(1)]).areas(area);
        let content = Rect {
            x: content.x + 1,
            width: content.width.saturating_sub(2),
            ..content
        };

        let page = layout_document(
            self.document,
            self.copy_states,
            self.focused,
            self.icons,
            content.width as usize,
        );

        let visible = content.height as usize;
        state.update_content_size(page.lines.len(), visible);
        if state.reveal_focus {
            if let Some(line) = self.focused.and_then(|key| page.line_of(key)) {
                state.reveal(line);
            }
        }

        let total = page.lines.len();
        let lines: Vec<Line<'static>> = page
            .lines
            .into_iter()
            .skip(state.offset)
            .take(visible)
            .collect();
        Paragraph::new(lines).render(content, buf);

        if total > visible {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible)).position(state.offset);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .style(styles::border_inactive())
                .render(scrollbar_area, buf, &mut scrollbar_state);
        }
    }
}
