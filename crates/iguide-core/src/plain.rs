//! Plain-text export of a [`Document`]
//!
//! Deterministic, colorless rendering used by print mode and golden tests.

use crate::document::{Block, CalloutKind, Document, LineKind, Window, WindowLine};

const INDENT: &str = "  ";

/// Render the whole document. `is_copied` reports the confirmation flag of a
/// copy key.
pub fn render(doc: &Document, is_copied: impl Fn(&str) -> bool) -> String {
    let mut out = String::new();
    for (index, block) in doc.blocks.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        for line in render_block(block, &is_copied) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// Render one block into output lines (without trailing newlines)
pub fn render_block(block: &Block, is_copied: &impl Fn(&str) -> bool) -> Vec<String> {
    match block {
        Block::Title { text, subtitle } => vec![
            text.to_string(),
            "=".repeat(text.chars().count()),
            subtitle.to_string(),
        ],
        Block::Heading { text, .. } => vec![
            text.to_string(),
            "-".repeat(text.chars().count()),
        ],
        Block::Step { number, title } => vec![format!("{}. {}", number, title)],
        Block::Subheading { text } => vec![format!("### {}", text)],
        Block::Paragraph { text } => vec![text.to_string()],
        Block::Bullets { items } => items.iter().map(|item| format!("{INDENT}> {item}")).collect(),
        Block::Callout { kind, title, body } => {
            let marker = match kind {
                CalloutKind::Advice => "!",
                CalloutKind::Hint => "i",
            };
            vec![format!("[{}] {}: {}", marker, title, body)]
        }
        Block::OsSelector { selected } => {
            let choices: Vec<String> = crate::types::TargetOs::ALL
                .iter()
                .map(|os| {
                    let mark = if os == selected { "x" } else { " " };
                    format!("[{}] {}", mark, os.label())
                })
                .collect();
            vec![format!("OS: {}", choices.join("  "))]
        }
        Block::Window(window) => render_window(window, is_copied),
    }
}

fn render_window(window: &Window, is_copied: &impl Fn(&str) -> bool) -> Vec<String> {
    let mut lines = vec![format!("[{}]", window.label.as_str())];
    lines.extend(window.lines.iter().map(|line| render_line(line, is_copied)));
    lines
}

/// Render one window line, indented
pub fn render_line(line: &WindowLine, is_copied: &impl Fn(&str) -> bool) -> String {
    let body = match line.kind {
        LineKind::Command { prompt } => format!("{} {}", prompt.as_str(), line.text),
        LineKind::Note { label } => format!("{} {}", label, line.text),
        LineKind::Output | LineKind::Code => line.text.to_string(),
    };

    if body.is_empty() {
        return String::new();
    }

    match line.copy_key {
        Some(key) if is_copied(key) => format!("{INDENT}{body}  [copied]"),
        Some(_) => format!("{INDENT}{body}  [copy]"),
        None => format!("{INDENT}{body}"),
    }
}
