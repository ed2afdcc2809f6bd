//! Semantic style builders for the guide.

use iguide_core::CalloutKind;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Page content ---
pub fn title() -> Style {
    accent_bold().add_modifier(Modifier::UNDERLINED)
}

pub fn step_badge() -> Style {
    Style::default()
        .fg(palette::DEEPEST_BG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn callout(kind: CalloutKind) -> Style {
    match kind {
        CalloutKind::Advice => Style::default().fg(palette::STATUS_YELLOW),
        CalloutKind::Hint => Style::default().fg(palette::STATUS_BLUE),
    }
}

pub fn os_choice(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(palette::DEEPEST_BG)
            .bg(palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        text_secondary()
    }
}

// --- Windows ---
pub fn window_body() -> Style {
    Style::default().bg(palette::WINDOW_BG)
}

pub fn prompt() -> Style {
    window_body().fg(palette::STATUS_GREEN)
}

pub fn command() -> Style {
    window_body().fg(palette::TEXT_PRIMARY)
}

pub fn output() -> Style {
    window_body().fg(palette::STATUS_GREEN)
}

pub fn code() -> Style {
    window_body().fg(palette::TEXT_SECONDARY)
}

pub fn note_label() -> Style {
    window_body().fg(palette::TEXT_MUTED)
}

pub fn copy_icon(copied: bool) -> Style {
    if copied {
        window_body()
            .fg(palette::STATUS_GREEN)
            .add_modifier(Modifier::BOLD)
    } else {
        window_body().fg(palette::TEXT_MUTED)
    }
}

/// Copy cursor highlight, layered over a line's own style
pub fn focused() -> Style {
    Style::default()
        .bg(palette::FOCUS_BG)
        .add_modifier(Modifier::BOLD)
}

// --- Block styles ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}
