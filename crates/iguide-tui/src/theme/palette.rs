//! Color palette for the guide.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const WINDOW_BG: Color = Color::Rgb(17, 24, 39); // Terminal/code window body

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Copied / command output
pub const STATUS_YELLOW: Color = Color::Yellow; // Advice callouts
pub const STATUS_BLUE: Color = Color::Blue; // Hint callouts

// --- Window title bar dots ---
pub const DOT_RED: Color = Color::Red;
pub const DOT_YELLOW: Color = Color::Yellow;
pub const DOT_GREEN: Color = Color::Green;

// --- Copy cursor ---
pub const FOCUS_BG: Color = Color::Rgb(30, 41, 59);
