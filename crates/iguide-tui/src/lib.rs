//! iguide-tui - Terminal UI for Insight Guide
//!
//! This crate provides the ratatui-based terminal interface: the page, header
//! and status bar widgets, terminal event polling, and the event loop that
//! drives `iguide-app`.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
