//! iguide-app - Application state and orchestration for Insight Guide
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the guide
//! page: state, messages, the update function, background actions (clipboard
//! writes and cancellable copy-feedback timers) and configuration loading.

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod page_view_state;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use actions::FeedbackTimers;
pub use clipboard::{Clipboard, SystemClipboard};
pub use config::Settings;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use page_view_state::PageViewState;
pub use state::{AppState, CopyStates};
