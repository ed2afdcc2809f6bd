//! Custom widget components for the TUI

mod header;
mod page;
mod status_bar;

pub use header::MainHeader;
pub use page::{layout_document, wrap, Page, PageLines};
pub use status_bar::StatusBar;
