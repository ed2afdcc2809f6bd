//! Clipboard access
//!
//! The write is the only suspending operation in the guide. Handlers never
//! touch the clipboard directly; `actions` runs the write on a background task
//! and reports the outcome back as a message.

use iguide_core::prelude::*;

/// Write-only access to a clipboard
#[trait_variant::make(Clipboard: Send)]
pub trait LocalClipboard {
    /// Replace the clipboard contents with `text`
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// The platform clipboard, backed by `arboard`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let text = text.to_owned();

        // arboard blocks (X11/Wayland round trips), keep it off the runtime
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| Error::clipboard(format!("Failed to access clipboard: {}", e)))?;
            clipboard
                .set_text(text)
                .map_err(|e| Error::clipboard(format!("Failed to set clipboard text: {}", e)))
        })
        .await
        .map_err(|e| Error::clipboard(format!("Clipboard task failed: {}", e)))?
    }
}
