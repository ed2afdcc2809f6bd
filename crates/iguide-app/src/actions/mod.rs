//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::clipboard::Clipboard;
use crate::message::Message;
use crate::UpdateAction;
use iguide_core::prelude::*;

pub mod timers;
pub use timers::FeedbackTimers;

/// Execute an action by spawning a background task
pub fn handle_action<C>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    clipboard: &Arc<C>,
    timers: &mut FeedbackTimers,
) where
    C: Clipboard + Sync + 'static,
{
    match action {
        UpdateAction::WriteClipboard { key, text } => {
            spawn_clipboard_write(key, text, msg_tx, Arc::clone(clipboard));
        }

        UpdateAction::ScheduleCopyReset {
            key,
            generation,
            after,
        } => {
            timers.schedule(key, generation, after, msg_tx);
        }
    }
}

/// Write to the clipboard and report the outcome as a message
fn spawn_clipboard_write<C>(
    key: String,
    text: String,
    msg_tx: mpsc::Sender<Message>,
    clipboard: Arc<C>,
) where
    C: Clipboard + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match clipboard.write_text(&text).await {
            Ok(()) => Message::CopySucceeded { key },
            Err(e) => Message::CopyFailed {
                key,
                reason: e.to_string(),
            },
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Clipboard result dropped, event loop has shut down");
        }
    });
}
