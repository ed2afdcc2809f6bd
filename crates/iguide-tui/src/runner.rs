//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use iguide_app::clipboard::Clipboard;
use iguide_app::config::Settings;
use iguide_app::message::Message;
use iguide_app::process::process_message;
use iguide_app::state::AppState;
use iguide_app::{signals, FeedbackTimers, SystemClipboard};
use iguide_core::prelude::*;

use super::{event, render, terminal};

/// Run the interactive guide until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!(
        "Starting guide: os={}, icons={}, copy_feedback={:?}",
        settings.behavior.default_os,
        settings.ui.icons,
        settings.ui.copy_feedback()
    );

    let mut term = ratatui::init();
    let mut state = AppState::with_settings(settings);

    // Unified message channel (signal handler, clipboard writes, reset timers)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    let clipboard = Arc::new(SystemClipboard::new());
    let mut timers = FeedbackTimers::new();

    let result = run_loop(
        &mut term,
        &mut state,
        msg_rx,
        msg_tx,
        &clipboard,
        &mut timers,
    );

    // No reset may fire into a torn-down view
    timers.shutdown();

    ratatui::restore();
    info!("Guide closed");

    result
}

/// Main event loop
fn run_loop<C>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    clipboard: &Arc<C>,
    timers: &mut FeedbackTimers,
) -> Result<()>
where
    C: Clipboard + Sync + 'static,
{
    while !state.should_quit() {
        // Process background messages (signals, clipboard results, timers)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, clipboard, timers);
        }

        // Render
        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, clipboard, timers);
        }
    }

    Ok(())
}
