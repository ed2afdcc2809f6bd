//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function and
//! dispatches the resulting actions.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::{handle_action, FeedbackTimers};
use crate::clipboard::Clipboard;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    clipboard: &Arc<C>,
    timers: &mut FeedbackTimers,
) where
    C: Clipboard + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), clipboard, timers);
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::fakes::{DeniedClipboard, RecordingClipboard};
    use std::time::Duration;

    async fn settle() {
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
    }

    struct Harness<C> {
        state: AppState,
        msg_tx: mpsc::Sender<Message>,
        msg_rx: mpsc::Receiver<Message>,
        clipboard: Arc<C>,
        timers: FeedbackTimers,
    }

    impl<C: Clipboard + Sync + 'static> Harness<C> {
        fn new(clipboard: C) -> Self {
            let (msg_tx, msg_rx) = mpsc::channel(16);
            Self {
                state: AppState::new(),
                msg_tx,
                msg_rx,
                clipboard: Arc::new(clipboard),
                timers: FeedbackTimers::new(),
            }
        }

        fn send(&mut self, message: Message) {
            process_message(
                &mut self.state,
                message,
                &self.msg_tx,
                &self.clipboard,
                &mut self.timers,
            );
        }

        /// Wait for the next background message and process it
        async fn pump(&mut self) {
            let msg = self.msg_rx.recv().await.unwrap();
            self.send(msg);
            // Let any timer spawned by the message start its sleep
            settle().await;
        }

        /// Process a background message that is already due, without
        /// letting the paused clock move
        async fn pump_ready(&mut self) {
            settle().await;
            let msg = self.msg_rx.try_recv().unwrap();
            self.send(msg);
        }

        /// Advance the paused clock and assert nothing became due
        async fn advance_quiet(&mut self, ms: u64) {
            tokio::time::advance(Duration::from_millis(ms)).await;
            settle().await;
            assert!(self.msg_rx.try_recv().is_err());
        }

        fn copy(&mut self, key: &str, text: &str) {
            self.send(Message::CopyRequested {
                key: key.into(),
                text: text.into(),
            });
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_sets_flag_until_reset() {
        let mut h = Harness::new(RecordingClipboard::default());

        h.copy("install", "pip install insight-cli-sarang");
        h.pump().await; // CopySucceeded

        assert!(h.state.copy_states.is_copied("install"));
        assert!(!h.state.copy_states.is_copied("version"));
        assert_eq!(
            h.clipboard.written(),
            vec!["pip install insight-cli-sarang"]
        );

        h.advance_quiet(1999).await;
        assert!(h.state.copy_states.is_copied("install"));

        tokio::time::advance(Duration::from_millis(1)).await;
        h.pump_ready().await; // CopyFeedbackExpired

        assert!(!h.state.copy_states.is_copied("install"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_other_keys_unaffected_by_reset() {
        let mut h = Harness::new(RecordingClipboard::default());

        h.copy("install", "pip install insight-cli-sarang");
        h.pump().await;
        h.advance_quiet(1000).await;

        h.copy("version", "insight-cli-sarang --version");
        h.pump().await;

        tokio::time::advance(Duration::from_millis(1000)).await;
        h.pump_ready().await; // install expires

        assert!(!h.state.copy_states.is_copied("install"));
        assert!(h.state.copy_states.is_copied("version"));

        tokio::time::advance(Duration::from_millis(1000)).await;
        h.pump_ready().await; // version expires

        assert!(!h.state.copy_states.is_copied("version"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_recopy_extends_feedback() {
        let mut h = Harness::new(RecordingClipboard::default());

        h.copy("install", "pip install insight-cli-sarang");
        h.pump().await;
        h.advance_quiet(1500).await;

        h.copy("install", "pip install insight-cli-sarang");
        h.pump().await;
        assert_eq!(h.timers.pending_count(), 1);

        // Past the first copy's reset time, still flagged
        h.advance_quiet(1000).await;
        assert!(h.state.copy_states.is_copied("install"));

        tokio::time::advance(Duration::from_millis(1000)).await;
        h.pump_ready().await;
        assert!(!h.state.copy_states.is_copied("install"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_write_leaves_flag_false() {
        let mut h = Harness::new(DeniedClipboard);

        h.copy("install", "pip install insight-cli-sarang");
        let msg = h.msg_rx.recv().await.unwrap();
        assert!(matches!(msg, Message::CopyFailed { ref key, .. } if key == "install"));
        h.send(msg);

        assert!(!h.state.copy_states.is_copied("install"));
        assert_eq!(h.timers.pending_count(), 0);
        assert!(!h.state.should_quit());
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_pending_reset() {
        let mut h = Harness::new(RecordingClipboard::default());

        h.copy("install", "pip install insight-cli-sarang");
        h.pump().await;
        assert_eq!(h.timers.pending_count(), 1);

        h.timers.shutdown();
        h.advance_quiet(5000).await;

        assert!(h.state.copy_states.is_copied("install"));
    }
}
