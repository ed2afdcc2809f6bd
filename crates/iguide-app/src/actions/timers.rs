//! Cancellable copy-feedback reset timers
//!
//! At most one reset is pending per action identifier. Scheduling a new one
//! aborts the old, and every pending reset is aborted on shutdown or drop, so
//! no timer outlives the view that started it.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use iguide_core::prelude::*;

/// Pending reset tasks keyed by action identifier
#[derive(Debug, Default)]
pub struct FeedbackTimers {
    pending: HashMap<String, JoinHandle<()>>,
}

impl FeedbackTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send `CopyFeedbackExpired { key, generation }` after `after`,
    /// replacing any reset still pending for `key`
    pub fn schedule(
        &mut self,
        key: String,
        generation: u64,
        after: Duration,
        msg_tx: mpsc::Sender<Message>,
    ) {
        self.pending.retain(|_, handle| !handle.is_finished());

        let timer_key = key.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let _ = msg_tx
                .send(Message::CopyFeedbackExpired {
                    key: timer_key,
                    generation,
                })
                .await;
        });

        if let Some(previous) = self.pending.insert(key, handle) {
            trace!("Superseding pending copy reset");
            previous.abort();
        }
    }

    /// Number of resets that have not fired yet
    pub fn pending_count(&self) -> usize {
        self.pending
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Abort every pending reset
    pub fn shutdown(&mut self) {
        let count = self.pending.len();
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
        if count > 0 {
            debug!("Cancelled {} copy reset timer(s)", count);
        }
    }
}

impl Drop for FeedbackTimers {
    fn drop(&mut self) {
        for handle in self.pending.values() {
            handle.abort();
        }
    }
}
