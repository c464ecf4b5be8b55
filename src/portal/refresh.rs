//! Periodic reload of the time-sensitive sections.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::Portal;

/// Running refresh task. Dropping the handle stops it.
pub struct RefreshHandle {
    handle: Option<JoinHandle<()>>,
    cancel: CancellationToken,
}

impl RefreshHandle {
    /// Start ticking every `period`; the first tick comes one period from now.
    pub fn spawn(portal: Portal, period: Duration) -> Self {
        let cancel = CancellationToken::new();
        let child = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut tick = time::interval_at(Instant::now() + period, period);
            tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = child.cancelled() => break,
                    _ = tick.tick() => {
                        // A hung reload must not outlive cancellation
                        tokio::select! {
                            _ = child.cancelled() => break,
                            _ = portal.refresh_tick() => {}
                        }
                    }
                }
            }
            tracing::debug!("Refresh task stopped");
        });

        Self {
            handle: Some(handle),
            cancel,
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Cancel and wait for the task to finish.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::warn!("Refresh task ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
