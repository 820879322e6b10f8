//! Periodic silent refresh

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::session::SessionClient;

/// One minute under the 15 minute access token lifetime
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(14 * 60);

/// Background task renewing the access token while the session is authenticated
///
/// Ticks are skipped while there is no session, so a later login through the
/// same client is kept alive too. Dropping the handle stops the task.
pub struct RefreshTimer {
    handle: JoinHandle<()>,
}

impl RefreshTimer {
    pub fn spawn(client: SessionClient, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            interval.tick().await;

            loop {
                interval.tick().await;

                if !client.is_authenticated().await {
                    continue;
                }

                // Awaited in full before the next tick
                if !client.refresh().await {
                    tracing::info!("Silent refresh failed, session ended");
                }
            }
        });

        Self { handle }
    }

    /// Whether the task has stopped
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
