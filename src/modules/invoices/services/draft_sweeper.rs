use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use crate::modules::invoices::services::DraftStore;

/// How often idle drafts are swept
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Background job that evicts drafts left idle past the store's timeout
///
/// Spawned from main.rs; runs until the server stops.
pub struct DraftSweeper {
    store: Arc<DraftStore>,
    period: Duration,
}

impl DraftSweeper {
    pub fn new(store: Arc<DraftStore>, period: Duration) -> Self {
        Self { store, period }
    }

    pub async fn start(self) {
        info!(
            period_secs = self.period.as_secs(),
            idle_timeout_secs = self.store.idle_timeout().as_secs(),
            "Starting draft sweeper"
        );

        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.sweep().await;
        }
    }

    /// Run one eviction pass
    pub async fn sweep(&self) -> usize {
        let evicted = self.store.evict_idle().await;
        if evicted > 0 {
            info!(evicted, "Idle drafts evicted");
        }
        evicted
    }
}
