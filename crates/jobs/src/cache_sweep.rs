use std::sync::Arc;
use std::time::Duration;
use tezcache_application::use_cases::PurgeExpiredEntriesUseCase;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodically removes expired entries from the response cache.
///
/// Expired entries are already invisible to readers; this only reclaims
/// their memory.
pub struct CacheSweepJob {
    purge: Arc<PurgeExpiredEntriesUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(purge: Arc<PurgeExpiredEntriesUseCase>) -> Self {
        Self {
            purge,
            interval_secs: 30,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(interval_secs = self.interval_secs, "Starting cache sweep job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let removed = self.purge.execute().await;
                        if removed > 0 {
                            info!(removed, "Cache sweep completed");
                        } else {
                            debug!("Cache sweep found nothing to remove");
                        }
                    }
                }
            }
        })
    }
}
