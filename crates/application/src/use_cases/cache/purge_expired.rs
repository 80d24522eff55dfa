use crate::ports::ResponseCache;
use std::sync::Arc;
use tracing::debug;

/// Drives the cache service's own TTL eviction. The proxy path never calls
/// this.
pub struct PurgeExpiredEntriesUseCase {
    cache: Arc<dyn ResponseCache>,
}

impl PurgeExpiredEntriesUseCase {
    pub fn new(cache: Arc<dyn ResponseCache>) -> Self {
        Self { cache }
    }

    pub async fn execute(&self) -> usize {
        let removed = self.cache.purge_expired().await;
        debug!(removed, "Expired cache entries purged");
        removed
    }
}
