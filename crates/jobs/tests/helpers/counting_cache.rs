use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tezcache_application::ports::ResponseCache;
use tezcache_domain::{CacheKey, CacheStats, RpcResponse};

/// Cache double that only counts sweeps; each sweep reports
/// `removed_per_sweep` entries.
#[derive(Default)]
pub struct CountingCache {
    sweeps: AtomicUsize,
    removed_per_sweep: usize,
}

impl CountingCache {
    pub fn new(removed_per_sweep: usize) -> Self {
        Self {
            sweeps: AtomicUsize::new(0),
            removed_per_sweep,
        }
    }

    pub fn sweeps(&self) -> usize {
        self.sweeps.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResponseCache for CountingCache {
    async fn get(&self, _key: &CacheKey) -> Option<RpcResponse> {
        None
    }

    async fn put(&self, _key: CacheKey, _response: RpcResponse, _ttl: Duration) {}

    async fn purge_expired(&self) -> usize {
        self.sweeps.fetch_add(1, Ordering::SeqCst);
        self.removed_per_sweep
    }

    fn stats(&self) -> CacheStats {
        CacheStats::default()
    }
}
