use super::storage::MemoryResponseCache;
use std::sync::atomic::Ordering as AtomicOrdering;
use tokio::time::Instant;
use tracing::debug;

/// Extension methods for MemoryResponseCache compaction and cleanup
impl MemoryResponseCache {
    /// Physically remove every expired entry.
    ///
    /// Returns the number of entries removed
    pub fn compact(&self) -> usize {
        let now = Instant::now();
        let mut removed = 0;

        self.entries.retain(|_key, record| {
            if record.is_expired_at(now) {
                removed += 1;
                false
            } else {
                true
            }
        });

        if removed > 0 {
            self.metrics
                .expirations
                .fetch_add(removed as u64, AtomicOrdering::Relaxed);

            debug!(
                removed,
                cache_size = self.entries.len(),
                "Cache compaction completed"
            );
        }

        removed
    }
}
