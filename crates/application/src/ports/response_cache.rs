use async_trait::async_trait;
use std::time::Duration;
use tezcache_domain::{CacheKey, CacheStats, RpcResponse};

/// Key/value store for full responses with TTL-aware eviction.
///
/// Entries are owned by the cache service. The proxy only reads and writes
/// them; removal happens through the service's own expiry.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    async fn get(&self, key: &CacheKey) -> Option<RpcResponse>;

    /// Insert or overwrite. The last write for a key wins.
    async fn put(&self, key: CacheKey, response: RpcResponse, ttl: Duration);

    /// Drop every expired entry, returning how many were removed.
    async fn purge_expired(&self) -> usize;

    fn stats(&self) -> CacheStats;
}
