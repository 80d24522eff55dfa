use super::{CacheMetrics, CachedRecord};
use async_trait::async_trait;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::time::Duration;
use tezcache_application::ports::ResponseCache;
use tezcache_domain::config::CacheConfig;
use tezcache_domain::{CacheKey, CacheStats, RpcResponse};
use tracing::{debug, info};

/// Bounded, TTL-aware response store.
///
/// Expired entries are never served: `get` drops them lazily, and
/// [`compact`](Self::compact) removes the rest in bulk. When full, a random
/// entry is evicted to make room.
pub struct MemoryResponseCache {
    pub(super) entries: DashMap<CacheKey, CachedRecord, FxBuildHasher>,
    pub(super) max_entries: usize,
    pub(super) metrics: CacheMetrics,
}

impl MemoryResponseCache {
    pub fn new(max_entries: usize) -> Self {
        info!(max_entries, "Initializing response cache");

        Self {
            entries: DashMap::with_capacity_and_hasher(max_entries.min(4096), FxBuildHasher),
            max_entries: max_entries.max(1),
            metrics: CacheMetrics::default(),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    /// Remaining TTL of a live entry.
    pub fn ttl_remaining(&self, key: &CacheKey) -> Option<Duration> {
        self.entries
            .get(key)
            .filter(|record| !record.is_expired())
            .map(|record| record.ttl_remaining())
    }

    pub fn lookup(&self, key: &CacheKey) -> Option<RpcResponse> {
        if let Some(record) = self.entries.get(key) {
            if !record.is_expired() {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                return Some(record.response.clone());
            }

            drop(record);
            // A concurrent put may have refreshed the entry in between.
            if self
                .entries
                .remove_if(key, |_, record| record.is_expired())
                .is_some()
            {
                self.metrics.expirations.fetch_add(1, AtomicOrdering::Relaxed);
            }
        }

        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        None
    }

    pub fn insert(&self, key: CacheKey, response: RpcResponse, ttl: Duration) {
        if ttl.is_zero() {
            return;
        }

        if self.entries.len() >= self.max_entries && !self.entries.contains_key(&key) {
            self.evict_random_entry();
        }

        self.entries.insert(key, CachedRecord::new(response, ttl));
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub fn snapshot(&self) -> CacheStats {
        CacheStats {
            total_entries: self.entries.len(),
            hits: self.metrics.hits.load(AtomicOrdering::Relaxed),
            misses: self.metrics.misses.load(AtomicOrdering::Relaxed),
            insertions: self.metrics.insertions.load(AtomicOrdering::Relaxed),
            evictions: self.metrics.evictions.load(AtomicOrdering::Relaxed),
            expirations: self.metrics.expirations.load(AtomicOrdering::Relaxed),
            hit_rate: self.metrics.hit_rate(),
        }
    }

    fn evict_random_entry(&self) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }

        let random_idx = fastrand::usize(..len);
        let victim = self
            .entries
            .iter()
            .nth(random_idx)
            .map(|entry| entry.key().clone());

        if let Some(key) = victim {
            if self.entries.remove(&key).is_some() {
                self.metrics.evictions.fetch_add(1, AtomicOrdering::Relaxed);
                debug!(key = %key, "Evicted cache entry to make room");
            }
        }
    }
}

#[async_trait]
impl ResponseCache for MemoryResponseCache {
    async fn get(&self, key: &CacheKey) -> Option<RpcResponse> {
        self.lookup(key)
    }

    async fn put(&self, key: CacheKey, response: RpcResponse, ttl: Duration) {
        self.insert(key, response, ttl);
    }

    async fn purge_expired(&self) -> usize {
        self.compact()
    }

    fn stats(&self) -> CacheStats {
        self.snapshot()
    }
}
