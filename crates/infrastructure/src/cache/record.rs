use std::time::Duration;
use tezcache_domain::RpcResponse;
use tokio::time::Instant;

/// A stored response and the instant it stops being served.
#[derive(Debug, Clone)]
pub struct CachedRecord {
    pub response: RpcResponse,
    pub inserted_at: Instant,
    pub expires_at: Instant,
}

impl CachedRecord {
    pub fn new(response: RpcResponse, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            response,
            inserted_at: now,
            expires_at: now + ttl,
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    #[inline]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Remaining lifetime; zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}
