use tezcache_domain::config::CacheConfig;

/// Two-tier TTL: chain-head data changes every block, everything addressed
/// by level or hash is immutable.
#[derive(Debug, Clone)]
pub struct TtlPolicy {
    head_marker: String,
    head_ttl_secs: u32,
    default_ttl_secs: u32,
}

impl TtlPolicy {
    pub fn new(head_marker: impl Into<String>, head_ttl_secs: u32, default_ttl_secs: u32) -> Self {
        Self {
            head_marker: head_marker.into(),
            head_ttl_secs,
            default_ttl_secs,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(
            config.head_marker.clone(),
            config.head_ttl_secs,
            config.default_ttl_secs,
        )
    }

    #[inline]
    pub fn ttl_for(&self, path: &str) -> u32 {
        if path.contains(&self.head_marker) {
            self.head_ttl_secs
        } else {
            self.default_ttl_secs
        }
    }
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}
