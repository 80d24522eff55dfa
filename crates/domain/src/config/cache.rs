use serde::{Deserialize, Serialize};

/// Response cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Path fragment marking chain-head data (short TTL)
    #[serde(default = "default_head_marker")]
    pub head_marker: String,

    #[serde(default = "default_head_ttl_secs")]
    pub head_ttl_secs: u32,

    #[serde(default = "default_ttl_secs")]
    pub default_ttl_secs: u32,

    /// Interval between sweeps of expired entries in seconds (default: 30)
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            head_marker: default_head_marker(),
            head_ttl_secs: default_head_ttl_secs(),
            default_ttl_secs: default_ttl_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_max_entries() -> usize {
    100_000
}

fn default_head_marker() -> String {
    "blocks/head".to_string()
}

fn default_head_ttl_secs() -> u32 {
    10
}

fn default_ttl_secs() -> u32 {
    600
}

fn default_sweep_interval_secs() -> u64 {
    30
}
