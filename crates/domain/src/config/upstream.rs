use serde::{Deserialize, Serialize};

/// Upstream RPC nodes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base URLs of interchangeable nodes; one is picked at random per request
    #[serde(default = "default_nodes")]
    pub nodes: Vec<String>,

    /// TCP connect timeout in milliseconds (default: 5000).
    /// There is no overall request timeout.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Idle keep-alive connections kept per node (default: 16)
    #[serde(default = "default_pool_max_idle_per_host")]
    pub pool_max_idle_per_host: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            connect_timeout_ms: default_connect_timeout_ms(),
            pool_max_idle_per_host: default_pool_max_idle_per_host(),
        }
    }
}

fn default_nodes() -> Vec<String> {
    vec![
        "https://mainnet.smartpy.io".to_string(),
        "https://mainnet.api.tez.ie".to_string(),
        "https://tezos-prod.cryptonomic-infra.tech".to_string(),
        "https://rpc.tzkt.io/mainnet".to_string(),
    ]
}

fn default_connect_timeout_ms() -> u64 {
    5000
}

fn default_pool_max_idle_per_host() -> usize {
    16
}
