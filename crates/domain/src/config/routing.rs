use serde::{Deserialize, Serialize};

/// Allowed RPC surface
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoutingConfig {
    /// Paths starting with this prefix are proxied and cached
    #[serde(default = "default_cacheable_prefix")]
    pub cacheable_prefix: String,

    /// Exact path of the broadcast operation; POSTs here are never cached
    #[serde(default = "default_passthrough_path")]
    pub passthrough_path: String,

    /// Relay non-200 upstream answers as-is instead of the generic 404
    #[serde(default)]
    pub preserve_upstream_errors: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            cacheable_prefix: default_cacheable_prefix(),
            passthrough_path: default_passthrough_path(),
            preserve_upstream_errors: false,
        }
    }
}

impl RoutingConfig {
    pub fn is_cacheable(&self, path: &str) -> bool {
        path.starts_with(&self.cacheable_prefix)
    }

    pub fn is_passthrough(&self, path: &str) -> bool {
        path == self.passthrough_path
    }

    pub fn is_allowed(&self, path: &str) -> bool {
        self.is_cacheable(path) || self.is_passthrough(path)
    }
}

fn default_cacheable_prefix() -> String {
    "/chains".to_string()
}

fn default_passthrough_path() -> String {
    "/injection/operation".to_string()
}
