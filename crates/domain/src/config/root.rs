use super::{CacheConfig, ConfigError, LoggingConfig, RoutingConfig, ServerConfig, UpstreamConfig};
use crate::UpstreamNode;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub proxy_port: Option<u16>,
    pub admin_port: Option<u16>,
    pub log_level: Option<String>,
    /// Replaces the configured node list when non-empty
    pub nodes: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load from an optional TOML file, then apply CLI overrides.
    ///
    /// Without a path the built-in defaults are used. A path that cannot be
    /// read is an error, never a silent fallback.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.proxy_port {
            self.server.proxy_port = port;
        }
        if let Some(port) = overrides.admin_port {
            self.server.admin_port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if !overrides.nodes.is_empty() {
            self.upstream.nodes = overrides.nodes;
        }
    }

    /// Parsed upstream nodes. An empty list is a configuration error.
    pub fn upstream_nodes(&self) -> Result<Vec<UpstreamNode>, ConfigError> {
        if self.upstream.nodes.is_empty() {
            return Err(ConfigError::Validation(
                "upstream.nodes must list at least one node".into(),
            ));
        }
        self.upstream
            .nodes
            .iter()
            .map(|n| {
                n.parse::<UpstreamNode>()
                    .map_err(|e| ConfigError::Validation(e.to_string()))
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.upstream_nodes()?;
        self.server.bind_ip()?;

        if !self.routing.cacheable_prefix.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "routing.cacheable_prefix must start with '/': {}",
                self.routing.cacheable_prefix
            )));
        }
        if !self.routing.passthrough_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "routing.passthrough_path must start with '/': {}",
                self.routing.passthrough_path
            )));
        }

        if self.cache.max_entries == 0 {
            return Err(ConfigError::Validation(
                "cache.max_entries must be greater than 0".into(),
            ));
        }
        if self.cache.head_ttl_secs == 0 || self.cache.default_ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "cache TTLs must be greater than 0".into(),
            ));
        }
        if self.cache.head_marker.is_empty() {
            return Err(ConfigError::Validation(
                "cache.head_marker cannot be empty".into(),
            ));
        }
        if self.cache.sweep_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "cache.sweep_interval_secs must be greater than 0".into(),
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}', expected one of {:?}",
                self.logging.level, LOG_LEVELS
            )));
        }

        if self.server.admin_port != 0 && self.server.admin_port == self.server.proxy_port {
            return Err(ConfigError::Validation(format!(
                "server.admin_port and server.proxy_port must differ (both {})",
                self.server.proxy_port
            )));
        }

        Ok(())
    }
}
