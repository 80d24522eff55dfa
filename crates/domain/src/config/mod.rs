//! Configuration module for tezcache
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: Listener ports and binding
//! - `upstream`: Upstream RPC nodes and client tuning
//! - `routing`: Allowed RPC surface and error policy
//! - `cache`: Response cache sizing and TTL policy
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod root;
pub mod routing;
pub mod server;
pub mod upstream;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use routing::RoutingConfig;
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
