//! tezcache Domain Layer
pub mod cache_key;
pub mod cache_stats;
pub mod config;
pub mod errors;
pub mod rpc_request;
pub mod rpc_response;
pub mod upstream_node;

pub use cache_key::CacheKey;
pub use cache_stats::CacheStats;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::{DomainError, ProxyError};
pub use rpc_request::RpcRequest;
pub use rpc_response::RpcResponse;
pub use upstream_node::UpstreamNode;
