pub mod headers;
pub mod http_client;

pub use http_client::HttpUpstreamClient;
