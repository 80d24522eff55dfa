use http::header::{HeaderName, HeaderValue, CACHE_CONTROL};
use tezcache_domain::{RpcResponse, UpstreamNode};
use tracing::warn;

pub static NODE_ORIGIN: HeaderName = HeaderName::from_static("node-origin");

/// Stamps cache lifetime and provenance onto an upstream response.
pub struct ResponseAnnotator;

impl ResponseAnnotator {
    /// Appends `Cache-Control: max-age=<ttl>, s-maxage=<ttl>` and
    /// `Node-Origin: <node>`. Existing headers of the same names are kept.
    pub fn annotate(mut response: RpcResponse, ttl_secs: u32, node: &UpstreamNode) -> RpcResponse {
        let cache_control = format!("max-age={ttl_secs}, s-maxage={ttl_secs}");
        if let Ok(value) = HeaderValue::try_from(cache_control) {
            response.headers.append(CACHE_CONTROL, value);
        }

        match HeaderValue::from_str(node.base_url()) {
            Ok(value) => {
                response.headers.append(NODE_ORIGIN.clone(), value);
            }
            Err(e) => {
                warn!(node = %node, error = %e, "Node URL is not a valid header value");
            }
        }

        response
    }
}
