use http::header::{HeaderValue, ALLOW, CONTENT_TYPE};
use tezcache_domain::{ProxyError, RpcResponse};

const TEXT_PLAIN: &str = "text/plain;charset=UTF-8";

/// The single place where a `ProxyError` becomes a client-visible response.
pub fn render(error: &ProxyError) -> RpcResponse {
    let response = RpcResponse::new(error.status(), error.to_string())
        .with_header(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN));

    match error {
        ProxyError::MethodNotAllowed { .. } => {
            response.with_header(ALLOW, HeaderValue::from_static("GET, POST"))
        }
        _ => response,
    }
}
