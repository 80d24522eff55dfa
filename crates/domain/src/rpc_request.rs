use bytes::Bytes;
use http::{HeaderMap, Method, Uri};

/// An inbound RPC call as seen by the proxy core.
///
/// `url` is absolute (scheme, authority, path and query) so it can serve
/// directly as a cache key. `body` is empty for GET.
#[derive(Debug, Clone)]
pub struct RpcRequest {
    pub method: Method,
    pub url: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RpcRequest {
    pub fn new(method: Method, url: Uri, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            method,
            url,
            headers,
            body: body.into(),
        }
    }

    pub fn get(url: Uri) -> Self {
        Self::new(Method::GET, url, HeaderMap::new(), Bytes::new())
    }

    pub fn post(url: Uri, body: impl Into<Bytes>) -> Self {
        Self::new(Method::POST, url, HeaderMap::new(), body)
    }

    #[inline]
    pub fn path(&self) -> &str {
        self.url.path()
    }

    #[inline]
    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    /// Path plus `?query` when present; this is what gets appended to an
    /// upstream base URL.
    pub fn path_and_query(&self) -> &str {
        self.url
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/")
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}
