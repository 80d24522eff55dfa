use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};

/// A fully buffered HTTP response.
///
/// `body` is a refcounted `Bytes`, so cloning the response hands out an
/// independent copy to each consumer without copying the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RpcResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// Appends a header, keeping any existing values of the same name.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Only an exact 200 counts as a cacheable success.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }
}
