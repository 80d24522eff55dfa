use http::header::{self, HeaderMap, HeaderName};

/// Connection-scoped headers (RFC 9110 §7.6.1) plus the ones the transport
/// recomputes for each hop.
static HOP_BY_HOP: [HeaderName; 10] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::HOST,
    header::CONTENT_LENGTH,
];

#[inline]
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(name)
}

/// Copy of `headers` without hop-by-hop entries. Repeated values survive.
pub fn end_to_end(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !is_hop_by_hop(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Request headers to replay upstream. `Accept-Encoding` is dropped too:
/// bodies are cached and served to every client, so they must arrive
/// unencoded.
pub fn forwardable_request_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = end_to_end(headers);
    out.remove(header::ACCEPT_ENCODING);
    out
}
