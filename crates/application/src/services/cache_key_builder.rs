use http::Uri;
use sha2::{Digest, Sha256};
use tezcache_domain::CacheKey;

/// Derives cache keys from requests.
///
/// GET requests are keyed by their full URL. POST bodies carry the call
/// parameters, so a cacheable POST is keyed by a synthetic GET URL whose path
/// has the hex SHA-256 of the body appended.
pub struct CacheKeyBuilder;

impl CacheKeyBuilder {
    pub fn for_get(url: &Uri) -> CacheKey {
        CacheKey::from(render(url, ""))
    }

    pub fn for_post(url: &Uri, body: &[u8]) -> CacheKey {
        CacheKey::from(render(url, &Self::body_digest(body)))
    }

    /// Lowercase hex SHA-256 of the body (64 chars).
    pub fn body_digest(body: &[u8]) -> String {
        hex::encode(Sha256::digest(body))
    }
}

/// `scheme://authority` + path + suffix + `?query`.
fn render(url: &Uri, path_suffix: &str) -> String {
    let mut key = String::with_capacity(128 + path_suffix.len());
    if let (Some(scheme), Some(authority)) = (url.scheme_str(), url.authority()) {
        key.push_str(scheme);
        key.push_str("://");
        key.push_str(authority.as_str());
    }
    key.push_str(url.path());
    key.push_str(path_suffix);
    if let Some(query) = url.query() {
        key.push('?');
        key.push_str(query);
    }
    key
}
