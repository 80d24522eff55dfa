use crate::DomainError;
use http::Uri;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Base URL of an interchangeable upstream RPC node.
///
/// Carries no state: no health, no latency, no failure history.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UpstreamNode {
    base_url: Arc<str>,
}

impl UpstreamNode {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Target URL for a request path (with optional query) on this node.
    pub fn url_for(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }
}

impl FromStr for UpstreamNode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidNode {
            node: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(invalid("empty URL"));
        }

        let uri: Uri = trimmed.parse().map_err(|_| invalid("not a valid URL"))?;
        match uri.scheme_str() {
            Some("http") | Some("https") => {}
            _ => return Err(invalid("URL must start with http:// or https://")),
        }
        if uri.authority().is_none() {
            return Err(invalid("URL has no host"));
        }
        if uri.query().is_some() {
            return Err(invalid("URL must not carry a query string"));
        }

        Ok(Self {
            base_url: Arc::from(trimmed),
        })
    }
}

impl fmt::Display for UpstreamNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_url)
    }
}
