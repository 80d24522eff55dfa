use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Upstream {node} unreachable: {reason}")]
    UpstreamUnreachable { node: String, reason: String },

    #[error("Failed to read response body from {node}: {reason}")]
    UpstreamBody { node: String, reason: String },

    #[error("Invalid upstream node '{node}': {reason}")]
    InvalidNode { node: String, reason: String },

    #[error("At least one upstream node must be configured")]
    EmptyNodePool,
}

/// Every outcome of a proxied call that is not a successful RPC response.
///
/// Rendered to a status/headers/body triple in exactly one place, so the
/// client-visible texts below are part of the wire contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProxyError {
    #[error("Method {method} not allowed.")]
    MethodNotAllowed { method: String },

    #[error("RPC {path} not allowed.")]
    RpcNotAllowed { path: String },

    /// The upstream answered with anything other than 200. The original
    /// status is kept for logging only.
    #[error("An error occurred. Please try again later.")]
    UpstreamFailure { status: u16 },

    #[error("{detail}")]
    UnhandledFault { detail: String },
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::RpcNotAllowed { .. } => StatusCode::FORBIDDEN,
            Self::UpstreamFailure { .. } => StatusCode::NOT_FOUND,
            Self::UnhandledFault { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ProxyError {
    fn from(err: DomainError) -> Self {
        Self::UnhandledFault {
            detail: err.to_string(),
        }
    }
}
