use async_trait::async_trait;
use tezcache_domain::{DomainError, RpcRequest, RpcResponse, UpstreamNode};

#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Replay `request` (method, headers, body) against
    /// `node + request.path_and_query()`.
    ///
    /// Any HTTP status is `Ok`; `Err` means no response was obtained.
    async fn forward(
        &self,
        node: &UpstreamNode,
        request: &RpcRequest,
    ) -> Result<RpcResponse, DomainError>;
}
