use super::headers::{end_to_end, forwardable_request_headers};
use async_trait::async_trait;
use std::time::Duration;
use tezcache_application::ports::UpstreamClient;
use tezcache_domain::config::UpstreamConfig;
use tezcache_domain::{DomainError, RpcRequest, RpcResponse, UpstreamNode};
use tracing::debug;

/// Forwards RPC calls to upstream nodes over a pooled HTTP client.
///
/// Only connecting is bounded in time. A slow upstream RPC is waited on for
/// as long as it takes.
#[derive(Clone)]
pub struct HttpUpstreamClient {
    client: reqwest::Client,
}

impl HttpUpstreamClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self::new(client))
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn forward(
        &self,
        node: &UpstreamNode,
        request: &RpcRequest,
    ) -> Result<RpcResponse, DomainError> {
        let target = node.url_for(request.path_and_query());

        debug!(
            node = %node,
            method = %request.method,
            target = %target,
            body_len = request.body.len(),
            "Forwarding RPC call"
        );

        let response = self
            .client
            .request(request.method.clone(), &target)
            .headers(forwardable_request_headers(&request.headers))
            .body(request.body.clone())
            .send()
            .await
            .map_err(|e| DomainError::UpstreamUnreachable {
                node: node.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        let headers = end_to_end(response.headers());
        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::UpstreamBody {
                node: node.to_string(),
                reason: e.to_string(),
            })?;

        debug!(
            node = %node,
            status = status.as_u16(),
            body_len = body.len(),
            "Upstream responded"
        );

        Ok(RpcResponse {
            status,
            headers,
            body,
        })
    }
}
