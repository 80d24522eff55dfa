use crate::ports::{ResponseCache, TaskSpawner, UpstreamClient};
use crate::services::{error_responses, CacheKeyBuilder, NodePool, ResponseAnnotator, TtlPolicy};
use http::Method;
use std::sync::Arc;
use std::time::Duration;
use tezcache_domain::config::RoutingConfig;
use tezcache_domain::{CacheKey, ProxyError, RpcRequest, RpcResponse, UpstreamNode};
use tracing::{debug, error, instrument, warn};

/// How a validated request is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Looked up and stored under the given key.
    Cached(CacheKey),
    /// Always forwarded, never touches the cache.
    Passthrough,
}

/// Request dispatcher: validation, cache lookup, forwarding on a miss and
/// background cache population.
///
/// Stateless across requests; every collaborator is injected.
pub struct ProxyRpcUseCase {
    cache: Arc<dyn ResponseCache>,
    upstream: Arc<dyn UpstreamClient>,
    tasks: Arc<dyn TaskSpawner>,
    nodes: NodePool,
    ttl_policy: TtlPolicy,
    routing: RoutingConfig,
}

impl ProxyRpcUseCase {
    pub fn new(
        cache: Arc<dyn ResponseCache>,
        upstream: Arc<dyn UpstreamClient>,
        tasks: Arc<dyn TaskSpawner>,
        nodes: NodePool,
    ) -> Self {
        Self {
            cache,
            upstream,
            tasks,
            nodes,
            ttl_policy: TtlPolicy::default(),
            routing: RoutingConfig::default(),
        }
    }

    pub fn with_ttl_policy(mut self, ttl_policy: TtlPolicy) -> Self {
        self.ttl_policy = ttl_policy;
        self
    }

    pub fn with_routing(mut self, routing: RoutingConfig) -> Self {
        self.routing = routing;
        self
    }

    pub fn nodes(&self) -> &NodePool {
        &self.nodes
    }

    /// Always produces a response: either the RPC result or one of the
    /// canonical error responses.
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path()))]
    pub async fn execute(&self, request: RpcRequest) -> RpcResponse {
        match self.dispatch(request).await {
            Ok(response) => response,
            Err(err) => self.reject(err),
        }
    }

    /// Logs an error by kind and renders its canonical response.
    pub fn reject(&self, err: ProxyError) -> RpcResponse {
        match &err {
            ProxyError::MethodNotAllowed { .. } | ProxyError::RpcNotAllowed { .. } => {
                debug!(error = %err, "Rejected request");
            }
            ProxyError::UpstreamFailure { status } => {
                debug!(upstream_status = status, "Collapsing upstream error");
            }
            ProxyError::UnhandledFault { detail } => {
                error!(detail = %detail, "Unhandled fault while proxying");
            }
        }
        error_responses::render(&err)
    }

    /// Method, then path. Needs only the request line, so callers can run
    /// it before buffering a body.
    pub fn validate(&self, method: &Method, path: &str) -> Result<(), ProxyError> {
        if *method != Method::GET && *method != Method::POST {
            return Err(ProxyError::MethodNotAllowed {
                method: method.to_string(),
            });
        }

        if !self.routing.is_allowed(path) {
            return Err(ProxyError::RpcNotAllowed {
                path: path.to_string(),
            });
        }

        Ok(())
    }

    /// Validation plus classification. Never touches the cache or an upstream.
    pub fn route(&self, request: &RpcRequest) -> Result<Route, ProxyError> {
        let method = &request.method;
        let path = request.path();
        self.validate(method, path)?;

        if *method == Method::GET {
            Ok(Route::Cached(CacheKeyBuilder::for_get(&request.url)))
        } else if self.routing.is_cacheable(path) {
            Ok(Route::Cached(CacheKeyBuilder::for_post(
                &request.url,
                &request.body,
            )))
        } else {
            Ok(Route::Passthrough)
        }
    }

    async fn dispatch(&self, request: RpcRequest) -> Result<RpcResponse, ProxyError> {
        match self.route(&request)? {
            Route::Cached(key) => self.serve_cached(&request, key).await,
            Route::Passthrough => self.serve_passthrough(&request).await,
        }
    }

    async fn serve_cached(
        &self,
        request: &RpcRequest,
        key: CacheKey,
    ) -> Result<RpcResponse, ProxyError> {
        if let Some(cached) = self.cache.get(&key).await {
            debug!(key = %key, "Cache HIT");
            return Ok(cached);
        }

        debug!(key = %key, "Cache MISS");

        let node = self.nodes.pick();
        let response = self.upstream.forward(node, request).await?;
        if !response.is_ok() {
            return self.upstream_failure(node, response);
        }

        // TTL always follows the original path, never the synthetic one.
        let ttl = self.ttl_policy.ttl_for(request.path());
        let annotated = ResponseAnnotator::annotate(response, ttl, node);

        self.schedule_cache_write(key, annotated.clone(), ttl);

        Ok(annotated)
    }

    async fn serve_passthrough(&self, request: &RpcRequest) -> Result<RpcResponse, ProxyError> {
        let node = self.nodes.pick();
        let response = self.upstream.forward(node, request).await?;
        if !response.is_ok() {
            return self.upstream_failure(node, response);
        }

        debug!(node = %node, "Passthrough call forwarded");
        Ok(response)
    }

    fn upstream_failure(
        &self,
        node: &UpstreamNode,
        response: RpcResponse,
    ) -> Result<RpcResponse, ProxyError> {
        let status = response.status.as_u16();
        warn!(node = %node, upstream_status = status, "Upstream call failed, not caching");

        if self.routing.preserve_upstream_errors {
            Ok(response)
        } else {
            Err(ProxyError::UpstreamFailure { status })
        }
    }

    fn schedule_cache_write(&self, key: CacheKey, response: RpcResponse, ttl_secs: u32) {
        let cache = Arc::clone(&self.cache);
        self.tasks.spawn(
            "cache_write",
            Box::pin(async move {
                debug!(key = %key, ttl_secs, "Writing response to cache");
                cache
                    .put(key, response, Duration::from_secs(u64::from(ttl_secs)))
                    .await;
            }),
        );
    }
}
