use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tezcache_api::{create_admin_routes, create_proxy_router, AppState};
use tezcache_application::ports::{BackgroundTask, ResponseCache, TaskSpawner, UpstreamClient};
use tezcache_application::services::NodePool;
use tezcache_application::use_cases::{GetCacheStatsUseCase, ProxyRpcUseCase};
use tezcache_domain::{
    CacheKey, CacheStats, DomainError, RpcRequest, RpcResponse, UpstreamNode,
};
use tokio::task::JoinHandle;

pub const NODE: &str = "https://node.example";

#[derive(Default)]
pub struct StubCache {
    entries: Mutex<HashMap<CacheKey, RpcResponse>>,
}

impl StubCache {
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .entries
            .lock()
            .unwrap()
            .keys()
            .map(|k| k.to_string())
            .collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl ResponseCache for StubCache {
    async fn get(&self, key: &CacheKey) -> Option<RpcResponse> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn put(&self, key: CacheKey, response: RpcResponse, _ttl: Duration) {
        self.entries.lock().unwrap().insert(key, response);
    }

    async fn purge_expired(&self) -> usize {
        0
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.entries.lock().unwrap().len(),
            hits: 3,
            misses: 1,
            hit_rate: 75.0,
            ..CacheStats::default()
        }
    }
}

/// Answers every call with the same status and body, recording the target.
pub struct StubUpstream {
    status: StatusCode,
    body: &'static str,
    targets: Mutex<Vec<String>>,
}

impl StubUpstream {
    pub fn new(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            body,
            targets: Mutex::new(Vec::new()),
        }
    }

    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamClient for StubUpstream {
    async fn forward(
        &self,
        node: &UpstreamNode,
        request: &RpcRequest,
    ) -> Result<RpcResponse, DomainError> {
        self.targets
            .lock()
            .unwrap()
            .push(node.url_for(request.path_and_query()));
        Ok(RpcResponse::new(self.status, self.body))
    }
}

#[derive(Default)]
pub struct JoiningSpawner {
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl JoiningSpawner {
    pub async fn drain(&self) {
        let handles: Vec<_> = self.handles.lock().unwrap().drain(..).collect();
        for handle in handles {
            handle.await.unwrap();
        }
    }
}

impl TaskSpawner for JoiningSpawner {
    fn spawn(&self, _name: &'static str, task: BackgroundTask) {
        self.handles.lock().unwrap().push(tokio::spawn(task));
    }
}

pub struct TestApp {
    pub cache: Arc<StubCache>,
    pub upstream: Arc<StubUpstream>,
    pub spawner: Arc<JoiningSpawner>,
    pub state: AppState,
}

impl TestApp {
    pub fn new(status: StatusCode, body: &'static str) -> Self {
        let cache = Arc::new(StubCache::default());
        let upstream = Arc::new(StubUpstream::new(status, body));
        let spawner = Arc::new(JoiningSpawner::default());
        let nodes = NodePool::new(vec![NODE.parse().unwrap()]).unwrap();

        let proxy = Arc::new(ProxyRpcUseCase::new(
            cache.clone(),
            upstream.clone(),
            spawner.clone(),
            nodes,
        ));
        let get_cache_stats = Arc::new(GetCacheStatsUseCase::new(cache.clone()));

        Self {
            cache,
            upstream,
            spawner,
            state: AppState::new(proxy, get_cache_stats),
        }
    }

    pub fn proxy(&self) -> Router {
        create_proxy_router(self.state.clone())
    }

    pub fn admin(&self) -> Router {
        create_admin_routes(self.state.clone())
    }
}

pub fn request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("host", "rpc.example")
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
