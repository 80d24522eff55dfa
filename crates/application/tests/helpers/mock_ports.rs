#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode, Uri};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tezcache_application::ports::{BackgroundTask, ResponseCache, TaskSpawner, UpstreamClient};
use tezcache_application::services::NodePool;
use tezcache_application::use_cases::ProxyRpcUseCase;
use tezcache_domain::{
    CacheKey, CacheStats, DomainError, RpcRequest, RpcResponse, UpstreamNode,
};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

// ============================================================================
// Mock ResponseCache
// ============================================================================

#[derive(Default)]
pub struct MockResponseCache {
    entries: RwLock<HashMap<CacheKey, (RpcResponse, Duration)>>,
    gets: AtomicUsize,
    puts: AtomicUsize,
}

impl MockResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, key: impl Into<CacheKey>, response: RpcResponse) {
        self.entries
            .write()
            .await
            .insert(key.into(), (response, Duration::from_secs(600)));
    }

    pub async fn entry(&self, key: &str) -> Option<(RpcResponse, Duration)> {
        self.entries.read().await.get(&CacheKey::from(key)).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResponseCache for MockResponseCache {
    async fn get(&self, key: &CacheKey) -> Option<RpcResponse> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.entries.read().await.get(key).map(|(r, _)| r.clone())
    }

    async fn put(&self, key: CacheKey, response: RpcResponse, ttl: Duration) {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.entries.write().await.insert(key, (response, ttl));
    }

    async fn purge_expired(&self) -> usize {
        0
    }

    fn stats(&self) -> CacheStats {
        CacheStats::default()
    }
}

// ============================================================================
// Mock UpstreamClient
// ============================================================================

#[derive(Debug, Clone)]
pub struct ForwardedCall {
    pub node: String,
    pub method: Method,
    pub target: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

pub struct MockUpstreamClient {
    response: RwLock<Result<RpcResponse, DomainError>>,
    calls: RwLock<Vec<ForwardedCall>>,
}

impl MockUpstreamClient {
    pub fn new() -> Self {
        Self::returning(RpcResponse::ok(r#"{"hash":"BLockHash"}"#))
    }

    pub fn returning(response: RpcResponse) -> Self {
        Self {
            response: RwLock::new(Ok(response)),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub fn with_status(status: StatusCode, body: &'static str) -> Self {
        Self::returning(RpcResponse::new(status, body))
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            response: RwLock::new(Err(error)),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_response(&self, response: RpcResponse) {
        *self.response.write().await = Ok(response);
    }

    pub async fn calls(&self) -> Vec<ForwardedCall> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

impl Default for MockUpstreamClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamClient for MockUpstreamClient {
    async fn forward(
        &self,
        node: &UpstreamNode,
        request: &RpcRequest,
    ) -> Result<RpcResponse, DomainError> {
        self.calls.write().await.push(ForwardedCall {
            node: node.base_url().to_string(),
            method: request.method.clone(),
            target: node.url_for(request.path_and_query()),
            headers: request.headers.clone(),
            body: request.body.clone(),
        });
        self.response.read().await.clone()
    }
}

// ============================================================================
// Recording TaskSpawner
// ============================================================================

/// Spawns on the test runtime and keeps the handles so a test can wait for
/// every background write before asserting on the cache.
#[derive(Default)]
pub struct RecordingSpawner {
    handles: Mutex<Vec<JoinHandle<()>>>,
    spawned: AtomicUsize,
}

impl RecordingSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawned(&self) -> usize {
        self.spawned.load(Ordering::SeqCst)
    }

    pub async fn drain(&self) {
        let handles: Vec<_> = self.handles.lock().unwrap().drain(..).collect();
        for handle in handles {
            handle.await.unwrap();
        }
    }
}

impl TaskSpawner for RecordingSpawner {
    fn spawn(&self, _name: &'static str, task: BackgroundTask) {
        self.spawned.fetch_add(1, Ordering::SeqCst);
        self.handles.lock().unwrap().push(tokio::spawn(task));
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub const NODES: [&str; 4] = [
    "https://node-a.example",
    "https://node-b.example",
    "https://node-c.example",
    "https://node-d.example/mainnet",
];

pub fn node_pool() -> NodePool {
    NodePool::new(NODES.iter().map(|n| n.parse().unwrap()).collect()).unwrap()
}

pub struct Harness {
    pub cache: Arc<MockResponseCache>,
    pub upstream: Arc<MockUpstreamClient>,
    pub spawner: Arc<RecordingSpawner>,
    pub proxy: ProxyRpcUseCase,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_upstream(MockUpstreamClient::new())
    }

    pub fn with_upstream(upstream: MockUpstreamClient) -> Self {
        let cache = Arc::new(MockResponseCache::new());
        let upstream = Arc::new(upstream);
        let spawner = Arc::new(RecordingSpawner::new());
        let proxy = ProxyRpcUseCase::new(
            cache.clone(),
            upstream.clone(),
            spawner.clone(),
            node_pool(),
        );
        Self {
            cache,
            upstream,
            spawner,
            proxy,
        }
    }

    /// Run a request and wait for any cache write it scheduled.
    pub async fn call(&self, request: RpcRequest) -> RpcResponse {
        let response = self.proxy.execute(request).await;
        self.spawner.drain().await;
        response
    }
}

pub fn url(path_and_query: &str) -> Uri {
    format!("https://rpc.example{path_and_query}").parse().unwrap()
}

pub fn get(path_and_query: &str) -> RpcRequest {
    RpcRequest::get(url(path_and_query))
}

pub fn post(path: &str, body: &'static str) -> RpcRequest {
    RpcRequest::post(url(path), body)
}

pub fn request(method: Method, path: &str) -> RpcRequest {
    RpcRequest::new(method, url(path), HeaderMap::new(), Bytes::new())
}
