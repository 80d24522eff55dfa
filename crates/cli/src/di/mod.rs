use std::sync::Arc;
use tezcache_api::AppState;
use tezcache_application::services::{NodePool, TtlPolicy};
use tezcache_application::use_cases::{
    GetCacheStatsUseCase, ProxyRpcUseCase, PurgeExpiredEntriesUseCase,
};
use tezcache_domain::Config;
use tezcache_infrastructure::{HttpUpstreamClient, MemoryResponseCache, TrackedTaskSpawner};
use tracing::info;

/// Everything the servers and jobs need, wired once at startup.
pub struct Services {
    pub tasks: TrackedTaskSpawner,
    pub proxy: Arc<ProxyRpcUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
    pub purge_expired: Arc<PurgeExpiredEntriesUseCase>,
}

impl Services {
    pub fn build(config: &Config) -> anyhow::Result<Self> {
        let nodes = NodePool::new(config.upstream_nodes()?)?;
        for node in nodes.nodes() {
            info!(node = %node, "Upstream node registered");
        }

        let cache = Arc::new(MemoryResponseCache::from_config(&config.cache));
        let upstream = Arc::new(HttpUpstreamClient::from_config(&config.upstream)?);
        let tasks = TrackedTaskSpawner::new();

        let proxy = Arc::new(
            ProxyRpcUseCase::new(cache.clone(), upstream, Arc::new(tasks.clone()), nodes)
                .with_ttl_policy(TtlPolicy::from_config(&config.cache))
                .with_routing(config.routing.clone()),
        );

        Ok(Self {
            tasks,
            proxy,
            get_cache_stats: Arc::new(GetCacheStatsUseCase::new(cache.clone())),
            purge_expired: Arc::new(PurgeExpiredEntriesUseCase::new(cache)),
        })
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(self.proxy.clone(), self.get_cache_stats.clone())
    }
}
