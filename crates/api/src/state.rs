use std::sync::Arc;
use tezcache_application::use_cases::{GetCacheStatsUseCase, ProxyRpcUseCase};

#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<ProxyRpcUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
}

impl AppState {
    pub fn new(proxy: Arc<ProxyRpcUseCase>, get_cache_stats: Arc<GetCacheStatsUseCase>) -> Self {
        Self {
            proxy,
            get_cache_stats,
        }
    }
}
