pub mod cache;
pub mod proxy;

pub use cache::{GetCacheStatsUseCase, PurgeExpiredEntriesUseCase};
pub use proxy::{ProxyRpcUseCase, Route};
