mod get_stats;
mod purge_expired;

pub use get_stats::GetCacheStatsUseCase;
pub use purge_expired::PurgeExpiredEntriesUseCase;
