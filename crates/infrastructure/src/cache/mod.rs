// Response cache: in-process stand-in for the edge cache service

pub mod compaction;
pub mod metrics;
pub mod record;
pub mod storage;

pub use metrics::CacheMetrics;
pub use record::CachedRecord;
pub use storage::MemoryResponseCache;
