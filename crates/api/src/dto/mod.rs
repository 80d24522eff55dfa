pub mod cache;
pub mod nodes;

pub use cache::CacheStatsResponse;
pub use nodes::NodesResponse;
