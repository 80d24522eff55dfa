pub mod cache_key_builder;
pub mod error_responses;
pub mod node_pool;
pub mod response_annotator;
pub mod ttl_policy;

pub use cache_key_builder::CacheKeyBuilder;
pub use node_pool::NodePool;
pub use response_annotator::ResponseAnnotator;
pub use ttl_policy::TtlPolicy;
