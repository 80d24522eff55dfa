//! tezcache Infrastructure Layer
pub mod cache;
pub mod tasks;
pub mod upstream;

pub use cache::MemoryResponseCache;
pub use tasks::TrackedTaskSpawner;
pub use upstream::HttpUpstreamClient;
