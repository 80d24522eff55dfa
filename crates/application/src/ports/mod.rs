pub mod response_cache;
pub mod task_spawner;
pub mod upstream_client;

pub use response_cache::ResponseCache;
pub use task_spawner::{BackgroundTask, TaskSpawner};
pub use upstream_client::UpstreamClient;
