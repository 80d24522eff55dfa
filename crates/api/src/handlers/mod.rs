pub mod cache;
pub mod health;
pub mod nodes;
pub mod proxy;

pub use cache::get_cache_stats;
pub use health::health_check;
pub use nodes::get_nodes;
pub use proxy::{panic_response, proxy_rpc};
