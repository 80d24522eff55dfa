pub mod admin;
pub mod proxy;
pub mod signals;

pub use signals::watch_signals;

use tezcache_api::AppState;
use tezcache_domain::Config;
use tokio_util::sync::CancellationToken;

/// Serve the proxy, and the admin API when enabled, until `shutdown` fires
/// or one of them fails.
pub async fn run(config: &Config, state: AppState, shutdown: CancellationToken) -> anyhow::Result<()> {
    let proxy = proxy::serve(config.server.proxy_addr()?, state.clone(), shutdown.clone());

    match config.server.admin_addr()? {
        Some(admin_addr) => {
            let admin = admin::serve(admin_addr, state, shutdown.clone());
            let result = tokio::try_join!(proxy, admin).map(|_| ());
            // One listener failing takes the other down with it.
            shutdown.cancel();
            result
        }
        None => proxy.await,
    }
}
