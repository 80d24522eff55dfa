//! # tezcache
//!
//! Caching reverse proxy in front of a pool of Tezos RPC nodes.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod bootstrap;
mod cli;
mod di;
mod server;

use clap::Parser;
use cli::Cli;
use tezcache_jobs::{CacheSweepJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config)?;

    let admin_addr = config.server.admin_addr()?;
    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        proxy = %config.server.proxy_addr()?,
        admin = admin_addr.map_or_else(|| "disabled".to_string(), |addr| addr.to_string()),
        nodes = config.upstream.nodes.len(),
        "Configuration loaded"
    );

    let services = di::Services::build(&config)?;

    let shutdown = CancellationToken::new();
    let jobs = JobRunner::new()
        .with_cache_sweep(
            CacheSweepJob::new(services.purge_expired.clone())
                .with_interval(config.cache.sweep_interval_secs)
                .with_cancellation(shutdown.child_token()),
        )
        .start();

    server::watch_signals(shutdown.clone());

    let result = server::run(&config, services.app_state(), shutdown.clone()).await;
    if let Err(e) = &result {
        error!(error = %e, "Server stopped with an error");
    }

    shutdown.cancel();
    for job in jobs {
        if let Err(e) = job.await {
            error!(error = %e, "Background job did not stop cleanly");
        }
    }
    services.tasks.shutdown().await;

    info!("Shutdown complete");
    result
}
