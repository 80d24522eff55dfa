use std::net::SocketAddr;
use tezcache_api::{create_admin_routes, AppState};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn serve(addr: SocketAddr, state: AppState, shutdown: CancellationToken) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(address = %addr, "Admin server listening");

    axum::serve(listener, create_admin_routes(state))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    info!("Admin server stopped");
    Ok(())
}
