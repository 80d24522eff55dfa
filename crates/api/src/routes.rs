use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Public RPC surface: every method and path lands in the dispatcher, which
/// does its own validation.
pub fn create_proxy_router(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::proxy_rpc)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handlers::panic_response))
        .layer(TraceLayer::new_for_http())
}

/// Operational endpoints, served on a separate listener.
pub fn create_admin_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/cache/stats", get(handlers::get_cache_stats))
        .route("/nodes", get(handlers::get_nodes))
        .with_state(state)
}
