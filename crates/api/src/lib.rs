pub mod dto;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::{create_admin_routes, create_proxy_router};
pub use state::AppState;
