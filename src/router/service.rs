use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use super::handlers::{handle_get_all_sockets, handle_get_route, handle_register_server};
use super::protocol::{ENDPOINT_REGISTER, ENDPOINT_ROUTE, ENDPOINT_SOCKETS};
use super::table::RouteTable;

/// HTTP routes of the router role.
pub fn app(table: Arc<RouteTable>) -> Router {
    Router::new()
        .route(ENDPOINT_REGISTER, post(handle_register_server))
        .route(ENDPOINT_ROUTE, post(handle_get_route))
        .route(ENDPOINT_SOCKETS, get(handle_get_all_sockets))
        .layer(Extension(table))
}

/// Accepts connections on `listener` until the process exits. Each connection is served by
/// its own task.
pub async fn serve(listener: TcpListener, table: Arc<RouteTable>) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Router is running on {}", addr);
    }
    axum::serve(listener, app(table)).await
}
