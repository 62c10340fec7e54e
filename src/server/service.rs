use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use super::handlers::{handle_delete, handle_exists, handle_get, handle_length, handle_set};
use super::protocol::{
    ENDPOINT_DELETE, ENDPOINT_EXISTS, ENDPOINT_GET, ENDPOINT_LENGTH, ENDPOINT_SET,
};
use super::store::ShardServer;
use crate::client::RouterClient;
use crate::error::Result;

/// HTTP routes of the shard server role.
pub fn app(server: Arc<ShardServer>) -> Router {
    Router::new()
        .route(ENDPOINT_SET, post(handle_set))
        .route(ENDPOINT_GET, post(handle_get))
        .route(ENDPOINT_DELETE, post(handle_delete))
        .route(ENDPOINT_EXISTS, post(handle_exists))
        .route(ENDPOINT_LENGTH, get(handle_length))
        .layer(Extension(server))
}

/// Announces `address:port` with every local shard to the router.
///
/// Must complete before the server starts accepting client traffic. Returns the router's
/// table length after registration.
pub async fn register(
    router: &RouterClient,
    address: &str,
    port: u16,
    server: &ShardServer,
) -> Result<usize> {
    let num_shards = server.num_shards() as i64;
    let total = router
        .register_server(address, i64::from(port), num_shards)
        .await?;

    tracing::info!(
        "Registered {}:{} with router {} ({} shards, {} routes total)",
        address,
        port,
        router.socket(),
        num_shards,
        total
    );

    Ok(total)
}

/// Accepts connections on `listener` until the process exits.
pub async fn serve(listener: TcpListener, server: Arc<ShardServer>) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(
            "Shard server is running on {} with {} shards",
            addr,
            server.num_shards()
        );
    }
    axum::serve(listener, app(server)).await
}
