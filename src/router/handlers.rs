use axum::{Extension, Json};
use std::sync::Arc;

use super::protocol::{
    GetAllSocketsResponse, GetRouteRequest, GetRouteResponse, RegisterServerRequest,
    RegisterServerResponse,
};
use super::table::RouteTable;
use crate::error::KvError;

pub async fn handle_register_server(
    Extension(table): Extension<Arc<RouteTable>>,
    Json(req): Json<RegisterServerRequest>,
) -> Result<Json<RegisterServerResponse>, KvError> {
    match table.register_server(&req.address, req.port, req.num_shards) {
        Ok(total_routes) => Ok(Json(RegisterServerResponse { total_routes })),
        Err(e) => {
            tracing::warn!(
                "Rejected registration of {}:{} ({} shards): {}",
                req.address,
                req.port,
                req.num_shards,
                e
            );
            Err(e)
        }
    }
}

pub async fn handle_get_route(
    Extension(table): Extension<Arc<RouteTable>>,
    Json(req): Json<GetRouteRequest>,
) -> Result<Json<GetRouteResponse>, KvError> {
    match table.get_route(&req.key) {
        Ok(route) => {
            tracing::debug!(
                "Routed key {:?} to {} shard {}",
                req.key,
                route.socket,
                route.shard_index
            );
            Ok(Json(GetRouteResponse {
                socket: route.socket,
                shard_index: route.shard_index,
            }))
        }
        Err(e) => {
            tracing::warn!("Failed to route key {:?}: {}", req.key, e);
            Err(e)
        }
    }
}

pub async fn handle_get_all_sockets(
    Extension(table): Extension<Arc<RouteTable>>,
) -> Json<GetAllSocketsResponse> {
    Json(GetAllSocketsResponse {
        sockets: table.get_all_sockets(),
    })
}
