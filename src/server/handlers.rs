use axum::{Extension, Json};
use std::sync::Arc;

use super::protocol::{
    DeleteResponse, ExistsResponse, GetResponse, KeyRequest, LengthResponse, SetRequest,
    SetResponse,
};
use super::store::ShardServer;
use crate::error::KvError;

// Handlers only take synchronous shard locks and never await while holding one.

pub async fn handle_set(
    Extension(server): Extension<Arc<ShardServer>>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>, KvError> {
    tracing::debug!("SET {:?} on shard {}", req.key, req.shard_index);

    server
        .set(req.shard_index, req.key, req.value)
        .map(|_| Json(SetResponse::default()))
        .inspect_err(|e| tracing::warn!("SET failed: {}", e))
}

pub async fn handle_get(
    Extension(server): Extension<Arc<ShardServer>>,
    Json(req): Json<KeyRequest>,
) -> Result<Json<GetResponse>, KvError> {
    tracing::debug!("GET {:?} on shard {}", req.key, req.shard_index);

    match server.get(req.shard_index, &req.key) {
        Ok(Some(value)) => Ok(Json(GetResponse {
            value,
            exists: true,
        })),
        Ok(None) => Ok(Json(GetResponse {
            value: String::new(),
            exists: false,
        })),
        Err(e) => {
            tracing::warn!("GET failed: {}", e);
            Err(e)
        }
    }
}

pub async fn handle_delete(
    Extension(server): Extension<Arc<ShardServer>>,
    Json(req): Json<KeyRequest>,
) -> Result<Json<DeleteResponse>, KvError> {
    tracing::debug!("DELETE {:?} on shard {}", req.key, req.shard_index);

    server
        .delete(req.shard_index, &req.key)
        .map(|_| Json(DeleteResponse::default()))
        .inspect_err(|e| tracing::warn!("DELETE failed: {}", e))
}

pub async fn handle_exists(
    Extension(server): Extension<Arc<ShardServer>>,
    Json(req): Json<KeyRequest>,
) -> Result<Json<ExistsResponse>, KvError> {
    server
        .exists(req.shard_index, &req.key)
        .map(|exists| Json(ExistsResponse { exists }))
        .inspect_err(|e| tracing::warn!("EXISTS failed: {}", e))
}

pub async fn handle_length(
    Extension(server): Extension<Arc<ShardServer>>,
) -> Json<LengthResponse> {
    Json(LengthResponse {
        length: server.length(),
    })
}
