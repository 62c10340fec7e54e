//! Router Network Protocol
//!
//! Endpoints and DTOs for the three router RPCs. Bodies are JSON.

use serde::{Deserialize, Serialize};

/// Servers announce themselves here once at startup.
pub const ENDPOINT_REGISTER: &str = "/register";
/// Key to `(socket, shard_index)` resolution.
pub const ENDPOINT_ROUTE: &str = "/route";
/// Distinct sockets of every registered server.
pub const ENDPOINT_SOCKETS: &str = "/sockets";

/// Registration parameters. Port and shard count are signed so that out-of-range values
/// reach validation instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterServerRequest {
    pub address: String,
    pub port: i64,
    pub num_shards: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterServerResponse {
    /// Table length after the new routes were appended.
    pub total_routes: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetRouteRequest {
    pub key: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetRouteResponse {
    pub socket: String,
    pub shard_index: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetAllSocketsResponse {
    pub sockets: Vec<String>,
}
