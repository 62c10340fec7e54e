//! Shard Server Network Protocol
//!
//! Every key-addressed request carries the shard index the router assigned to the key.

use serde::{Deserialize, Serialize};

pub const ENDPOINT_SET: &str = "/set";
pub const ENDPOINT_GET: &str = "/get";
pub const ENDPOINT_DELETE: &str = "/delete";
pub const ENDPOINT_EXISTS: &str = "/exists";
pub const ENDPOINT_LENGTH: &str = "/length";

#[derive(Debug, Serialize, Deserialize)]
pub struct SetRequest {
    pub key: String,
    pub value: String,
    pub shard_index: i64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SetResponse {}

/// Shared by get, delete and exists.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeyRequest {
    pub key: String,
    pub shard_index: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetResponse {
    /// Empty when `exists` is false.
    pub value: String,
    pub exists: bool,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DeleteResponse {}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LengthResponse {
    pub length: usize,
}
