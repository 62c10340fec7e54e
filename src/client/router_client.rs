use crate::error::Result;
use crate::router::Route;
use crate::router::protocol::{
    ENDPOINT_REGISTER, ENDPOINT_ROUTE, ENDPOINT_SOCKETS, GetAllSocketsResponse, GetRouteRequest,
    GetRouteResponse, RegisterServerRequest, RegisterServerResponse,
};

use super::rpc::RpcClient;

/// Calls the router RPCs on a fixed router socket.
#[derive(Debug, Clone)]
pub struct RouterClient {
    rpc: RpcClient,
    socket: String,
}

impl RouterClient {
    pub fn new(socket: impl Into<String>) -> Result<Self> {
        Ok(Self::with_rpc(RpcClient::new(None)?, socket))
    }

    pub fn with_rpc(rpc: RpcClient, socket: impl Into<String>) -> Self {
        Self {
            rpc,
            socket: socket.into(),
        }
    }

    pub fn socket(&self) -> &str {
        &self.socket
    }

    /// Returns the table length after registration.
    pub async fn register_server(
        &self,
        address: &str,
        port: i64,
        num_shards: i64,
    ) -> Result<usize> {
        let req = RegisterServerRequest {
            address: address.to_string(),
            port,
            num_shards,
        };
        let reply: RegisterServerResponse =
            self.rpc.post(&self.socket, ENDPOINT_REGISTER, &req).await?;

        Ok(reply.total_routes)
    }

    pub async fn get_route(&self, key: &str) -> Result<Route> {
        let req = GetRouteRequest {
            key: key.to_string(),
        };
        let reply: GetRouteResponse = self.rpc.post(&self.socket, ENDPOINT_ROUTE, &req).await?;

        Ok(Route::new(reply.socket, reply.shard_index))
    }

    pub async fn get_all_sockets(&self) -> Result<Vec<String>> {
        let reply: GetAllSocketsResponse = self.rpc.get(&self.socket, ENDPOINT_SOCKETS).await?;
        Ok(reply.sockets)
    }
}
