use serde::Serialize;
use serde::de::DeserializeOwned;

use super::router_client::RouterClient;
use super::rpc::RpcClient;
use super::types::{ClientConfig, LengthReport};
use crate::error::{KvError, Result, SocketFailure};
use crate::router::Route;
use crate::server::protocol::{
    DeleteResponse, ENDPOINT_DELETE, ENDPOINT_EXISTS, ENDPOINT_GET, ENDPOINT_LENGTH, ENDPOINT_SET,
    ExistsResponse, GetResponse, KeyRequest, LengthResponse, SetRequest, SetResponse,
};

/// Map-like client for the whole cluster.
///
/// ```no_run
/// # async fn demo() -> shardkv::error::Result<()> {
/// let client = shardkv::client::KvClient::new("localhost:8080")?;
/// client.set("key1", "value1").await?;
/// let value = client.get("key1").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct KvClient {
    router: RouterClient,
    rpc: RpcClient,
}

impl KvClient {
    pub fn new(router_socket: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(router_socket))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let rpc = RpcClient::new(config.request_timeout)?;
        Ok(Self {
            router: RouterClient::with_rpc(rpc.clone(), config.router),
            rpc,
        })
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        let route = self.resolve(key).await?;
        let req = SetRequest {
            key: key.to_string(),
            value: value.to_string(),
            shard_index: route.shard_index as i64,
        };
        let _: SetResponse = self.call_shard("set", key, &route, ENDPOINT_SET, &req).await?;
        Ok(())
    }

    /// `Ok(None)` when the key does not exist.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let route = self.resolve(key).await?;
        let req = key_request(key, &route);
        let reply: GetResponse = self.call_shard("get", key, &route, ENDPOINT_GET, &req).await?;

        Ok(reply.exists.then_some(reply.value))
    }

    /// Deleting an absent key succeeds.
    pub async fn delete(&self, key: &str) -> Result<()> {
        let route = self.resolve(key).await?;
        let req = key_request(key, &route);
        let _: DeleteResponse = self
            .call_shard("delete", key, &route, ENDPOINT_DELETE, &req)
            .await?;
        Ok(())
    }

    pub async fn exists(&self, key: &str) -> Result<bool> {
        let route = self.resolve(key).await?;
        let req = key_request(key, &route);
        let reply: ExistsResponse = self
            .call_shard("exists", key, &route, ENDPOINT_EXISTS, &req)
            .await?;

        Ok(reply.exists)
    }

    /// Sums the key counts of every registered server.
    ///
    /// Fails only when the router cannot list the sockets. Servers that fail are skipped and
    /// listed in the report. Each server's count is itself approximate under concurrent writes,
    /// so the total is never a consistent snapshot.
    pub async fn length(&self) -> Result<LengthReport> {
        let sockets = self.router.get_all_sockets().await?;
        let mut report = LengthReport::default();

        for socket in sockets {
            match self.rpc.get::<LengthResponse>(&socket, ENDPOINT_LENGTH).await {
                Ok(reply) => report.total += reply.length,
                Err(error) => {
                    tracing::warn!("Skipping {} in length: {}", socket, error);
                    report.failures.push(SocketFailure { socket, error });
                }
            }
        }

        Ok(report)
    }

    async fn resolve(&self, key: &str) -> Result<Route> {
        self.router
            .get_route(key)
            .await
            .map_err(|e| KvError::Routing {
                key: key.to_string(),
                source: Box::new(e),
            })
    }

    async fn call_shard<Req, Resp>(
        &self,
        op: &str,
        key: &str,
        route: &Route,
        endpoint: &str,
        req: &Req,
    ) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        self.rpc
            .post(&route.socket, endpoint, req)
            .await
            .map_err(|e| KvError::Operation {
                op: op.to_string(),
                key: key.to_string(),
                socket: route.socket.clone(),
                shard_index: route.shard_index,
                source: Box::new(e),
            })
    }
}

fn key_request(key: &str, route: &Route) -> KeyRequest {
    KeyRequest {
        key: key.to_string(),
        shard_index: route.shard_index as i64,
    }
}
