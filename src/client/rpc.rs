use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{KvError, Result};

/// JSON-over-HTTP transport shared by all outgoing calls.
///
/// Wraps one pooled `reqwest::Client`, so repeated calls to the same socket reuse
/// connections. There are no retries.
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: reqwest::Client,
}

impl RpcClient {
    pub fn new(request_timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().no_proxy();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            KvError::connection("<local>", format!("failed to build HTTP client: {}", e))
        })?;

        Ok(Self { http })
    }

    pub async fn post<Req, Resp>(&self, socket: &str, endpoint: &str, body: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let response = self
            .http
            .post(url(socket, endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| KvError::connection(socket, e))?;

        decode(socket, response).await
    }

    pub async fn get<Resp>(&self, socket: &str, endpoint: &str) -> Result<Resp>
    where
        Resp: DeserializeOwned,
    {
        let response = self
            .http
            .get(url(socket, endpoint))
            .send()
            .await
            .map_err(|e| KvError::connection(socket, e))?;

        decode(socket, response).await
    }
}

fn url(socket: &str, endpoint: &str) -> String {
    format!("http://{}{}", socket, endpoint)
}

/// Success bodies decode into `Resp`; error bodies decode back into the `KvError` the peer
/// raised, falling back to `KvError::Remote` when the body is not one.
async fn decode<Resp>(socket: &str, response: reqwest::Response) -> Result<Resp>
where
    Resp: DeserializeOwned,
{
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| KvError::connection(socket, e))?;

    if status.is_success() {
        return serde_json::from_str(&body).map_err(|e| KvError::Remote {
            status: status.as_u16(),
            message: format!("malformed response from {}: {}", socket, e),
        });
    }

    Err(
        serde_json::from_str::<KvError>(&body).unwrap_or_else(|_| KvError::Remote {
            status: status.as_u16(),
            message: body,
        }),
    )
}
