//! Error Types
//!
//! A single error enum is shared by the router, the shard servers and the client.
//! It is also the error body on the wire: handlers reply with a non-2xx status and the
//! JSON-encoded `KvError`, and the client decodes it back into the same variant. A
//! `ShardNotFound` raised on a server therefore reaches the caller as `ShardNotFound`,
//! wrapped with the key, socket and shard index of the hop that failed.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KvError>;

/// Root cause of a [`KvError`], with context wrappers stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    ShardNotFound,
    NoRoute,
    Connection,
    Aggregate,
    Remote,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum KvError {
    /// Malformed registration parameters.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The shard index does not exist on the server (stale or inconsistent route).
    #[error("shard {index} not found (server holds {count} shards)")]
    ShardNotFound { index: i64, count: usize },

    /// The route table is empty or holds no route for the computed index.
    #[error("no route available: {0}")]
    NoRoute(String),

    /// Transport-level failure reaching a router or server socket.
    #[error("connection to {socket} failed: {reason}")]
    Connection { socket: String, reason: String },

    /// Partial failure of a length query across servers.
    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    /// The router hop of a key-addressed operation failed.
    #[error("route error for key {key:?}: {source}")]
    Routing { key: String, source: Box<KvError> },

    /// The server hop of a key-addressed operation failed.
    #[error(
        "{op} failed for key {key:?} at socket {socket} and shard index {shard_index}: {source}"
    )]
    Operation {
        op: String,
        key: String,
        socket: String,
        shard_index: usize,
        source: Box<KvError>,
    },

    /// A peer answered with an error body that could not be decoded.
    #[error("remote error (status {status}): {message}")]
    Remote { status: u16, message: String },
}

impl KvError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KvError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            KvError::ShardNotFound { .. } => ErrorKind::ShardNotFound,
            KvError::NoRoute(_) => ErrorKind::NoRoute,
            KvError::Connection { .. } => ErrorKind::Connection,
            KvError::Aggregate(_) => ErrorKind::Aggregate,
            KvError::Remote { .. } => ErrorKind::Remote,
            KvError::Routing { source, .. } | KvError::Operation { source, .. } => source.kind(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorKind::ShardNotFound => StatusCode::NOT_FOUND,
            ErrorKind::NoRoute => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Connection => StatusCode::BAD_GATEWAY,
            ErrorKind::Aggregate | ErrorKind::Remote => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub(crate) fn connection(socket: &str, reason: impl fmt::Display) -> Self {
        KvError::Connection {
            socket: socket.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl IntoResponse for KvError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

/// One server that could not contribute to a length query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketFailure {
    pub socket: String,
    pub error: KvError,
}

/// The running total of a length query plus every socket that failed.
///
/// Distinct from a hard failure: `total` is still the sum over every server that answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateError {
    pub total: usize,
    pub failures: Vec<SocketFailure>,
}

impl AggregateError {
    pub fn failed_sockets(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.socket.as_str()).collect()
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "errors encountered during length ({} keys counted, {} server(s) failed)",
            self.total,
            self.failures.len()
        )?;
        for failure in &self.failures {
            write!(f, "; socket={} error={}", failure.socket, failure.error)?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_looks_through_context() {
        let err = KvError::Operation {
            op: "get".to_string(),
            key: "k".to_string(),
            socket: "127.0.0.1:9000".to_string(),
            shard_index: 3,
            source: Box::new(KvError::ShardNotFound { index: 3, count: 2 }),
        };

        assert_eq!(err.kind(), ErrorKind::ShardNotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let message = err.to_string();
        assert!(message.contains("127.0.0.1:9000"));
        assert!(message.contains("shard index 3"));
    }

    #[test]
    fn test_wire_format_preserves_variant() {
        let err = KvError::InvalidArgument("valid port numbers are 0-65535, got: -1".to_string());

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"kind\":\"invalid_argument\""));

        let restored: KvError = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, err);
    }

    #[test]
    fn test_aggregate_display_lists_sockets() {
        let err = AggregateError {
            total: 7,
            failures: vec![SocketFailure {
                socket: "10.0.0.9:8081".to_string(),
                error: KvError::connection("10.0.0.9:8081", "connection refused"),
            }],
        };

        assert_eq!(err.failed_sockets(), vec!["10.0.0.9:8081"]);
        assert!(err.to_string().contains("socket=10.0.0.9:8081"));
        assert_eq!(KvError::from(err).kind(), ErrorKind::Aggregate);
    }
}
