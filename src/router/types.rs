use serde::{Deserialize, Serialize};

/// One shard hosted by one server. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    /// `address:port` of the shard server.
    pub socket: String,
    /// Position of the shard within that server's shard collection.
    pub shard_index: usize,
}

impl Route {
    pub fn new(socket: impl Into<String>, shard_index: usize) -> Self {
        Self {
            socket: socket.into(),
            shard_index,
        }
    }
}

pub(crate) fn format_socket(address: &str, port: u16) -> String {
    format!("{}:{}", address, port)
}
