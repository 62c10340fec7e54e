use super::types::{Route, format_socket};
use crate::error::{KvError, Result};

use parking_lot::RwLock;
use std::collections::HashSet;
use xxhash_rust::xxh64::xxh64;

/// Upper bound on the shard count a single server may register.
pub const MAX_SHARDS_PER_SERVER: i64 = 1024;

/// The global, append-only route table.
///
/// Lookups take the read lock and run in parallel; registrations take the write lock and are
/// exclusive with both lookups and other registrations. A lookup racing a registration sees
/// the table either entirely before or entirely after the new routes are appended.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: RwLock<Vec<Route>>,
}

/// 64-bit non-cryptographic hash of a key (XXH64, seed 0).
pub fn hash_key(key: &str) -> u64 {
    xxh64(key.as_bytes(), 0)
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `num_shards` routes for `address:port`, shard indices `0..num_shards` in order.
    ///
    /// Returns the table length after the append. On invalid arguments the table is left
    /// untouched.
    pub fn register_server(&self, address: &str, port: i64, num_shards: i64) -> Result<usize> {
        let port = u16::try_from(port).map_err(|_| {
            KvError::InvalidArgument(format!("valid port numbers are 0-65535, got: {}", port))
        })?;
        if num_shards <= 0 {
            return Err(KvError::InvalidArgument(format!(
                "number of shards must be greater than 0, got: {}",
                num_shards
            )));
        }
        if num_shards > MAX_SHARDS_PER_SERVER {
            return Err(KvError::InvalidArgument(format!(
                "number of shards must be at most {}, got: {}",
                MAX_SHARDS_PER_SERVER, num_shards
            )));
        }
        let num_shards = num_shards as usize;

        let socket = format_socket(address, port);

        let mut routes = self.routes.write();
        routes.reserve(num_shards);
        routes.extend(
            (0..num_shards).map(|shard_index| Route::new(socket.clone(), shard_index)),
        );
        let total = routes.len();
        drop(routes);

        tracing::info!(
            "Registered new server: address={} port={} shards={} total_shards={}",
            address,
            port,
            num_shards,
            total
        );

        Ok(total)
    }

    /// Resolves the route owning `key` under the current table length.
    pub fn get_route(&self, key: &str) -> Result<Route> {
        let hash = hash_key(key);

        let routes = self.routes.read();
        if routes.is_empty() {
            return Err(KvError::NoRoute(format!(
                "route table is empty, no route for key {}",
                key
            )));
        }
        let route_idx = (hash % routes.len() as u64) as usize;

        routes
            .get(route_idx)
            .cloned()
            .ok_or_else(|| KvError::NoRoute(format!("no route found for key {}", key)))
    }

    /// Distinct server sockets in first-seen order.
    pub fn get_all_sockets(&self) -> Vec<String> {
        let routes = self.routes.read();
        let mut seen = HashSet::new();

        routes
            .iter()
            .filter(|route| seen.insert(route.socket.as_str()))
            .map(|route| route.socket.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.routes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.read().is_empty()
    }

    /// A copy of the current table, in index order.
    pub fn snapshot(&self) -> Vec<Route> {
        self.routes.read().clone()
    }
}
