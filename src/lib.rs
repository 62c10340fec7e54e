//! Sharded Key-Value Store Library
//!
//! A distributed, sharded in-memory key-value store made of three roles. The binary
//! (`main.rs`) runs any of them.
//!
//! ## Architecture Modules
//! - **`router`**: The central routing service. Keeps an append-only table of
//!   `(socket, shard_index)` routes and maps a key to `table[hash(key) mod len]`.
//! - **`server`**: A shard server. Hosts a fixed number of independently locked shards and
//!   serves per-shard CRUD requests addressed by shard index.
//! - **`client`**: The resolver. Asks the router for a key's route, then talks directly to
//!   the owning server.
//! - **`config`**: Command-line/environment configuration for all roles.
//! - **`error`**: The error type shared by every role and carried on the wire.
//!
//! There is no replication, rebalancing or persistence. All state lives in process memory.

pub mod client;
pub mod config;
pub mod error;
pub mod router;
pub mod server;

pub use client::{KvClient, LengthReport};
pub use error::{KvError, Result};
