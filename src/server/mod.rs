//! Shard Server Module
//!
//! Stores key-value data for the shards assigned to this process and serves per-shard
//! CRUD requests addressed by an explicit shard index.
//!
//! ## Core Concepts
//! - **Shard**: an in-memory string map behind its own reader/writer lock.
//! - **ShardServer**: a fixed-size collection of shards created at startup.
//! - **Trust**: the server never routes. It uses the shard index supplied by the caller,
//!   which in practice came from the router.
//!
//! Operations on different shards never contend. `length` visits the shards one at a time,
//! so under concurrent writes it is an approximation, not a point-in-time snapshot.

pub mod handlers;
pub mod protocol;
pub mod service;
pub mod shard;
pub mod store;

pub use service::{app, serve};
pub use shard::Shard;
pub use store::ShardServer;
