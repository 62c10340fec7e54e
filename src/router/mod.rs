//! Router Module
//!
//! The central routing service. It owns the global route table and answers two questions:
//! "which server and shard own this key" and "register a newly started server".
//!
//! ## Core Concepts
//! - **Route**: a `(socket, shard_index)` pair naming one shard on one server.
//! - **Route Table**: an append-only list of routes. A key is owned by
//!   `table[hash(key) mod len(table)]`.
//! - **Registration**: a starting server contributes one route per shard, appended in
//!   ascending shard order. Routes are never moved, reused or removed.
//!
//! The router never touches key-value data. Growing the table changes the modulus for every
//! key, so keys written before a registration may afterwards resolve to a shard that does not
//! hold them. There is no rebalancing.

pub mod handlers;
pub mod protocol;
pub mod service;
pub mod table;
pub mod types;

pub use service::{app, serve};
pub use table::RouteTable;
pub use types::Route;
