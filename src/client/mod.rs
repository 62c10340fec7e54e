//! Client Module
//!
//! Hides routing from the caller so that set/get/delete/exists behave as if against a single
//! logical map.
//!
//! Every key-addressed operation is two sequential round trips: ask the router for the key's
//! route, then call the resolved server with the route's shard index. `length` is the
//! exception: it lists every server socket from the router and sums each server's local
//! count, skipping (and reporting) servers that fail.
//!
//! ## Submodules
//! - **`rpc`**: JSON-over-HTTP calls with wire-error decoding.
//! - **`router_client`**: the three router RPCs.
//! - **`resolver`**: `KvClient`, the public map-like API.
//! - **`types`**: client configuration and the length report.

pub mod resolver;
pub mod router_client;
pub mod rpc;
pub mod types;

pub use resolver::KvClient;
pub use router_client::RouterClient;
pub use rpc::RpcClient;
pub use types::{ClientConfig, LengthReport};
