//! Command-line and environment configuration for every role.

use clap::{Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::client::ClientConfig;
use crate::router::table::MAX_SHARDS_PER_SERVER;

#[derive(Parser, Debug)]
#[command(name = "shardkv")]
#[command(about = "Sharded in-memory key-value store")]
#[command(version)]
pub struct Cli {
    /// Log at DEBUG instead of INFO
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the central router
    Router(RouterArgs),
    /// Run a shard server and register it with a router
    Server(ServerArgs),
    /// Issue one operation against a running cluster
    Client(ClientArgs),
}

#[derive(Parser, Debug)]
pub struct RouterArgs {
    /// Address the router listens on
    #[arg(long, env = "SHARDKV_ROUTER_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,
}

#[derive(Parser, Debug)]
pub struct ServerArgs {
    /// Address advertised to the router (clients connect to address:port)
    #[arg(long, env = "SHARDKV_ADDRESS", default_value = "localhost")]
    pub address: String,

    /// Port to run the server on
    #[arg(short, long, env = "SHARDKV_PORT", default_value_t = 8081)]
    pub port: u16,

    /// Local interface to bind
    #[arg(long, env = "SHARDKV_BIND_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind_host: IpAddr,

    /// Number of shards hosted by this server
    #[arg(
        short,
        long,
        env = "SHARDKV_NUM_SHARDS",
        default_value_t = 4,
        value_parser = clap::value_parser!(u32).range(1..=MAX_SHARDS_PER_SERVER)
    )]
    pub num_shards: u32,

    /// Socket address of the router
    #[arg(short, long, env = "SHARDKV_ROUTER")]
    pub router: String,
}

impl ServerArgs {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }
}

#[derive(Parser, Debug)]
pub struct ClientArgs {
    /// Socket address of the router
    #[arg(short, long, env = "SHARDKV_ROUTER")]
    pub router: String,

    /// Per-request timeout in milliseconds
    #[arg(long, env = "SHARDKV_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub op: ClientOp,
}

impl ClientArgs {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            router: self.router.clone(),
            request_timeout: self.timeout_ms.map(Duration::from_millis),
        }
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ClientOp {
    Set { key: String, value: String },
    Get { key: String },
    Delete { key: String },
    Exists { key: String },
    /// Total number of keys across all servers
    Len,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_defaults() {
        let cli = Cli::try_parse_from(["shardkv", "server", "--router", "127.0.0.1:8080"]).unwrap();

        let Command::Server(args) = cli.command else {
            panic!("Expected server subcommand");
        };
        assert_eq!(args.address, "localhost");
        assert_eq!(args.port, 8081);
        assert_eq!(args.num_shards, 4);
        assert_eq!(args.bind_addr(), "0.0.0.0:8081".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_server_rejects_zero_shards() {
        let result = Cli::try_parse_from([
            "shardkv",
            "server",
            "--router",
            "127.0.0.1:8080",
            "--num-shards",
            "0",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_server_rejects_too_many_shards() {
        let too_many = (MAX_SHARDS_PER_SERVER + 1).to_string();
        let result = Cli::try_parse_from([
            "shardkv",
            "server",
            "--router",
            "127.0.0.1:8080",
            "--num-shards",
            too_many.as_str(),
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_router_bind() {
        let cli =
            Cli::try_parse_from(["shardkv", "-v", "router", "--bind", "127.0.0.1:9000"]).unwrap();

        assert!(cli.verbose);
        let Command::Router(args) = cli.command else {
            panic!("Expected router subcommand");
        };
        assert_eq!(args.bind, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_client_op_and_timeout() {
        let cli = Cli::try_parse_from([
            "shardkv",
            "client",
            "--router",
            "10.0.0.1:8080",
            "--timeout-ms",
            "250",
            "set",
            "k",
            "v",
        ])
        .unwrap();

        let Command::Client(args) = cli.command else {
            panic!("Expected client subcommand");
        };
        assert_eq!(
            args.op,
            ClientOp::Set {
                key: "k".to_string(),
                value: "v".to_string()
            }
        );
        let config = args.client_config();
        assert_eq!(config.router, "10.0.0.1:8080");
        assert_eq!(config.request_timeout, Some(Duration::from_millis(250)));
    }
}
