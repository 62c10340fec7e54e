use anyhow::Context;
use clap::Parser;
use shardkv::client::{KvClient, RouterClient};
use shardkv::config::{Cli, ClientArgs, ClientOp, Command, RouterArgs, ServerArgs};
use shardkv::router::{self, RouteTable};
use shardkv::server::{self, ShardServer};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Command::Router(args) => run_router(args).await,
        Command::Server(args) => run_server(args).await,
        Command::Client(args) => run_client(args).await,
    }
}

async fn run_router(args: RouterArgs) -> anyhow::Result<()> {
    let listener = TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Error starting router on {}", args.bind))?;

    router::serve(listener, Arc::new(RouteTable::new())).await?;

    Ok(())
}

async fn run_server(args: ServerArgs) -> anyhow::Result<()> {
    let shard_server = Arc::new(ShardServer::new(args.num_shards as usize));

    // Bind first so the advertised port is ours, but accept nothing until registered.
    let listener = TcpListener::bind(args.bind_addr())
        .await
        .with_context(|| format!("Error starting server on {}", args.bind_addr()))?;

    let router_client = RouterClient::new(args.router.as_str())?;
    server::service::register(&router_client, &args.address, args.port, &shard_server)
        .await
        .with_context(|| format!("Error registering with router at {}", args.router))?;

    server::serve(listener, shard_server).await?;

    Ok(())
}

async fn run_client(args: ClientArgs) -> anyhow::Result<()> {
    let client = KvClient::with_config(args.client_config())?;

    match args.op {
        ClientOp::Set { key, value } => {
            client.set(&key, &value).await?;
            println!("OK");
        }
        ClientOp::Get { key } => match client.get(&key).await? {
            Some(value) => println!("{}", value),
            None => println!("(nil)"),
        },
        ClientOp::Delete { key } => {
            client.delete(&key).await?;
            println!("OK");
        }
        ClientOp::Exists { key } => {
            println!("{}", client.exists(&key).await?);
        }
        ClientOp::Len => {
            let report = client.length().await?;
            println!("{}", report.total);
            if !report.is_exact() {
                eprintln!(
                    "warning: {} server(s) did not answer, total is partial",
                    report.failures.len()
                );
                for failure in &report.failures {
                    eprintln!("  {}: {}", failure.socket, failure.error);
                }
            }
        }
    }

    Ok(())
}
