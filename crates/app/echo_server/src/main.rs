//! MCP echo server binary.
//!
//! Serves `POST /mcp` and `GET /health` until interrupted with Ctrl-C.

pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use tracing::{error, info};

use echo_api::config::{ApiConfig, DEFAULT_PORT};

/// CLI arguments for the echo server.
#[derive(Parser, Debug)]
#[command(name = "echo_server", version, about = "MCP echo server")]
struct Args {
    /// Interface to listen on.
    #[arg(long, env = "ECHO_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "ECHO_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries only the startup banner.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,echo_api=debug,echo_core=debug,tower_http=debug".into()),
        )
        .init();

    if let Err(e) = run(Args::parse()).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = ApiConfig::new(&args.host, args.port);
    info!(
        version = echo_core::version(),
        bind_addr = %config.bind_addr,
        "starting echo_server"
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|source| Error::Bind {
            addr: config.bind_addr.clone(),
            source,
        })?;
    let local_addr = listener.local_addr()?;

    println!("MCP Server running on port {}", local_addr.port());
    info!(addr = %local_addr, "MCP echo API listening");

    axum::serve(listener, echo_api::router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed the server runs
/// until killed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
