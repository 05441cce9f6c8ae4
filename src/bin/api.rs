//! Moonlit API Server
//!
//! Run with: cargo run --bin moonlit-api
//!
//! # Configuration
//!
//! Read from `--config`, or the first of
//! `~/.config/moonlit/config.toml`, `/etc/moonlit/config.toml`,
//! `./config.toml`. Environment variables override the file:
//! - `MOONLIT_API_HOST`: Host to bind to (default: 127.0.0.1)
//! - `MOONLIT_API_PORT`: Port to listen on (default: 8086)
//! - `MOONLIT_MAX_SESSIONS`: Concurrent session limit (default: 1000)
//! - `MOONLIT_SESSION_IDLE_SECS`: Idle seconds before a session ends (default: 3600)
//! - `MOONLIT_LOG_LEVEL`, `MOONLIT_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full filter override

use std::path::PathBuf;

use clap::Parser;
use moonlit::api::{serve, AppState};
use moonlit::Config;

#[derive(Parser)]
#[command(name = "moonlit-api")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the Moonlit notebook over HTTP")]
struct Args {
    /// Config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    if let Some(port) = args.port {
        config.api.port = port;
    }

    moonlit::logging::init(&config.logging, "tower_http=debug");

    tracing::info!("Starting Moonlit API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        max_sessions = config.api.max_sessions,
        session_idle_secs = config.api.session_idle_secs,
        title = %config.theme.title,
        "Notebook configured"
    );

    let state = AppState::new(config.api.clone(), config.theme);
    serve(state, &config.api).await?;

    tracing::info!("Moonlit API server stopped");
    Ok(())
}
