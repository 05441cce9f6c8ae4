//! Moonlit terminal notebook
//!
//! Write entries on stdin; the notebook lives as long as the process.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use moonlit::{Config, TerminalNotebook};

#[derive(Parser)]
#[command(name = "moonlit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A notebook for quiet thoughts that lasts as long as this session")]
struct Args {
    /// Config file (default: search the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };

    // Logs go to stderr so they never interleave with the notebook text.
    moonlit::logging::init(&config.logging, "");
    tracing::debug!("Moonlit terminal notebook v{}", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let log = TerminalNotebook::new(stdin.lock(), stdout.lock(), config.theme).run()?;

    tracing::debug!(entries = log.len(), "Notebook closed");
    Ok(())
}
