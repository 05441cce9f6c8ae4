//! Moonlit CLI
//!
//! Command-line client for a running Moonlit API server:
//! - Start and end sessions
//! - Write entries
//! - List a session's notebook
//! - Check status

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use moonlit::api::dto::{CreateSessionResponse, ListEntriesResponse, SaveEntryResponse};
use moonlit::config::generate_default_config;

#[derive(Parser)]
#[command(name = "moonlit-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Client for the Moonlit journal API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8086", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a new notebook session
    New,

    /// Write an entry
    Write {
        /// Session id
        session: String,
        /// Entry text (joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Show a session's entries, newest first
    List {
        /// Session id
        session: String,
    },

    /// End a session, discarding its entries
    End {
        /// Session id
        session: String,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::New => {
            let response = client
                .post(format!("{}/api/v1/sessions", cli.api_url))
                .send()
                .await?;

            let response = ensure_success(response).await?;

            let created: CreateSessionResponse = response.json().await?;
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&created)?);
            } else {
                println!("{}", created.session_id);
            }
        }

        Commands::Write { session, text } => {
            let body = serde_json::json!({ "text": text.join(" ") });

            let response = client
                .post(format!("{}/api/v1/sessions/{}/entries", cli.api_url, session))
                .json(&body)
                .send()
                .await?;

            let response = ensure_success(response).await?;

            let saved: SaveEntryResponse = response.json().await?;
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&saved)?);
            } else {
                println!("{}", saved.message);
                println!("📅 {}", saved.entry.display_date);
            }
        }

        Commands::List { session } => {
            let response = client
                .get(format!("{}/api/v1/sessions/{}/entries", cli.api_url, session))
                .send()
                .await?;

            let response = ensure_success(response).await?;

            let list: ListEntriesResponse = response.json().await?;
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else if list.entries.is_empty() {
                println!(
                    "{}",
                    list.empty_message.as_deref().unwrap_or("No entries yet.")
                );
            } else {
                for entry in &list.entries {
                    println!("📅 {}", entry.display_date);
                    for line in entry.text.lines() {
                        println!("  {}", line);
                    }
                    println!();
                }
                println!("{} entries", list.count);
            }
        }

        Commands::End { session } => {
            let response = client
                .delete(format!("{}/api/v1/sessions/{}", cli.api_url, session))
                .send()
                .await?;

            ensure_success(response).await?;
            println!("Session {} ended", session);
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("Moonlit v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!(
                        "Sessions: {} / {}",
                        health["sessions"].as_u64().unwrap_or(0),
                        health["max_sessions"].as_u64().unwrap_or(0)
                    );

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Moonlit API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the Moonlit API server is running:");
                    eprintln!("  cargo run --bin moonlit-api");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Turn a non-2xx response into an error carrying the server's message
async fn ensure_success(response: reqwest::Response) -> anyhow::Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|body| body["error"]["message"].as_str().map(str::to_string))
        .unwrap_or(text);

    anyhow::bail!("Failed ({}): {}", status, message)
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
