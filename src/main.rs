use anyhow::Result;
use clap::Parser;
use resume_analyser::cli::{handle_command, Cli};
use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_PATH: &str = "/tmp/resume-analyser.log";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging first
    let log_path =
        std::env::var("RESUME_ANALYSER_LOG").unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Clear file on startup
        .open(&log_path)
        .map_err(|e| anyhow::anyhow!("Failed to open log file {}: {}", log_path, e))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(Mutex::new(file))
                .with_current_span(true)
                .with_span_list(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting resume analyser client");

    let cli = Cli::parse();
    if let Err(e) = handle_command(cli).await {
        tracing::error!("Command failed: {:#}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}
