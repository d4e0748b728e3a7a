//! fedsnap - Federated metrics snapshot collector
//!
//! # Usage
//!
//! ```bash
//! # Run one gather cycle (default)
//! fedsnap
//! fedsnap --config configs/fedsnap.toml
//!
//! # Validate the configuration without touching the network
//! fedsnap check
//! ```
//!
//! Each invocation runs a single cycle; recurrence is left to cron or a
//! systemd timer.

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// fedsnap - Federated metrics snapshot collector
#[derive(Parser, Debug)]
#[command(name = "fedsnap")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file
    #[arg(short, long, default_value = "configs/fedsnap.toml", global = true)]
    config: std::path::PathBuf,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one gather cycle and archive the snapshot
    Gather,

    /// Load and validate the configuration, then print a summary
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Check) => cmd::check::run(&cli.config),
        // No subcommand = gather (default behavior)
        Some(Command::Gather) | None => cmd::gather::run(&cli.config, cli.log_level.as_deref()),
    }
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();

    Ok(())
}
