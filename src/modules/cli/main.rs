//! Spyglass CLI
//!
//! Command-line interface for the Spyglass network looking glass.

use clap::Parser;
use spyglass_cli::{Cli, Commands};
use spyglass_core::SpyglassError;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), SpyglassError> {
    let cli = Cli::parse();
    let config_path = cli.config.clone();

    // Initialize logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Run(cmd) => {
            cmd.execute(&config_path).await?;
        }
        Commands::Schema(cmd) => {
            cmd.execute(&config_path)?;
        }
    }

    Ok(())
}
