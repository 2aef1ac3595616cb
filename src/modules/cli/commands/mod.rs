//! CLI commands

mod run;
mod schema;

pub use run::RunCommand;
pub use schema::SchemaCommand;

use clap::{Parser, Subcommand};

/// Spyglass - The network looking glass
#[derive(Parser, Debug)]
#[command(name = "spyglass")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(
        short = 'f',
        long = "file",
        global = true,
        default_value = "spyglass.yml"
    )]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the Spyglass server
    Run(RunCommand),

    /// Print the generated OpenAPI schema document
    Schema(SchemaCommand),
}
