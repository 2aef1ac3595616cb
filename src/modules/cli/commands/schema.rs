//! Schema command implementation

use clap::Args;
use spyglass_core::SpyglassError;
use spyglass_parser::parse_file;
use spyglass_runtime::SchemaGenerator;
use std::sync::Arc;

/// Schema command arguments
#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl SchemaCommand {
    /// Execute the schema command: print the OpenAPI document to stdout
    pub fn execute(&self, config_path: &str) -> Result<(), SpyglassError> {
        let params = parse_file(config_path)?;
        let schema = SchemaGenerator::new(Arc::new(params)).build()?;

        let output = if self.pretty {
            serde_json::to_string_pretty(&schema)?
        } else {
            serde_json::to_string(&schema)?
        };
        println!("{}", output);

        Ok(())
    }
}
