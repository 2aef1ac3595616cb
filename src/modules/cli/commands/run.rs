//! Run command implementation

use clap::Args;
use spyglass_core::SpyglassError;
use spyglass_parser::parse_file;
use spyglass_runtime::ServerBuilder;
use tracing::info;

/// Run command arguments
#[derive(Args, Debug)]
pub struct RunCommand {
    /// Override server port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl RunCommand {
    /// Execute the run command
    pub async fn execute(&self, config_path: &str) -> Result<(), SpyglassError> {
        info!("Loading configuration from: {}", config_path);

        let mut params = parse_file(config_path)?;
        if let Some(port) = self.port {
            params.listen_port = Some(port);
        }

        let server = ServerBuilder::new(params)
            .on_startup(|| async {
                info!("Looking glass is ready");
                Ok(())
            })
            .on_shutdown(|| async {
                info!("Looking glass stopped");
                Ok(())
            })
            .build()?;

        server.run().await
    }
}
