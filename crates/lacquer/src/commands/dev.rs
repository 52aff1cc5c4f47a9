//! Development server command.

use std::path::Path;

use anyhow::Result;

use lacquer_server::{DevServer, DevServerConfig};

use crate::config::ConfigFile;

/// Run the dev server.
pub async fn run(config_path: &Path, port: u16, open: bool) -> Result<()> {
    tracing::info!("Starting development server on port {}", port);

    let file_config = ConfigFile::load(config_path)?;

    let config = DevServerConfig {
        build: file_config.into_build_config(),
        port,
        open,
        ..Default::default()
    };

    DevServer::new(config).start().await?;

    Ok(())
}
