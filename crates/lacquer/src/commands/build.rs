//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use lacquer_site::SiteBuilder;

use crate::config::ConfigFile;

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building site...");

    let file_config = ConfigFile::load(config_path)?;

    let mut config = file_config.into_build_config();
    if let Some(output) = output {
        config.output_dir = output;
    }
    if let Some(minify) = minify {
        config.minify = minify;
    }

    let result = tokio::task::spawn_blocking(move || SiteBuilder::new(config).build()).await??;

    tracing::info!(
        "Built {} pages with {} previews in {}ms",
        result.pages,
        result.previews,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
