/*
[INPUT]:  Output path for the generated file
[OUTPUT]: Template YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When CliConfig schema changes
*/

use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::info;

use crate::config::CliConfig;

/// Write a sandbox configuration template. Refuses to overwrite an existing file.
pub fn run_init(output: &Path) -> Result<()> {
    if output.exists() {
        bail!("refusing to overwrite existing file: {}", output.display());
    }

    let yaml = CliConfig::template().to_yaml()?;
    std::fs::write(output, yaml)
        .with_context(|| format!("failed to write config to {}", output.display()))?;

    info!(path = %output.display(), "configuration template written");
    Ok(())
}
