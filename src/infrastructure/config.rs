use serde::Deserialize;
use std::path::PathBuf;

use crate::presentation::cli::Cli;

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    pub root_url: String,
    pub api_key: String,
    pub output_dir: PathBuf,
}

/// Build the export configuration from parsed command line arguments.
///
/// No config file or environment variables are read; the arguments are the
/// only source layered over the defaults.
pub fn load_export_config(cli: &Cli) -> anyhow::Result<ExportConfig> {
    let output_dir = cli
        .output_dir
        .as_ref()
        .map(|dir| dir.to_string_lossy().into_owned());

    let settings = config::Config::builder()
        .set_default("output_dir", ".")?
        .set_override("root_url", cli.root_url.as_str())?
        .set_override("api_key", cli.api_key.as_str())?
        .set_override_option("output_dir", output_dir)?
        .build()?;

    Ok(settings.try_deserialize()?)
}
