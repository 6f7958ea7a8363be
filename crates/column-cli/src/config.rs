/*
[INPUT]:  Optional YAML configuration file, COLUMN_* environment variables
[OUTPUT]: Parsed CLI configuration and client settings
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use anyhow::{Context, Result, bail};
use column_client::{COLUMN_API_ADDRESS, ClientConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable prefix layered over the file (`COLUMN_API_KEY`, ...)
pub const ENV_PREFIX: &str = "COLUMN";

/// Top-level configuration for the Column CLI
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// API key; `test_` keys target the sandbox, `live_` keys production
    #[serde(default)]
    pub api_key: Option<String>,
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    COLUMN_API_ADDRESS.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl CliConfig {
    /// Load configuration from an optional YAML file, then `COLUMN_*` env vars
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            builder = builder
                .add_source(config::File::from(path).format(config::FileFormat::Yaml));
        }
        builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));

        let config: Self = builder
            .build()
            .context("read configuration sources")?
            .try_deserialize()
            .context("parse configuration")?;
        Ok(config)
    }

    /// API key, or an error naming where to set it
    pub fn api_key(&self) -> Result<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => bail!("no API key configured; set `api_key` in the config file or COLUMN_API_KEY"),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }

    /// Template written by `column-cli init`
    pub fn template() -> Self {
        Self {
            api_key: Some("test_your_sandbox_key".to_string()),
            ..Self::default()
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("failed to serialize config to YAML")
    }
}
