//! Shared setup for CLI commands

use super::CliConfig;
use crate::catalog::MusicBrainzClient;
use crate::config::{GlobalConfig, resolve_cache_dir};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Install the stderr `tracing` subscriber.
///
/// `RUST_LOG` wins over `level`. Calling this twice is harmless.
pub fn init_logging(level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level.unwrap_or("info"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Loaded (or default) global config
    pub global: GlobalConfig,
    /// Resolved cache directory
    pub cache_dir: PathBuf,
}

impl CommandContext {
    /// Load the config file and resolve the cache directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub async fn load(config: &CliConfig) -> Result<Self> {
        let global = GlobalConfig::load_with_optional(config.config_path.clone())
            .await
            .context("Failed to load configuration")?;

        let cache_dir = resolve_cache_dir(config.cache_dir.clone(), &global);
        tracing::debug!("Using cache directory {}", cache_dir.display());

        Ok(Self { global, cache_dir })
    }

    /// Build the MusicBrainz client from the loaded config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn catalog_client(&self) -> Result<MusicBrainzClient> {
        let mb = self.global.musicbrainz_config();
        tracing::debug!("Setting MusicBrainz user agent to {}", mb.user_agent);
        MusicBrainzClient::new(mb).context("Failed to create MusicBrainz client")
    }
}
