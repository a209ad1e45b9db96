//! User-wide configuration (`~/.mrg/config.toml`).

use crate::catalog::MusicBrainzConfig;
use crate::constants::{
    DEFAULT_COVERART_URL, DEFAULT_MUSICBRAINZ_URL, DEFAULT_RATE_LIMIT_MS, DEFAULT_TIMEOUT,
    DEFAULT_USER_AGENT,
};
use crate::core::MrgError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

/// Global configuration for MRG.
///
/// Every field is optional; unset fields fall back to built-in defaults.
///
/// ```toml
/// # Where {id}.data and cover images live (also the page's directory)
/// cache_dir = "/srv/www/music"
/// # Prepended to the cover image id in <img src>
/// cover_prefix = "/music/"
/// user_agent = "martinevereleases/1.1"
/// musicbrainz_url = "https://musicbrainz.org/ws/2"
/// coverart_url = "https://coverartarchive.org"
/// timeout_secs = 30
/// rate_limit_ms = 1000
/// ```
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Cache directory, used when neither `--cache-dir` nor `MRG_CACHE_DIR` is given
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    /// Prefix for `<img src>` in gallery mode
    #[serde(default)]
    pub cover_prefix: Option<String>,

    /// User-Agent sent to MusicBrainz and the Cover Art Archive
    #[serde(default)]
    pub user_agent: Option<String>,

    /// MusicBrainz WS/2 root
    #[serde(default)]
    pub musicbrainz_url: Option<String>,

    /// Cover Art Archive root
    #[serde(default)]
    pub coverart_url: Option<String>,

    /// HTTP timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Minimum delay between MusicBrainz requests in milliseconds
    #[serde(default)]
    pub rate_limit_ms: Option<u64>,
}

impl GlobalConfig {
    /// Load from `path` if given, otherwise from [`GlobalConfig::default_path`].
    ///
    /// A missing file at the default location yields the default config. A
    /// missing file at an explicit path is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// fails [`GlobalConfig::validate`].
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from(&path).await;
        }

        match Self::default_path() {
            Ok(path) if path.exists() => Self::load_from(&path).await,
            Ok(_) => Ok(Self::default()),
            Err(e) => {
                tracing::debug!("No default config location: {e}");
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// fails [`GlobalConfig::validate`].
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Platform config location.
    ///
    /// - **Windows**: `%LOCALAPPDATA%\mrg\config.toml`
    /// - **Unix/macOS**: `~/.mrg/config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if the home (or local data) directory is unknown.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("mrg")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".mrg")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Reject values that would make every request fail.
    ///
    /// # Errors
    ///
    /// Returns [`MrgError::Config`] naming the offending key.
    pub fn validate(&self) -> Result<(), MrgError> {
        for (key, value) in [
            ("musicbrainz_url", &self.musicbrainz_url),
            ("coverart_url", &self.coverart_url),
        ] {
            if let Some(url) = value {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(MrgError::Config {
                        message: format!("{key} must be an http(s) URL, got '{url}'"),
                    });
                }
            }
        }

        if self.user_agent.as_deref().is_some_and(|ua| ua.trim().is_empty()) {
            return Err(MrgError::Config {
                message: "user_agent must not be empty".to_string(),
            });
        }

        if self.timeout_secs == Some(0) {
            return Err(MrgError::Config {
                message: "timeout_secs must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Cover image prefix, empty by default.
    #[must_use]
    pub fn cover_prefix(&self) -> &str {
        self.cover_prefix.as_deref().unwrap_or_default()
    }

    /// Catalog client settings with defaults filled in.
    #[must_use]
    pub fn musicbrainz_config(&self) -> MusicBrainzConfig {
        MusicBrainzConfig {
            musicbrainz_url: trim_url(self.musicbrainz_url.as_deref(), DEFAULT_MUSICBRAINZ_URL),
            coverart_url: trim_url(self.coverart_url.as_deref(), DEFAULT_COVERART_URL),
            user_agent: self.user_agent.clone().unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            timeout: self.timeout_secs.map_or(DEFAULT_TIMEOUT, Duration::from_secs),
            rate_limit: Duration::from_millis(self.rate_limit_ms.unwrap_or(DEFAULT_RATE_LIMIT_MS)),
        }
    }
}

fn trim_url(value: Option<&str>, default: &str) -> String {
    value.unwrap_or(default).trim_end_matches('/').to_string()
}
