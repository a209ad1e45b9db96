//! MusicBrainz + Cover Art Archive client
//!
//! - Metadata: `GET {musicbrainz_url}/release/{mbid}?inc=artists+labels&fmt=json`
//! - Cover art: `GET {coverart_url}/release/{mbid}/front` (redirects are followed)
//!
//! MusicBrainz requires a descriptive User-Agent and allows one request per
//! second; the client enforces both.

use super::{CatalogError, ReleaseCatalogClient};
use crate::constants::{
    DEFAULT_COVERART_URL, DEFAULT_MUSICBRAINZ_URL, DEFAULT_RATE_LIMIT_MS, DEFAULT_TIMEOUT,
    DEFAULT_USER_AGENT,
};
use crate::models::ReleaseMetadata;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Endpoints and politeness settings for [`MusicBrainzClient`].
#[derive(Debug, Clone)]
pub struct MusicBrainzConfig {
    /// WS/2 root, without trailing slash
    pub musicbrainz_url: String,
    /// Cover Art Archive root, without trailing slash
    pub coverart_url: String,
    /// User-Agent header value
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Minimum spacing between MusicBrainz requests
    pub rate_limit: Duration,
}

impl Default for MusicBrainzConfig {
    fn default() -> Self {
        Self {
            musicbrainz_url: DEFAULT_MUSICBRAINZ_URL.to_string(),
            coverart_url: DEFAULT_COVERART_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            rate_limit: Duration::from_millis(DEFAULT_RATE_LIMIT_MS),
        }
    }
}

/// MusicBrainz release response (only the fields we render)
#[derive(Debug, Deserialize)]
struct MBRelease {
    title: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(rename = "artist-credit", default)]
    artist_credit: Vec<MBArtistCredit>,
    #[serde(rename = "label-info", default)]
    label_info: Vec<MBLabelInfo>,
}

#[derive(Debug, Deserialize)]
struct MBArtistCredit {
    artist: MBArtist,
}

#[derive(Debug, Deserialize)]
struct MBArtist {
    name: String,
}

#[derive(Debug, Deserialize)]
struct MBLabelInfo {
    #[serde(rename = "catalog-number", default)]
    catalog_number: Option<String>,
    #[serde(default)]
    label: Option<MBLabel>,
}

#[derive(Debug, Deserialize)]
struct MBLabel {
    name: String,
}

impl MBRelease {
    fn into_metadata(self, id: &str) -> Result<ReleaseMetadata, CatalogError> {
        let artist = self
            .artist_credit
            .into_iter()
            .next()
            .map(|credit| credit.artist.name)
            .ok_or_else(|| CatalogError::Parse(format!("release {id} has no artist credit")))?;

        // Absent label info is common; both fields fall back to empty.
        let (label, catalog_number) = match self.label_info.into_iter().next() {
            Some(info) => (
                info.label.map(|l| l.name).unwrap_or_default(),
                info.catalog_number.unwrap_or_default(),
            ),
            None => (String::new(), String::new()),
        };

        Ok(ReleaseMetadata {
            artist,
            title: self.title,
            release_date: self.date.unwrap_or_default(),
            label,
            catalog_number,
        })
    }
}

/// Spaces requests at least `min_interval` apart
struct RateLimiter {
    last_request: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        Self {
            last_request: Mutex::new(None),
            min_interval,
        }
    }

    async fn wait(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(last_time) = *last {
            let elapsed = last_time.elapsed();
            if elapsed < self.min_interval {
                let wait_time = self.min_interval - elapsed;
                tracing::debug!("Rate limiting: waiting {:?}", wait_time);
                tokio::time::sleep(wait_time).await;
            }
        }

        *last = Some(Instant::now());
    }
}

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: Client,
    config: MusicBrainzConfig,
    rate_limiter: RateLimiter,
}

impl MusicBrainzClient {
    /// Build a client from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Network`] if the HTTP client cannot be built
    /// (for example when no TLS backend is available).
    pub fn new(config: MusicBrainzConfig) -> Result<Self, CatalogError> {
        let http_client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            rate_limiter: RateLimiter::new(config.rate_limit),
            config,
        })
    }

    async fn get(&self, url: &str, id: &str) -> Result<reqwest::Response, CatalogError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id.to_string()));
        }

        if status == StatusCode::SERVICE_UNAVAILABLE {
            return Err(CatalogError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api(status.as_u16(), error_text));
        }

        Ok(response)
    }
}

#[async_trait]
impl ReleaseCatalogClient for MusicBrainzClient {
    async fn fetch_release(&self, id: &str) -> Result<ReleaseMetadata, CatalogError> {
        self.rate_limiter.wait().await;

        let url = format!(
            "{}/release/{}?inc=artists+labels&fmt=json",
            self.config.musicbrainz_url, id
        );
        tracing::debug!(mbid = %id, url = %url, "Querying MusicBrainz API");

        let release: MBRelease = self
            .get(&url, id)
            .await?
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        let metadata = release.into_metadata(id)?;

        tracing::debug!(
            mbid = %id,
            artist = %metadata.artist,
            title = %metadata.title,
            "Retrieved release from MusicBrainz"
        );

        Ok(metadata)
    }

    async fn fetch_cover_art(&self, id: &str) -> Result<Vec<u8>, CatalogError> {
        let url = format!("{}/release/{}/front", self.config.coverart_url, id);
        tracing::debug!(mbid = %id, url = %url, "Querying Cover Art Archive");

        let bytes = self
            .get(&url, id)
            .await?
            .bytes()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
