//! Remote release catalog.
//!
//! The pipeline only needs two capabilities from the outside world: resolve
//! a release identifier to its metadata, and resolve it to front cover image
//! bytes. [`ReleaseCatalogClient`] captures exactly that so the caches can be
//! exercised against a fake in tests; [`MusicBrainzClient`] is the production
//! implementation backed by MusicBrainz and the Cover Art Archive.

mod musicbrainz;

pub use musicbrainz::{MusicBrainzClient, MusicBrainzConfig};

use crate::models::ReleaseMetadata;
use async_trait::async_trait;
use thiserror::Error;

/// Catalog client errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure (DNS, TLS, timeout, connection reset)
    #[error("Network error: {0}")]
    Network(String),

    /// The catalog has no such release, or no front cover for it
    #[error("Release not found: {0}")]
    NotFound(String),

    /// The catalog asked us to slow down (HTTP 503)
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Any other non-success status
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// The response body could not be interpreted
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Resolves release identifiers against a remote catalog.
#[async_trait]
pub trait ReleaseCatalogClient: Send + Sync {
    /// Fetch artist/title/date/label/catalog-number for a release.
    async fn fetch_release(&self, id: &str) -> Result<ReleaseMetadata, CatalogError>;

    /// Fetch the raw front cover image for a release.
    async fn fetch_cover_art(&self, id: &str) -> Result<Vec<u8>, CatalogError>;
}
