//! Test utilities for MRG
//!
//! Helpers for exercising the pipeline without the network:
//! - [`FakeCatalog`] - an in-memory [`ReleaseCatalogClient`] that counts calls
//! - [`fixtures`] - sample metadata, records and id files
//! - [`init_test_logging`] - `tracing` output for tests, opt-in via `RUST_LOG`
//!
//! # Example
//!
//! ```rust,no_run
//! use mrg::test_utils::{FakeCatalog, fixtures};
//!
//! let catalog = FakeCatalog::new()
//!     .with_release("X", fixtures::metadata("A", "T", "2020-05-01", ""))
//!     .with_cover("X", fixtures::COVER_BYTES.to_vec());
//! assert_eq!(catalog.release_calls(), 0);
//! ```

pub mod fixtures;

use crate::catalog::{CatalogError, ReleaseCatalogClient};
use crate::models::ReleaseMetadata;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Route `tracing` output from MRG code into the test harness.
///
/// With `level` set, only the `mrg` target is enabled at that level.
/// Otherwise `RUST_LOG` is honoured, and without it nothing is installed so
/// test output stays quiet. Only the first call in a test binary has effect.
///
/// ```bash
/// RUST_LOG=mrg=debug cargo test pipeline
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = match level {
            Some(level) => EnvFilter::new(format!("mrg={level}")),
            None if std::env::var_os("RUST_LOG").is_some() => EnvFilter::from_default_env(),
            None => return,
        };

        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}

/// In-memory catalog keyed by release identifier.
///
/// Unknown identifiers fail with [`CatalogError::NotFound`]; identifiers
/// registered with [`FakeCatalog::failing`] fail with a network error.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    releases: HashMap<String, ReleaseMetadata>,
    covers: HashMap<String, Vec<u8>>,
    failing: Vec<String>,
    release_calls: AtomicUsize,
    cover_calls: AtomicUsize,
}

impl FakeCatalog {
    /// Empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register metadata for `id`.
    #[must_use]
    pub fn with_release(mut self, id: &str, metadata: ReleaseMetadata) -> Self {
        self.releases.insert(id.to_string(), metadata);
        self
    }

    /// Register cover bytes for `id`.
    #[must_use]
    pub fn with_cover(mut self, id: &str, bytes: Vec<u8>) -> Self {
        self.covers.insert(id.to_string(), bytes);
        self
    }

    /// Make every lookup of `id` fail with a network error.
    #[must_use]
    pub fn failing(mut self, id: &str) -> Self {
        self.failing.push(id.to_string());
        self
    }

    /// Number of metadata lookups so far.
    pub fn release_calls(&self) -> usize {
        self.release_calls.load(Ordering::SeqCst)
    }

    /// Number of cover lookups so far.
    pub fn cover_calls(&self) -> usize {
        self.cover_calls.load(Ordering::SeqCst)
    }

    fn check_failing(&self, id: &str) -> Result<(), CatalogError> {
        if self.failing.iter().any(|f| f == id) {
            return Err(CatalogError::Network(format!("connection refused for {id}")));
        }
        Ok(())
    }
}

#[async_trait]
impl ReleaseCatalogClient for FakeCatalog {
    async fn fetch_release(&self, id: &str) -> Result<ReleaseMetadata, CatalogError> {
        self.release_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failing(id)?;
        self.releases.get(id).cloned().ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    async fn fetch_cover_art(&self, id: &str) -> Result<Vec<u8>, CatalogError> {
        self.cover_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failing(id)?;
        self.covers.get(id).cloned().ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}
