//! MRG - Music Release Generator
//!
//! Builds the music section of a personal website from a plain list of
//! MusicBrainz release ids. Metadata and front covers are fetched from
//! MusicBrainz and the Cover Art Archive, cached on disk next to the page, and
//! rendered either as a two-column cover grid inside an HTML template or as a
//! year-grouped list for a CV page.
//!
//! # Pipeline
//!
//! ```text
//! id file ──▶ input ──▶ cache (metadata + covers) ──▶ render ──▶ output file
//!                          │ miss / --refresh
//!                          ▼
//!                       catalog (MusicBrainz, Cover Art Archive)
//! ```
//!
//! Every failure is terminal: nothing is written unless every release
//! resolved.
//!
//! # Modules
//!
//! - [`input`] - id file parsing (`identifier:kind:url` per line)
//! - [`catalog`] - remote catalog trait and the MusicBrainz client
//! - [`cache`] - per-release metadata and cover art caches
//! - [`render`] - gallery and chronological HTML renderers, template substitution
//! - [`pipeline`] - orchestration of a full run
//! - [`diagnostics`] - levelled diagnostics passed to pipeline components
//! - [`config`] - `~/.mrg/config.toml` and cache directory resolution
//! - [`core`] - error types and user-facing error formatting
//! - [`cli`] - command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use mrg::catalog::{MusicBrainzClient, MusicBrainzConfig};
//! use mrg::diagnostics::TracingSink;
//! use mrg::pipeline::Pipeline;
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = MusicBrainzClient::new(MusicBrainzConfig::default())?;
//! let report = Pipeline::new("site/music", &client, &TracingSink)
//!     .generate_gallery(
//!         Path::new("releases.txt"),
//!         Path::new("template.html"),
//!         Path::new("site/music/index.html"),
//!     )
//!     .await?;
//! println!("{} releases", report.releases);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod diagnostics;
pub mod input;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
