//! Page generation pipeline.
//!
//! 1. Parse the id file (all-or-nothing)
//! 2. Resolve every release through the metadata and cover caches, one at a
//!    time and in input order
//! 3. Render, then write the output atomically
//!
//! Any error aborts the run before the output file is touched, so a previous
//! page is never replaced by one with missing releases.

use crate::cache::{CoverArtCache, MetadataCache};
use crate::catalog::ReleaseCatalogClient;
use crate::core::MrgError;
use crate::diagnostics::DiagnosticsSink;
use crate::input::load_release_list;
use crate::models::{ReleaseRequest, ResolvedRelease};
use crate::render::{ChronologicalRenderer, GalleryRenderer, compose, has_placeholder};
use crate::utils::{ProgressBar, safe_write};
use std::path::{Path, PathBuf};

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of releases rendered
    pub releases: usize,
    /// File that was written
    pub output: PathBuf,
}

/// Orchestrates caches, catalog and renderers for one run.
pub struct Pipeline<'a> {
    metadata: MetadataCache,
    covers: CoverArtCache,
    client: &'a dyn ReleaseCatalogClient,
    diagnostics: &'a dyn DiagnosticsSink,
    gallery: GalleryRenderer,
    force_refresh: bool,
    show_progress: bool,
}

impl<'a> Pipeline<'a> {
    /// Pipeline using `cache_dir` for both caches.
    pub fn new(
        cache_dir: impl Into<PathBuf>,
        client: &'a dyn ReleaseCatalogClient,
        diagnostics: &'a dyn DiagnosticsSink,
    ) -> Self {
        let cache_dir = cache_dir.into();
        Self {
            metadata: MetadataCache::with_dir(cache_dir.clone()),
            covers: CoverArtCache::with_dir(cache_dir),
            client,
            diagnostics,
            gallery: GalleryRenderer::default(),
            force_refresh: false,
            show_progress: false,
        }
    }

    /// Refetch every release regardless of cached units.
    #[must_use]
    pub fn force_refresh(mut self, force_refresh: bool) -> Self {
        self.force_refresh = force_refresh;
        self
    }

    /// Draw a progress bar while resolving.
    #[must_use]
    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Prefix for `<img src>` in gallery output.
    #[must_use]
    pub fn cover_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.gallery = GalleryRenderer::new(prefix);
        self
    }

    /// Resolve each request to its cached record, fetching what is missing.
    ///
    /// Both the metadata unit and the cover image are ensured for every
    /// release before the next one is looked at.
    ///
    /// # Errors
    ///
    /// Stops at the first [`MrgError::RemoteFetch`] or [`MrgError::CacheAccess`].
    pub async fn resolve_all(
        &self,
        requests: &[ReleaseRequest],
    ) -> Result<Vec<ResolvedRelease>, MrgError> {
        let progress = ProgressBar::new(requests.len() as u64, self.show_progress);
        progress.set_prefix("Resolving");

        let mut resolved = Vec::with_capacity(requests.len());

        for request in requests {
            progress.set_message(request.id.clone());

            let record = self
                .metadata
                .get_or_fetch(request, self.force_refresh, self.client, self.diagnostics)
                .await
                .inspect_err(|_| progress.finish_and_clear())?;

            self.covers
                .get_or_fetch(request, self.force_refresh, self.client, self.diagnostics)
                .await
                .inspect_err(|_| progress.finish_and_clear())?;

            resolved.push(ResolvedRelease {
                request: request.clone(),
                record,
            });
            progress.inc(1);
        }

        progress.finish_and_clear();
        Ok(resolved)
    }

    /// Gallery mode: render the cover grid into `template_file`'s
    /// `[CONTENTS]` placeholder and write `output_file`.
    ///
    /// # Errors
    ///
    /// - [`MrgError::InputAccess`] / [`MrgError::MalformedInput`] for the id file
    /// - [`MrgError::OutputAccess`] when the template cannot be read or the
    ///   output cannot be written
    /// - any error from [`Pipeline::resolve_all`]
    pub async fn generate_gallery(
        &self,
        id_file: &Path,
        template_file: &Path,
        output_file: &Path,
    ) -> Result<GenerationReport, MrgError> {
        let requests = load_release_list(id_file).await?;
        self.diagnostics.debug(&format!("Loaded {} releases from ID file", requests.len()));

        // Read before fetching so a bad template path fails fast.
        self.diagnostics.debug("Loading template file");
        let template = tokio::fs::read_to_string(template_file).await.map_err(|source| {
            MrgError::OutputAccess {
                purpose: "template file".to_string(),
                path: template_file.to_path_buf(),
                source,
            }
        })?;

        if !has_placeholder(&template) {
            self.diagnostics.warn(&format!(
                "Template {} has no [CONTENTS] placeholder; output will be the template unchanged",
                template_file.display()
            ));
        }

        let releases = self.resolve_all(&requests).await?;

        self.diagnostics.debug("Building output HTML");
        let fragment = self.gallery.render(&releases);

        self.diagnostics.debug("Substituting contents in template");
        let page = compose(&template, &fragment);

        self.write_output(output_file, &page)?;
        Ok(GenerationReport {
            releases: releases.len(),
            output: output_file.to_path_buf(),
        })
    }

    /// CV mode: render the year-grouped "MUSIC" section to `output_file`.
    ///
    /// # Errors
    ///
    /// As [`Pipeline::generate_gallery`], minus the template.
    pub async fn generate_cv(
        &self,
        id_file: &Path,
        output_file: &Path,
    ) -> Result<GenerationReport, MrgError> {
        let requests = load_release_list(id_file).await?;
        self.diagnostics.debug(&format!("Loaded {} releases from ID file", requests.len()));

        let releases = self.resolve_all(&requests).await?;

        self.diagnostics.debug("Building output HTML");
        let section = ChronologicalRenderer::new().render(&releases);

        self.write_output(output_file, &section)?;
        Ok(GenerationReport {
            releases: releases.len(),
            output: output_file.to_path_buf(),
        })
    }

    fn write_output(&self, output_file: &Path, content: &str) -> Result<(), MrgError> {
        self.diagnostics.debug(&format!("Writing output to {}", output_file.display()));
        safe_write(output_file, content).map_err(|source| MrgError::OutputAccess {
            purpose: "output file".to_string(),
            path: output_file.to_path_buf(),
            source,
        })
    }
}
