use super::{read_unit, remove_unit, write_unit};
use crate::catalog::ReleaseCatalogClient;
use crate::core::{AssetKind, MrgError};
use crate::diagnostics::DiagnosticsSink;
use crate::models::ReleaseRequest;
use std::path::PathBuf;

/// Front cover cache. Each image is stored as a bare file named after the id.
#[derive(Debug, Clone)]
pub struct CoverArtCache {
    dir: PathBuf,
}

impl CoverArtCache {
    /// Cache rooted at `dir`. The directory is created on first write.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Location of the image for `id`.
    #[must_use]
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(id)
    }

    /// Whether an image exists for `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.path_for(id).is_file()
    }

    /// Return the cached cover for `request`, downloading it when absent or
    /// when `force_refresh` is set.
    ///
    /// # Errors
    ///
    /// - [`MrgError::RemoteFetch`] when the catalog has no cover or is unreachable
    /// - [`MrgError::CacheAccess`] when the image cannot be read or written
    pub async fn get_or_fetch(
        &self,
        request: &ReleaseRequest,
        force_refresh: bool,
        client: &dyn ReleaseCatalogClient,
        diagnostics: &dyn DiagnosticsSink,
    ) -> Result<Vec<u8>, MrgError> {
        let id = request.id.as_str();
        let path = self.path_for(id);

        if !force_refresh {
            if let Some(bytes) = read_unit(&path, id, AssetKind::CoverArt).await? {
                diagnostics.debug(&format!("Using pre-fetched image for {id}"));
                return Ok(bytes);
            }
        }

        diagnostics.info(&format!("Fetching cover art for {id}"));

        let bytes = client.fetch_cover_art(id).await.map_err(|source| {
            diagnostics.error(&format!("Error fetching cover art for {id}: {source}"));
            MrgError::RemoteFetch {
                id: id.to_string(),
                asset: AssetKind::CoverArt,
                source,
            }
        })?;

        write_unit(&path, id, AssetKind::CoverArt, &bytes)?;
        diagnostics.debug(&format!("Cached {} bytes of cover art for {id}", bytes.len()));

        Ok(bytes)
    }

    /// Delete the image for `id`. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns [`MrgError::CacheAccess`] if the image exists but cannot be removed.
    pub async fn remove(&self, id: &str) -> Result<bool, MrgError> {
        remove_unit(&self.path_for(id), id, AssetKind::CoverArt).await
    }
}
