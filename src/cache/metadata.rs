use super::{read_unit, record, remove_unit, write_unit};
use crate::catalog::ReleaseCatalogClient;
use crate::constants::METADATA_SUFFIX;
use crate::core::{AssetKind, MrgError};
use crate::diagnostics::DiagnosticsSink;
use crate::models::{ReleaseRecord, ReleaseRequest};
use std::path::PathBuf;

/// Release metadata cache, one `{id}.data` unit per release.
#[derive(Debug, Clone)]
pub struct MetadataCache {
    dir: PathBuf,
}

impl MetadataCache {
    /// Cache rooted at `dir`. The directory is created on first write.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Location of the unit for `id`.
    #[must_use]
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}{METADATA_SUFFIX}"))
    }

    /// Whether a unit exists for `id` (it may still fail to decode).
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.path_for(id).is_file()
    }

    /// Read and decode the unit for `id` without touching the network.
    ///
    /// # Errors
    ///
    /// Returns [`MrgError::CacheAccess`] when the unit exists but cannot be read.
    pub async fn load(&self, id: &str) -> Result<Option<ReleaseRecord>, MrgError> {
        let path = self.path_for(id);
        let Some(bytes) = read_unit(&path, id, AssetKind::Metadata).await? else {
            return Ok(None);
        };
        Ok(record::decode(&String::from_utf8_lossy(&bytes)))
    }

    /// Return the cached record for `request`, fetching it when absent,
    /// undecodable, or when `force_refresh` is set.
    ///
    /// # Errors
    ///
    /// - [`MrgError::RemoteFetch`] when the catalog lookup fails
    /// - [`MrgError::CacheAccess`] when the unit cannot be read or written
    pub async fn get_or_fetch(
        &self,
        request: &ReleaseRequest,
        force_refresh: bool,
        client: &dyn ReleaseCatalogClient,
        diagnostics: &dyn DiagnosticsSink,
    ) -> Result<ReleaseRecord, MrgError> {
        let id = request.id.as_str();

        if !force_refresh {
            let path = self.path_for(id);
            if let Some(bytes) = read_unit(&path, id, AssetKind::Metadata).await? {
                match record::decode(&String::from_utf8_lossy(&bytes)) {
                    Some(record) => {
                        diagnostics.debug(&format!("Using pre-fetched data for {id}"));
                        return Ok(record);
                    }
                    None => diagnostics.warn(&format!(
                        "Cached metadata for {id} at {} is incomplete; fetching again",
                        path.display()
                    )),
                }
            }
        }

        diagnostics.info(&format!("Fetching metadata for {id}"));

        let metadata = client.fetch_release(id).await.map_err(|source| {
            diagnostics.error(&format!("Error fetching metadata for {id}: {source}"));
            MrgError::RemoteFetch {
                id: id.to_string(),
                asset: AssetKind::Metadata,
                source,
            }
        })?;

        let record = metadata.into_record(request);
        write_unit(&self.path_for(id), id, AssetKind::Metadata, record::encode(&record).as_bytes())?;

        diagnostics.debug(&format!("Cached metadata for {id}: {}", record.display_name()));

        Ok(record)
    }

    /// Delete the unit for `id`. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns [`MrgError::CacheAccess`] if the unit exists but cannot be removed.
    pub async fn remove(&self, id: &str) -> Result<bool, MrgError> {
        remove_unit(&self.path_for(id), id, AssetKind::Metadata).await
    }
}
