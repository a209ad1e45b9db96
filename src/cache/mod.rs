//! On-disk release caches
//!
//! Two independent caches share one directory, one file per release id:
//!
//! ```text
//! {cache_dir}/
//! ├── {id}.data   # metadata unit, see [`record`]
//! └── {id}        # raw front cover image
//! ```
//!
//! The bare cover file sits next to the generated page so `<img src="{id}">`
//! resolves without further configuration. A miss in one cache does not imply
//! a miss in the other.
//!
//! Both caches follow the same policy in `get_or_fetch`: return the local unit
//! unless it is absent or a refresh is forced, otherwise fetch from the
//! catalog, persist atomically, and return the fresh value.

mod cover_art;
mod metadata;
pub mod record;

pub use cover_art::CoverArtCache;
pub use metadata::MetadataCache;

use crate::core::{AssetKind, MrgError};
use std::io;
use std::path::Path;

/// Read a cache unit, mapping "not found" to `None`.
async fn read_unit(
    path: &Path,
    id: &str,
    asset: AssetKind,
) -> Result<Option<Vec<u8>>, MrgError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(MrgError::CacheAccess {
            id: id.to_string(),
            asset,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write_unit(path: &Path, id: &str, asset: AssetKind, bytes: &[u8]) -> Result<(), MrgError> {
    crate::utils::atomic_write(path, bytes).map_err(|source| MrgError::CacheAccess {
        id: id.to_string(),
        asset,
        path: path.to_path_buf(),
        source,
    })
}

/// Delete a cache unit; `Ok(false)` when it was not there.
async fn remove_unit(path: &Path, id: &str, asset: AssetKind) -> Result<bool, MrgError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(MrgError::CacheAccess {
            id: id.to_string(),
            asset,
            path: path.to_path_buf(),
            source,
        }),
    }
}
