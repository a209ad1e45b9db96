//! Configuration management for MRG
//!
//! - [`GlobalConfig`] - optional user-wide settings in `~/.mrg/config.toml`
//! - [`resolve_cache_dir`] - where cache units (and, by default, covers
//!   referenced by the page) are kept
//!
//! # Cache Directory Priority
//!
//! 1. `--cache-dir` on the command line
//! 2. `MRG_CACHE_DIR` environment variable
//! 3. `cache_dir` in the config file
//! 4. The current directory

mod global;

pub use global::GlobalConfig;

use crate::constants::CACHE_DIR_ENV;
use std::path::PathBuf;

/// Pick the cache directory by the priority above.
#[must_use]
pub fn resolve_cache_dir(cli_dir: Option<PathBuf>, config: &GlobalConfig) -> PathBuf {
    if let Some(dir) = cli_dir {
        return dir;
    }

    if let Some(dir) = std::env::var_os(CACHE_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    config.cache_dir.clone().unwrap_or_else(|| PathBuf::from("."))
}
