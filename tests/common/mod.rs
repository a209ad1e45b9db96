//! Common test utilities and fixtures for MRG integration tests

// Not every helper is used by every test file
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Catalog endpoint that refuses connections, so an unexpected fetch fails fast.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

pub const TEMPLATE: &str = "<html><body><table>[CONTENTS]</table></body></html>";

/// Cover bytes written into seeded caches.
pub const COVER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

/// An isolated working area: id file, template, cache and config.
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    root: PathBuf,
    cache_dir: PathBuf,
    config_path: PathBuf,
}

impl TestProject {
    /// Project whose config points every catalog request at [`UNREACHABLE_URL`].
    pub fn new() -> Self {
        Self::with_catalog(UNREACHABLE_URL, UNREACHABLE_URL)
    }

    /// Project whose config points at the given catalog roots, with no rate limit.
    pub fn with_catalog(musicbrainz_url: &str, coverart_url: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();
        let cache_dir = root.join("cache");
        let config_path = root.join("config.toml");

        fs::create_dir_all(&cache_dir).unwrap();
        fs::write(
            &config_path,
            format!(
                "musicbrainz_url = \"{musicbrainz_url}\"\n\
                 coverart_url = \"{coverart_url}\"\n\
                 timeout_secs = 5\n\
                 rate_limit_ms = 0\n"
            ),
        )
        .unwrap();

        Self {
            _temp_dir: temp_dir,
            root,
            cache_dir,
            config_path,
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write `ids.txt` with the given content.
    pub fn write_ids(&self, content: &str) -> PathBuf {
        let path = self.path("ids.txt");
        fs::write(&path, content).unwrap();
        path
    }

    /// Write `template.html`.
    pub fn write_template(&self, content: &str) -> PathBuf {
        let path = self.path("template.html");
        fs::write(&path, content).unwrap();
        path
    }

    /// Pre-populate both caches for `id`.
    #[allow(clippy::too_many_arguments)]
    pub fn seed_release(
        &self,
        id: &str,
        artist: &str,
        title: &str,
        date: &str,
        label: &str,
        kind: &str,
        url: &str,
    ) {
        let unit = [artist, title, date, label, "", kind, url].join("\n");
        fs::write(self.cache_dir.join(format!("{id}.data")), unit).unwrap();
        fs::write(self.cache_dir.join(id), COVER).unwrap();
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).unwrap()
    }

    /// `mrg` with this project's config and cache, no progress bars, and no
    /// inherited log filter.
    pub fn mrg(&self) -> Command {
        let mut cmd = Command::cargo_bin("mrg").unwrap();
        cmd.current_dir(&self.root)
            .env_remove("RUST_LOG")
            .env_remove("MRG_CACHE_DIR")
            .env("MRG_NO_PROGRESS", "1")
            .arg("--config")
            .arg(&self.config_path)
            .arg("--cache-dir")
            .arg(&self.cache_dir);
        cmd
    }
}
