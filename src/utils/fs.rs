//! File system helpers.
//!
//! Cache units and the generated page are written with [`atomic_write`], so a
//! reader (or a web server picking up the page) never observes a partial file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// 1. Write content to a sibling temporary file
/// 2. Sync the temporary file to disk
/// 3. Rename it over the target path
///
/// Parent directories are created when missing. On failure the temporary
/// file is removed and the target is left untouched.
///
/// # Errors
///
/// Returns the underlying I/O error from any of the steps above.
///
/// # Examples
///
/// ```rust,no_run
/// use mrg::utils::fs::atomic_write;
/// use std::path::Path;
///
/// # fn example() -> std::io::Result<()> {
/// atomic_write(Path::new("music.html"), b"<table></table>")?;
/// # Ok(())
/// # }
/// ```
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp_path = temp_path_for(path);

    let result = (|| {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(content)?;
        file.sync_all()?;
        drop(file);
        fs::rename(&temp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

/// Convenience wrapper around [`atomic_write`] for text.
///
/// # Errors
///
/// See [`atomic_write`].
pub fn safe_write(path: &Path, content: &str) -> io::Result<()> {
    atomic_write(path, content.as_bytes())
}

// Appends rather than replaces the extension: cover art units have none, and
// `X.data` must not collide with a cover named `X`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_file_and_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("out.html");

        atomic_write(&path, b"hello").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"hello");
        assert!(!temp.path().join("nested").join("out.html.tmp").exists());
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.html");

        safe_write(&path, "old content that is longer").unwrap();
        safe_write(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_temp_path_keeps_extension() {
        assert_eq!(temp_path_for(Path::new("cache/X.data")), PathBuf::from("cache/X.data.tmp"));
        assert_eq!(temp_path_for(Path::new("cache/X")), PathBuf::from("cache/X.tmp"));
    }

    #[test]
    fn test_atomic_write_over_directory_fails_and_cleans_temp() {
        let temp = TempDir::new().unwrap();
        // A directory at the target path cannot be replaced by a file.
        let path = temp.path().join("taken");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("child"), b"x").unwrap();

        assert!(atomic_write(&path, b"data").is_err());
        assert!(!temp.path().join("taken.tmp").exists());
    }
}
