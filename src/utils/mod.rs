//! Utilities shared by the cache, pipeline and CLI
//!
//! - [`fs`] - atomic file writes
//! - [`progress`] - progress bar for release resolution

pub mod fs;
pub mod progress;

pub use fs::{atomic_write, safe_write};
pub use progress::ProgressBar;
