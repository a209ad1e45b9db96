//! Error handling for MRG
//!
//! Every failure in the generation pipeline is terminal for the run: the
//! output page is public-facing, and a page that silently drops releases is
//! worse than no page at all. This module therefore has two jobs:
//! 1. **Strongly-typed errors** ([`MrgError`]) naming the failing identifier
//!    or file, so the caller can abort with a precise diagnostic
//! 2. **User-friendly messages** ([`ErrorContext`]) with suggestions for the CLI
//!
//! # Examples
//!
//! ```rust,no_run
//! use mrg::core::{MrgError, user_friendly_error};
//!
//! let error = MrgError::MalformedInput {
//!     line_number: 3,
//!     line: "abc:remix".to_string(),
//!     reason: "expected 3 colon-delimited fields, found 2".to_string(),
//! };
//!
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use crate::catalog::CatalogError;
use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which cached asset a remote fetch was resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Release metadata (artist, title, date, label, catalog number)
    Metadata,
    /// Front cover image bytes
    CoverArt,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metadata => write!(f, "metadata"),
            Self::CoverArt => write!(f, "cover art"),
        }
    }
}

/// The main error type for MRG operations
///
/// # Error Categories
///
/// - [`InputAccess`] - id file missing or unreadable
/// - [`MalformedInput`] - id file line does not have the `id:kind:url` shape
/// - [`RemoteFetch`] - the catalog could not resolve metadata or cover art
/// - [`CacheAccess`] - a cache unit could not be read or written
/// - [`OutputAccess`] - the template could not be read or the output written
/// - [`Config`] - the configuration file is invalid
///
/// [`InputAccess`]: MrgError::InputAccess
/// [`MalformedInput`]: MrgError::MalformedInput
/// [`RemoteFetch`]: MrgError::RemoteFetch
/// [`CacheAccess`]: MrgError::CacheAccess
/// [`OutputAccess`]: MrgError::OutputAccess
/// [`Config`]: MrgError::Config
#[derive(Error, Debug)]
pub enum MrgError {
    /// The id file could not be read
    #[error("Cannot open ID file: {}", path.display())]
    InputAccess {
        /// Path of the id file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A line of the id file is not `identifier:kind:url`
    ///
    /// Parsing is all-or-nothing: no releases are returned when any line is
    /// malformed.
    #[error("ID line {line_number} is malformed: '{line}' ({reason})")]
    MalformedInput {
        /// 1-based line number in the id file
        line_number: usize,
        /// The offending line, without its terminator
        line: String,
        /// What is wrong with it
        reason: String,
    },

    /// The remote catalog failed to resolve a release
    #[error("Error fetching {asset} for {id}")]
    RemoteFetch {
        /// Release identifier being resolved
        id: String,
        /// Metadata or cover art
        asset: AssetKind,
        /// The catalog failure
        #[source]
        source: CatalogError,
    },

    /// A cache unit could not be read or written
    #[error("Cannot access cached {asset} for {id} at {}", path.display())]
    CacheAccess {
        /// Release identifier
        id: String,
        /// Metadata or cover art
        asset: AssetKind,
        /// Path of the cache unit
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The template could not be read or the output could not be written
    #[error("Cannot open {purpose}: {}", path.display())]
    OutputAccess {
        /// `template file` or `output file`
        purpose: String,
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },
}

/// Error wrapper with user-friendly details and a suggestion
///
/// Built by [`user_friendly_error`] and printed by the binary before exiting.
#[derive(Debug)]
pub struct ErrorContext {
    /// The error message including its cause chain
    pub message: String,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no suggestion or details.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.message);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Render an error and its cause chain as a single message.
fn message_with_chain(error: &anyhow::Error) -> String {
    let mut message = error.to_string();

    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    message
}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes [`MrgError`] anywhere in the chain, bare I/O errors and TOML
/// errors; everything else is reported with its cause chain only.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let message = message_with_chain(&error);

    if let Some(mrg_error) = error.chain().find_map(|e| e.downcast_ref::<MrgError>()) {
        return create_error_context(mrg_error, message);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(message)
                    .with_suggestion("Check file ownership and permissions")
                    .with_details("MRG doesn't have permission to read or write a file");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(message)
                    .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    if error.downcast_ref::<toml::de::Error>().is_some() {
        return ErrorContext::new(message)
            .with_suggestion("Check the TOML syntax in your MRG config file")
            .with_details("See `mrg --help` for the --config option and default location");
    }

    ErrorContext::new(message)
}

/// Map each [`MrgError`] variant to a tailored suggestion.
fn create_error_context(error: &MrgError, message: String) -> ErrorContext {
    let ctx = ErrorContext::new(message);
    match error {
        MrgError::InputAccess { path, .. } => ctx
            .with_suggestion(format!("Check that {} exists and is readable", path.display())),

        MrgError::MalformedInput { line_number, .. } => ctx
            .with_suggestion(format!(
                "Fix line {line_number} so it reads 'identifier:kind:url' where kind is 'original' or 'remix'"
            ))
            .with_details("No field may contain a colon. No output was written"),

        MrgError::RemoteFetch { source, .. } => {
            let ctx = ctx.with_details(
                "The run was aborted before writing output so the page is never published with missing releases",
            );
            match source {
                CatalogError::NotFound(_) => ctx.with_suggestion(
                    "Check that the identifier is a MusicBrainz release MBID and that the release has front cover art",
                ),
                CatalogError::RateLimited => ctx.with_suggestion(
                    "MusicBrainz is throttling requests; wait a minute and run again, or raise rate_limit_ms in the config",
                ),
                _ => ctx.with_suggestion("Check your internet connection and try again"),
            }
        }

        MrgError::CacheAccess { path, .. } => ctx.with_suggestion(format!(
            "Check permissions on the cache directory containing {}",
            path.display()
        )),

        MrgError::OutputAccess { path, .. } => ctx.with_suggestion(format!(
            "Check that {} exists (for templates) or that its directory is writable (for output)",
            path.display()
        )),

        MrgError::Config { .. } => ctx.with_suggestion(
            "Fix the config file or pass a different one with --config",
        ),
    }
}
