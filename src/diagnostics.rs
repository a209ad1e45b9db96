//! Levelled diagnostics passed explicitly to pipeline components.
//!
//! Components never reach for a process-wide logger: they receive a
//! `&dyn DiagnosticsSink` and report through it. The binary uses
//! [`TracingSink`], which forwards every message to `tracing`; tests use
//! [`MemorySink`] to assert on what was reported.

use std::sync::Mutex;
use tracing::Level;

/// Destination for diagnostics emitted while generating a page.
pub trait DiagnosticsSink: Send + Sync {
    /// Record a message at the given level.
    fn emit(&self, level: Level, message: &str);

    /// Record an error-level message.
    fn error(&self, message: &str) {
        self.emit(Level::ERROR, message);
    }

    /// Record a warning.
    fn warn(&self, message: &str) {
        self.emit(Level::WARN, message);
    }

    /// Record an informational message.
    fn info(&self, message: &str) {
        self.emit(Level::INFO, message);
    }

    /// Record a debug message.
    fn debug(&self, message: &str) {
        self.emit(Level::DEBUG, message);
    }
}

/// Forwards diagnostics to the `tracing` subscriber installed by the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn emit(&self, level: Level, message: &str) {
        match level {
            Level::ERROR => tracing::error!(target: "mrg", "{message}"),
            Level::WARN => tracing::warn!(target: "mrg", "{message}"),
            Level::INFO => tracing::info!(target: "mrg", "{message}"),
            Level::DEBUG => tracing::debug!(target: "mrg", "{message}"),
            _ => tracing::trace!(target: "mrg", "{message}"),
        }
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    #[must_use]
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Messages recorded at exactly `level`.
    #[must_use]
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    /// Whether any recorded message contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.entries().iter().any(|(_, m)| m.contains(needle))
    }
}

impl DiagnosticsSink for MemorySink {
    fn emit(&self, level: Level, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level, message.to_string()));
        }
    }
}
