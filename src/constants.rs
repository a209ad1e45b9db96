//! Global constants used throughout the MRG codebase.
//!
//! Remote endpoints, cache naming and timing defaults live here so that the
//! configuration layer and the tests agree on the same values.

use std::time::Duration;

/// Placeholder token replaced with rendered HTML in gallery templates.
pub const CONTENTS_PLACEHOLDER: &str = "[CONTENTS]";

/// File suffix for cached metadata records (`{id}.data`).
pub const METADATA_SUFFIX: &str = ".data";

/// Default MusicBrainz web service root (WS/2).
pub const DEFAULT_MUSICBRAINZ_URL: &str = "https://musicbrainz.org/ws/2";

/// Default Cover Art Archive root.
pub const DEFAULT_COVERART_URL: &str = "https://coverartarchive.org";

/// User-Agent sent with every request. MusicBrainz rejects anonymous clients.
pub const DEFAULT_USER_AGENT: &str = concat!("martinevereleases/", env!("CARGO_PKG_VERSION"));

/// Default HTTP timeout for catalog requests (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimum interval between MusicBrainz requests (1 request per second).
pub const DEFAULT_RATE_LIMIT_MS: u64 = 1000;

/// Environment variable overriding the cache directory.
pub const CACHE_DIR_ENV: &str = "MRG_CACHE_DIR";

/// Application banner logged at debug level on startup.
pub const APP_NAME: &str = concat!("Music Release Generator ", env!("CARGO_PKG_VERSION"));
