//! Shared data models for MRG operations
//!
//! These types flow through every stage of the pipeline: the input parser
//! produces [`ReleaseRequest`]s, the caches produce [`ReleaseRecord`]s, and the
//! renderers consume [`ResolvedRelease`] pairs.

use std::fmt;
use std::str::FromStr;

/// Whether a release is an original work or a remix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseKind {
    /// An original release
    Original,
    /// A remix; rendered with a ` (remix)` suffix
    Remix,
}

impl ReleaseKind {
    /// The literal form used in id files and cache records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Remix => "remix",
        }
    }

    /// Suffix appended to the display title.
    #[must_use]
    pub const fn title_suffix(self) -> &'static str {
        match self {
            Self::Original => "",
            Self::Remix => " (remix)",
        }
    }
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(Self::Original),
            "remix" => Ok(Self::Remix),
            other => Err(format!("unknown release kind '{other}' (expected 'original' or 'remix')")),
        }
    }
}

/// One line of the id file: `identifier:kind:url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    /// Opaque catalog identifier (a MusicBrainz release MBID)
    pub id: String,
    /// Original or remix
    pub kind: ReleaseKind,
    /// Link target without scheme, e.g. `musicbrainz.org/release/...`
    pub source_url: String,
}

impl ReleaseRequest {
    /// Create a new request.
    pub fn new(id: impl Into<String>, kind: ReleaseKind, source_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            source_url: source_url.into(),
        }
    }
}

/// Cached metadata for a single release.
///
/// The record keeps the `kind` and `source_url` that were current when it was
/// fetched; rendering reads them from here, so editing the id file only takes
/// effect after a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRecord {
    /// Name of the first credited artist
    pub artist: String,
    /// Release title
    pub title: String,
    /// Release date, `YYYY`, `YYYY-MM` or `YYYY-MM-DD`; may be empty
    pub release_date: String,
    /// First label name, empty when the release has no label info
    pub label: String,
    /// First catalog number, empty when absent
    pub catalog_number: String,
    /// Original or remix
    pub kind: ReleaseKind,
    /// Link target without scheme
    pub source_url: String,
}

impl ReleaseRecord {
    /// The leading year component of the release date.
    ///
    /// ```
    /// # use mrg::models::{ReleaseKind, ReleaseRecord};
    /// let record = ReleaseRecord {
    ///     artist: "A".into(),
    ///     title: "T".into(),
    ///     release_date: "2020-05-01".into(),
    ///     label: String::new(),
    ///     catalog_number: String::new(),
    ///     kind: ReleaseKind::Original,
    ///     source_url: "example.com/a".into(),
    /// };
    /// assert_eq!(record.year(), "2020");
    /// ```
    #[must_use]
    pub fn year(&self) -> &str {
        self.release_date.split('-').next().unwrap_or_default()
    }

    /// `"{artist} - {title}"`, used for link text and alt text.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }

    /// Whether the release carries a label name.
    #[must_use]
    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }
}

/// Metadata returned by the catalog before it is bound to a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseMetadata {
    /// Name of the first credited artist
    pub artist: String,
    /// Release title
    pub title: String,
    /// Release date, possibly empty
    pub release_date: String,
    /// First label name or empty
    pub label: String,
    /// First catalog number or empty
    pub catalog_number: String,
}

impl ReleaseMetadata {
    /// Bind catalog metadata to the request it was fetched for.
    #[must_use]
    pub fn into_record(self, request: &ReleaseRequest) -> ReleaseRecord {
        ReleaseRecord {
            artist: self.artist,
            title: self.title,
            release_date: self.release_date,
            label: self.label,
            catalog_number: self.catalog_number,
            kind: request.kind,
            source_url: request.source_url.clone(),
        }
    }
}

/// A request paired with its cached record, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelease {
    /// The id file entry
    pub request: ReleaseRequest,
    /// The cached metadata
    pub record: ReleaseRecord,
}
