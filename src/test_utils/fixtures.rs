//! Sample data for tests.

use crate::models::{ReleaseKind, ReleaseMetadata, ReleaseRecord, ReleaseRequest, ResolvedRelease};

/// A few bytes that look like the start of a JPEG.
pub const COVER_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

/// Catalog metadata with an empty catalog number.
#[must_use]
pub fn metadata(artist: &str, title: &str, date: &str, label: &str) -> ReleaseMetadata {
    ReleaseMetadata {
        artist: artist.to_string(),
        title: title.to_string(),
        release_date: date.to_string(),
        label: label.to_string(),
        catalog_number: String::new(),
    }
}

/// A resolved release whose record mirrors the request's kind and url.
#[must_use]
pub fn resolved(
    id: &str,
    kind: ReleaseKind,
    url: &str,
    artist: &str,
    title: &str,
    date: &str,
    label: &str,
) -> ResolvedRelease {
    let request = ReleaseRequest::new(id, kind, url);
    let record: ReleaseRecord = metadata(artist, title, date, label).into_record(&request);
    ResolvedRelease { request, record }
}

/// `n` original releases `R0..Rn` dated 2020, no label.
#[must_use]
pub fn resolved_many(n: usize) -> Vec<ResolvedRelease> {
    (0..n)
        .map(|i| {
            resolved(
                &format!("R{i}"),
                ReleaseKind::Original,
                &format!("example.com/{i}"),
                "A",
                &format!("T{i}"),
                "2020",
                "",
            )
        })
        .collect()
}

/// Id file text for the given `(id, kind, url)` triples.
#[must_use]
pub fn id_file(entries: &[(&str, &str, &str)]) -> String {
    entries.iter().map(|(id, kind, url)| format!("{id}:{kind}:{url}\n")).collect()
}
