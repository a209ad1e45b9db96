//! Text codec for metadata cache units.
//!
//! A unit is seven newline-separated fields, in order:
//!
//! ```text
//! artist
//! title
//! release date
//! label
//! catalog number
//! kind
//! source url
//! ```
//!
//! Empty fields are kept as empty lines. No trailing newline is written; one is
//! tolerated on read.

use crate::models::ReleaseRecord;

const FIELD_COUNT: usize = 7;

/// Serialize a record to its cache unit text.
#[must_use]
pub fn encode(record: &ReleaseRecord) -> String {
    [
        record.artist.as_str(),
        record.title.as_str(),
        record.release_date.as_str(),
        record.label.as_str(),
        record.catalog_number.as_str(),
        record.kind.as_str(),
        record.source_url.as_str(),
    ]
    .join("\n")
}

/// Parse cache unit text back into a record.
///
/// Returns `None` when the text has fewer than seven fields or the kind field
/// is not `original`/`remix`. Extra trailing lines are ignored.
#[must_use]
pub fn decode(text: &str) -> Option<ReleaseRecord> {
    // A trailing terminator yields an eighth empty field, which is ignored.
    let fields: Vec<&str> = text.split('\n').map(|f| f.trim_end_matches('\r')).collect();
    if fields.len() < FIELD_COUNT {
        return None;
    }

    Some(ReleaseRecord {
        artist: fields[0].to_string(),
        title: fields[1].to_string(),
        release_date: fields[2].to_string(),
        label: fields[3].to_string(),
        catalog_number: fields[4].to_string(),
        kind: fields[5].parse().ok()?,
        source_url: fields[6].to_string(),
    })
}
