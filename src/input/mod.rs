//! Id file parsing.
//!
//! The id file lists one release per line as `identifier:kind:url`, where
//! `kind` is `original` or `remix` and no field contains a colon:
//!
//! ```text
//! 3ba21ea2-3ff4-41b6-991e-6bd4d26ab223:remix:musicbrainz.org/release/3ba21ea2-3ff4-41b6-991e-6bd4d26ab223
//! d6c0d742-e4a3-4b1c-b9be-abf5d703adf9:original:www.junodownload.com/products/course-correction-ep/3775354-02/
//! ```
//!
//! Identifiers name cache files and catalog URLs, so they may not contain
//! `/`, `\`, `?`, `#` or `..`.
//!
//! Parsing is all-or-nothing. Blank lines (including a trailing newline at
//! the end of the file) are skipped.

use crate::core::MrgError;
use crate::models::{ReleaseKind, ReleaseRequest};
use std::path::Path;

const FIELD_SEPARATOR: char = ':';
const FIELD_COUNT: usize = 3;

/// Characters that would let an identifier leave the cache directory or
/// change the shape of a catalog request URL.
const FORBIDDEN_ID_CHARS: [char; 4] = ['/', '\\', '?', '#'];

/// Parse the full contents of an id file.
///
/// # Errors
///
/// Returns [`MrgError::MalformedInput`] for the first line that does not have
/// exactly three fields, has an empty identifier, or names an unknown kind.
pub fn parse_release_list(content: &str) -> Result<Vec<ReleaseRequest>, MrgError> {
    let mut requests = Vec::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        requests.push(parse_line(index + 1, line)?);
    }

    Ok(requests)
}

fn parse_line(line_number: usize, line: &str) -> Result<ReleaseRequest, MrgError> {
    let malformed = |reason: String| MrgError::MalformedInput {
        line_number,
        line: line.to_string(),
        reason,
    };

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(malformed(format!(
            "expected {FIELD_COUNT} colon-delimited fields, found {}",
            fields.len()
        )));
    }

    let id = fields[0].trim();
    if id.is_empty() {
        return Err(malformed("identifier is empty".to_string()));
    }
    if let Some(c) = id.chars().find(|c| FORBIDDEN_ID_CHARS.contains(c)) {
        return Err(malformed(format!("identifier contains '{c}'")));
    }
    if id.contains("..") {
        return Err(malformed("identifier contains '..'".to_string()));
    }

    let kind: ReleaseKind = fields[1].trim().parse().map_err(malformed)?;

    Ok(ReleaseRequest::new(id, kind, fields[2].trim()))
}

/// Read and parse an id file.
///
/// # Errors
///
/// Returns [`MrgError::InputAccess`] if the file cannot be read, or any error
/// from [`parse_release_list`].
pub async fn load_release_list(path: &Path) -> Result<Vec<ReleaseRequest>, MrgError> {
    tracing::debug!("Loading ID file {}", path.display());

    let content =
        tokio::fs::read_to_string(path).await.map_err(|source| MrgError::InputAccess {
            path: path.to_path_buf(),
            source,
        })?;

    parse_release_list(&content)
}
