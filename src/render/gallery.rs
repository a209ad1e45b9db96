use super::pairing::PairingAccumulator;
use crate::models::ResolvedRelease;

/// Renders releases as a two-column table of covers with captions.
///
/// The output is a sequence of `<tr>` rows with no enclosing `<table>`; the
/// template is expected to provide it around `[CONTENTS]`.
#[derive(Debug, Clone, Default)]
pub struct GalleryRenderer {
    cover_prefix: String,
}

impl GalleryRenderer {
    /// Renderer whose `<img src>` is `{cover_prefix}{id}`.
    pub fn new(cover_prefix: impl Into<String>) -> Self {
        Self {
            cover_prefix: cover_prefix.into(),
        }
    }

    /// The cover image cell for one release.
    #[must_use]
    pub fn image_cell(&self, release: &ResolvedRelease) -> String {
        let record = &release.record;
        format!(
            r#"<td><a href="https://{url}"><img src="{prefix}{id}" alt="{name}" style="width:150px;max-width:150px;"></img></a></td>"#,
            url = record.source_url,
            prefix = self.cover_prefix,
            id = release.request.id,
            name = record.display_name(),
        )
    }

    /// The caption cell: link text plus `(label, year)`.
    #[must_use]
    pub fn text_cell(&self, release: &ResolvedRelease) -> String {
        let record = &release.record;
        format!(
            r#"<td style="padding-bottom: 15px;"><a href="https://{url}">{name}{remix}</a><br/>({label}{sep}{year})</td>"#,
            url = record.source_url,
            name = record.display_name(),
            remix = record.kind.title_suffix(),
            label = record.label,
            sep = if record.has_label() { ", " } else { "" },
            year = record.year(),
        )
    }

    /// Lay out all releases two per row, in order.
    #[must_use]
    pub fn render(&self, releases: &[ResolvedRelease]) -> String {
        let mut accumulator = PairingAccumulator::new();
        let mut output = String::new();

        for release in releases {
            if let Some(rows) = accumulator.push(self.image_cell(release), self.text_cell(release)) {
                output.push_str(&rows);
            }
        }

        if let Some(rows) = accumulator.finish() {
            output.push_str(&rows);
        }

        output
    }
}
