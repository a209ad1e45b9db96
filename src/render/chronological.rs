use crate::models::ResolvedRelease;

const SECTION_OPEN: &str = r#"<div class="section" id="music"><h2 class="sectionheader">MUSIC</h2>"#;
const SECTION_CLOSE: &str = "</div>";

/// Whether an item starts a new year group or continues the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateMarker {
    /// First item of a run with this year; the year is printed
    NewDate(String),
    /// Same year as the item immediately before
    SameDate,
}

/// Renders releases as a flat list grouped by adjacent year, wrapped in a
/// "MUSIC" section for a CV page.
///
/// Input order is kept as-is, so a year that reappears after a different year
/// starts a new group.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronologicalRenderer;

impl ChronologicalRenderer {
    /// Renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Classify each release by comparing its year with the previous item's.
    ///
    /// Comparison starts from an empty year, so a leading release without a
    /// date continues that empty group.
    #[must_use]
    pub fn markers(&self, releases: &[ResolvedRelease]) -> Vec<DateMarker> {
        let mut previous = "";
        releases
            .iter()
            .map(|release| {
                let year = release.record.year();
                if year == previous {
                    DateMarker::SameDate
                } else {
                    previous = year;
                    DateMarker::NewDate(year.to_string())
                }
            })
            .collect()
    }

    /// Link text for one release: name, remix suffix and `(label)`.
    #[must_use]
    pub fn item_contents(&self, release: &ResolvedRelease) -> String {
        let record = &release.record;
        let label = if record.has_label() {
            format!(" ({})", record.label)
        } else {
            String::new()
        };

        format!(
            r#"<a href="https://{}">{}{}{}</a>"#,
            record.source_url,
            record.display_name(),
            record.kind.title_suffix(),
            label
        )
    }

    /// The full section.
    #[must_use]
    pub fn render(&self, releases: &[ResolvedRelease]) -> String {
        let mut output = String::from(SECTION_OPEN);

        for (release, marker) in releases.iter().zip(self.markers(releases)) {
            let contents = self.item_contents(release);
            match marker {
                DateMarker::NewDate(year) => output.push_str(&format!(
                    r#"<p class="anitemnewdate genericitem"><span class="prefix bold">{year}</span><span class="bibitem">{contents}</span></p>"#
                )),
                DateMarker::SameDate => output.push_str(&format!(
                    r#"<p class="anitem genericitem"><span class="prefix bold">&nbsp;</span><span class="bibitem">{contents}</span></p>"#
                )),
            }
        }

        output.push_str(SECTION_CLOSE);
        output
    }
}
