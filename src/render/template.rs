use crate::constants::CONTENTS_PLACEHOLDER;

/// Substitute `fragment` for the first `[CONTENTS]` in `template`.
///
/// Returns the template unchanged when the placeholder is absent. Nothing is
/// escaped: the fragment is already HTML.
///
/// ```
/// use mrg::render::compose;
///
/// assert_eq!(compose("<table>[CONTENTS]</table>", "<tr></tr>"), "<table><tr></tr></table>");
/// assert_eq!(compose("<p>static</p>", "<tr></tr>"), "<p>static</p>");
/// ```
#[must_use]
pub fn compose(template: &str, fragment: &str) -> String {
    template.replacen(CONTENTS_PLACEHOLDER, fragment, 1)
}

/// Whether `template` has somewhere to put the rendered rows.
#[must_use]
pub fn has_placeholder(template: &str) -> bool {
    template.contains(CONTENTS_PLACEHOLDER)
}
