//! Two-per-row table layout.
//!
//! Each release contributes an image cell and a text cell. Releases are laid
//! out in pairs: two image cells in one `<tr>`, the matching text cells in the
//! next. A row is only emitted once its second release arrives; a lone
//! trailing release is completed with an empty filler pair by
//! [`PairingAccumulator::finish`].

/// Filler image cell for an odd trailing release.
pub const BLANK_IMAGE_CELL: &str = "<td></td>";
/// Filler text cell for an odd trailing release.
pub const BLANK_TEXT_CELL: &str = r#"<td style="padding-bottom: 15px;"></td>"#;

/// One release's rendered cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellPair {
    /// `<td>` holding the cover image
    pub image: String,
    /// `<td>` holding the link and label/year line
    pub text: String,
}

impl CellPair {
    /// Pair of cells.
    pub fn new(image: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            text: text.into(),
        }
    }

    /// The filler pair used to complete a half row.
    #[must_use]
    pub fn blank() -> Self {
        Self::new(BLANK_IMAGE_CELL, BLANK_TEXT_CELL)
    }
}

/// Accumulator state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PairingState {
    /// Nothing buffered
    #[default]
    Empty,
    /// One release waiting for a partner
    OnePending(CellPair),
    /// A complete row was just emitted; behaves like `Empty`
    EmitReady,
}

/// Buffers cells and emits `<tr>` pairs two releases at a time.
///
/// ```
/// use mrg::render::PairingAccumulator;
///
/// let mut acc = PairingAccumulator::new();
/// assert_eq!(acc.push("<td>i0</td>", "<td>t0</td>"), None);
/// assert_eq!(
///     acc.push("<td>i1</td>", "<td>t1</td>").as_deref(),
///     Some("<tr><td>i0</td><td>i1</td></tr><tr><td>t0</td><td>t1</td></tr>")
/// );
/// assert_eq!(acc.finish(), None);
/// ```
#[derive(Debug, Default)]
pub struct PairingAccumulator {
    state: PairingState,
}

impl PairingAccumulator {
    /// Empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &PairingState {
        &self.state
    }

    /// Add one release. Returns the two rows when this completes a pair.
    pub fn push(
        &mut self,
        image_cell: impl Into<String>,
        text_cell: impl Into<String>,
    ) -> Option<String> {
        let cells = CellPair::new(image_cell, text_cell);
        match std::mem::take(&mut self.state) {
            PairingState::Empty | PairingState::EmitReady => {
                self.state = PairingState::OnePending(cells);
                None
            }
            PairingState::OnePending(first) => {
                tracing::trace!("Row complete, emitting");
                self.state = PairingState::EmitReady;
                Some(emit_rows(&first, &cells))
            }
        }
    }

    /// Flush a lone pending release, padded with [`CellPair::blank`].
    pub fn finish(&mut self) -> Option<String> {
        match std::mem::take(&mut self.state) {
            PairingState::OnePending(first) => {
                tracing::trace!("Building last blank entry");
                Some(emit_rows(&first, &CellPair::blank()))
            }
            PairingState::Empty | PairingState::EmitReady => None,
        }
    }
}

fn emit_rows(first: &CellPair, second: &CellPair) -> String {
    format!(
        "<tr>{}{}</tr><tr>{}{}</tr>",
        first.image, second.image, first.text, second.text
    )
}
