//! HTML rendering
//!
//! Two output modes over the same resolved releases:
//! - [`GalleryRenderer`] - cover grid, two releases per row, substituted into
//!   a page template with [`compose`]
//! - [`ChronologicalRenderer`] - year-grouped list for a CV page
//!
//! Field values are inserted verbatim. Catalog data containing `<` or `&`
//! reaches the page unescaped.

mod chronological;
mod gallery;
mod pairing;
mod template;

pub use chronological::{ChronologicalRenderer, DateMarker};
pub use gallery::GalleryRenderer;
pub use pairing::{BLANK_IMAGE_CELL, BLANK_TEXT_CELL, CellPair, PairingAccumulator, PairingState};
pub use template::{compose, has_placeholder};
