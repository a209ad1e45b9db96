//! Core types for MRG
//!
//! Error handling lives here: the typed [`MrgError`] taxonomy used by every
//! pipeline stage and the [`ErrorContext`] shown to CLI users.

pub mod error;

pub use error::{AssetKind, ErrorContext, MrgError, user_friendly_error};
