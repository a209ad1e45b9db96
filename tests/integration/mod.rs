//! Integration test suite for MRG
//!
//! End-to-end tests that run the `mrg` binary against seeded caches and, in
//! `remote`, a local mock of MusicBrainz and the Cover Art Archive. No test
//! touches the real network.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! - **gallery**: `mrg gen` output and template substitution
//! - **cv**: `mrg cv` output
//! - **cache_cmd**: `mrg cache status|clean`
//! - **errors**: failure modes and exit status
//! - **remote**: fetching, caching and `--refresh` against a mock server

#[path = "../common/mod.rs"]
mod common;

mod cache_cmd;
mod cv;
mod errors;
mod gallery;
mod remote;
