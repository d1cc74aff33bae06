// src/specs/mod.rs
//! # Sheet-reading specs
//!
//! This module knows **how to read the member sheet**: which header
//! spellings mean what, and how a raw row becomes a directory entry.
//!
//! ## What lives here
//! - `fields`: the per-field header alias groups (data, not behavior) and
//!   the case/whitespace-insensitive alias resolver.
//! - `person`: the normalized entity, the slug/identifier scheme, and the
//!   record→person pipeline (timestamp-column drop, name filter,
//!   positional numbering).
//!
//! ## What does **not** live here
//! - Fetching and fallback policy (`loader`).
//! - Paging math and session state (`data`, `config::state`).
//! - Presentation and export formatting (`gui`, `file`).
//!
//! Specs only read what was already fetched; other layers decide when to
//! load, how to fall back, and how to present.
pub mod fields;
pub mod person;
