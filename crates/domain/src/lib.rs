//! Domain layer for the plays catalog.
//!
//! This crate contains:
//! - Domain models (Playwright, Play)
//! - Typed identifiers and the saved/unsaved identity state
//! - Descriptors used by persistence errors (entity kind, operation)

pub mod models;
