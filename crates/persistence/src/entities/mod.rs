//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod play;
pub mod playwright;

pub use play::PlayEntity;
pub use playwright::PlaywrightEntity;
