//! Domain models for the plays catalog.

pub mod identity;
pub mod kind;
pub mod play;
pub mod playwright;

pub use identity::{Identity, PlayId, PlaywrightId};
pub use kind::{EntityKind, Operation};
pub use play::Play;
pub use playwright::Playwright;
