//! Repository implementations for database operations.

pub mod play;
pub mod playwright;

pub use play::PlayRepository;
pub use playwright::PlaywrightRepository;
