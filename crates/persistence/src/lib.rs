//! Persistence layer for the plays catalog.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations

pub mod db;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod repositories;

pub use db::{Database, DatabaseConfig};
pub use error::PersistenceError;
pub use repositories::{PlayRepository, PlaywrightRepository};
