//! Shared utilities for the plays catalog.
//!
//! This crate provides common functionality used across all other crates:
//! - Layered configuration loading (defaults, files, environment)
//! - Logging initialization

pub mod config;
pub mod logging;
