//! Common test utilities for integration tests.
//!
//! Every test gets its own private in-memory database with the catalog
//! schema applied.

// Not every helper is used by every test binary.
#![allow(dead_code)]

use domain::models::{Play, Playwright};
use persistence::Database;
use shared::config::LoggingConfig;

/// Create a migrated in-memory database.
pub async fn create_test_db() -> Database {
    let _ = shared::logging::try_init_logging(&LoggingConfig {
        level: "debug".to_string(),
        format: "pretty".to_string(),
    });

    let db = Database::in_memory()
        .await
        .expect("Failed to open in-memory database");
    db.migrate().await.expect("Failed to apply schema");
    db
}

/// Insert a playwright and return it in its saved state.
pub async fn create_playwright(db: &Database, name: &str, birth_year: i64) -> Playwright {
    let mut playwright = Playwright::new(name, birth_year);
    db.playwrights()
        .create(&mut playwright)
        .await
        .expect("Failed to create playwright");
    playwright
}

/// Insert a play by the given playwright and return it in its saved state.
pub async fn create_play(db: &Database, title: &str, year: i64, author: &Playwright) -> Play {
    let mut play = Play::new(title, year, author.id.id());
    db.plays()
        .create(&mut play)
        .await
        .expect("Failed to create play");
    play
}
