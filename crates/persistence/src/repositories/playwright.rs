//! Playwright repository for database operations.

use domain::models::{EntityKind, Identity, Operation, Play, Playwright, PlaywrightId};
use sqlx::SqlitePool;

use crate::entities::{PlayEntity, PlaywrightEntity};
use crate::error::PersistenceError;
use crate::metrics::QueryTimer;

/// Repository for playwright-related database operations.
#[derive(Clone)]
pub struct PlaywrightRepository {
    pool: SqlitePool,
}

impl PlaywrightRepository {
    /// Creates a new PlaywrightRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get all playwrights in insertion order.
    pub async fn find_all(&self) -> Result<Vec<Playwright>, PersistenceError> {
        let timer = QueryTimer::new("find_all_playwrights");
        let result = sqlx::query_as::<_, PlaywrightEntity>(
            r#"
            SELECT id, name, birth_year
            FROM playwrights
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(result?.into_iter().map(Playwright::from).collect())
    }

    /// Find a playwright by its id.
    pub async fn find_by_id(&self, id: PlaywrightId) -> Result<Option<Playwright>, PersistenceError> {
        let timer = QueryTimer::new("find_playwright_by_id");
        let result = sqlx::query_as::<_, PlaywrightEntity>(
            r#"
            SELECT id, name, birth_year
            FROM playwrights
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        Ok(result?.map(Playwright::from))
    }

    /// Find the playwright with exactly this name.
    ///
    /// Names are not unique. When several rows match, the earliest inserted
    /// one is returned; use [`find_all_by_name`](Self::find_all_by_name) to
    /// see all of them.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Playwright>, PersistenceError> {
        let timer = QueryTimer::new("find_playwright_by_name");
        let result = sqlx::query_as::<_, PlaywrightEntity>(
            r#"
            SELECT id, name, birth_year
            FROM playwrights
            WHERE name = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        Ok(result?.map(Playwright::from))
    }

    /// Find every playwright with exactly this name, in insertion order.
    pub async fn find_all_by_name(&self, name: &str) -> Result<Vec<Playwright>, PersistenceError> {
        let timer = QueryTimer::new("find_all_playwrights_by_name");
        let result = sqlx::query_as::<_, PlaywrightEntity>(
            r#"
            SELECT id, name, birth_year
            FROM playwrights
            WHERE name = ?
            ORDER BY id
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(result?.into_iter().map(Playwright::from).collect())
    }

    /// Insert an unsaved playwright and record the id storage assigned to it.
    pub async fn create(&self, playwright: &mut Playwright) -> Result<PlaywrightId, PersistenceError> {
        if playwright.id.is_saved() {
            return Err(PersistenceError::already_exists(
                EntityKind::Playwright,
                &*playwright,
            ));
        }

        let timer = QueryTimer::new("create_playwright");
        let result = sqlx::query(
            r#"
            INSERT INTO playwrights (name, birth_year)
            VALUES (?, ?)
            "#,
        )
        .bind(&playwright.name)
        .bind(playwright.birth_year)
        .execute(&self.pool)
        .await;
        timer.record();

        let id = PlaywrightId(result?.last_insert_rowid());
        playwright.id = Identity::Saved(id);
        tracing::debug!(playwright_id = %id, "Created playwright");
        Ok(id)
    }

    /// Overwrite the stored name and birth year of a saved playwright.
    pub async fn update(&self, playwright: &Playwright) -> Result<(), PersistenceError> {
        let Identity::Saved(id) = playwright.id else {
            return Err(PersistenceError::not_persisted(
                EntityKind::Playwright,
                Operation::Update,
                playwright,
            ));
        };

        let timer = QueryTimer::new("update_playwright");
        let result = sqlx::query(
            r#"
            UPDATE playwrights
            SET name = ?, birth_year = ?
            WHERE id = ?
            "#,
        )
        .bind(&playwright.name)
        .bind(playwright.birth_year)
        .bind(id.0)
        .execute(&self.pool)
        .await;
        timer.record();

        let rows = result?.rows_affected();
        tracing::debug!(playwright_id = %id, rows, "Updated playwright");
        Ok(())
    }

    /// Get all plays written by a saved playwright, in insertion order.
    pub async fn plays(&self, playwright: &Playwright) -> Result<Vec<Play>, PersistenceError> {
        let Identity::Saved(id) = playwright.id else {
            return Err(PersistenceError::not_persisted(
                EntityKind::Playwright,
                Operation::ListPlays,
                playwright,
            ));
        };

        let timer = QueryTimer::new("find_plays_by_playwright_id");
        let result = sqlx::query_as::<_, PlayEntity>(
            r#"
            SELECT id, title, year, playwright_id
            FROM plays
            WHERE playwright_id = ?
            ORDER BY id
            "#,
        )
        .bind(id.0)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(result?.into_iter().map(Play::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn repository() -> PlaywrightRepository {
        let db = Database::in_memory().await.unwrap();
        db.migrate().await.unwrap();
        db.playwrights()
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let repo = repository().await;
        let mut playwright = Playwright::new("Sophocles", -497);

        let id = repo.create(&mut playwright).await.unwrap();

        assert_eq!(id, PlaywrightId(1));
        assert_eq!(playwright.id, Identity::Saved(id));
    }

    #[tokio::test]
    async fn test_update_unsaved_does_not_touch_storage() {
        let repo = repository().await;
        let playwright = Playwright::new("Moliere", 1622);

        let err = repo.update(&playwright).await.unwrap_err();

        assert!(matches!(
            err,
            PersistenceError::NotPersisted {
                kind: EntityKind::Playwright,
                operation: Operation::Update,
                ..
            }
        ));
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
