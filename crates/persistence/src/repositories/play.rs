//! Play repository for database operations.

use domain::models::{EntityKind, Identity, Operation, Play, PlayId};
use sqlx::SqlitePool;

use crate::entities::PlayEntity;
use crate::error::PersistenceError;
use crate::metrics::QueryTimer;

/// Repository for play-related database operations.
#[derive(Clone)]
pub struct PlayRepository {
    pool: SqlitePool,
}

impl PlayRepository {
    /// Creates a new PlayRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get all plays in insertion order.
    pub async fn find_all(&self) -> Result<Vec<Play>, PersistenceError> {
        let timer = QueryTimer::new("find_all_plays");
        let result = sqlx::query_as::<_, PlayEntity>(
            r#"
            SELECT id, title, year, playwright_id
            FROM plays
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(result?.into_iter().map(Play::from).collect())
    }

    /// Find a play by its id.
    pub async fn find_by_id(&self, id: PlayId) -> Result<Option<Play>, PersistenceError> {
        let timer = QueryTimer::new("find_play_by_id");
        let result = sqlx::query_as::<_, PlayEntity>(
            r#"
            SELECT id, title, year, playwright_id
            FROM plays
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        Ok(result?.map(Play::from))
    }

    /// Find all plays with exactly this title.
    pub async fn find_by_title(&self, title: &str) -> Result<Vec<Play>, PersistenceError> {
        let timer = QueryTimer::new("find_plays_by_title");
        let result = sqlx::query_as::<_, PlayEntity>(
            r#"
            SELECT id, title, year, playwright_id
            FROM plays
            WHERE title = ?
            ORDER BY id
            "#,
        )
        .bind(title)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(result?.into_iter().map(Play::from).collect())
    }

    /// Find all plays written by the playwright with exactly this name.
    ///
    /// Uses the same first-match rule as `PlaywrightRepository::find_by_name`.
    /// An unknown name yields no plays.
    pub async fn find_by_playwright(&self, name: &str) -> Result<Vec<Play>, PersistenceError> {
        let timer = QueryTimer::new("find_plays_by_playwright_name");
        let result = sqlx::query_as::<_, PlayEntity>(
            r#"
            SELECT id, title, year, playwright_id
            FROM plays
            WHERE playwright_id = (
                SELECT id
                FROM playwrights
                WHERE name = ?
                ORDER BY id
                LIMIT 1
            )
            ORDER BY id
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(result?.into_iter().map(Play::from).collect())
    }

    /// Insert an unsaved play and record the id storage assigned to it.
    pub async fn create(&self, play: &mut Play) -> Result<PlayId, PersistenceError> {
        if play.id.is_saved() {
            return Err(PersistenceError::already_exists(EntityKind::Play, &*play));
        }

        let timer = QueryTimer::new("create_play");
        let result = sqlx::query(
            r#"
            INSERT INTO plays (title, year, playwright_id)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&play.title)
        .bind(play.year)
        .bind(play.playwright_id.map(|id| id.0))
        .execute(&self.pool)
        .await;
        timer.record();

        let id = PlayId(result?.last_insert_rowid());
        play.id = Identity::Saved(id);
        tracing::debug!(play_id = %id, "Created play");
        Ok(id)
    }

    /// Overwrite the stored title, year and playwright of a saved play.
    pub async fn update(&self, play: &Play) -> Result<(), PersistenceError> {
        let Identity::Saved(id) = play.id else {
            return Err(PersistenceError::not_persisted(
                EntityKind::Play,
                Operation::Update,
                play,
            ));
        };

        let timer = QueryTimer::new("update_play");
        let result = sqlx::query(
            r#"
            UPDATE plays
            SET title = ?, year = ?, playwright_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&play.title)
        .bind(play.year)
        .bind(play.playwright_id.map(|id| id.0))
        .bind(id.0)
        .execute(&self.pool)
        .await;
        timer.record();

        let rows = result?.rows_affected();
        tracing::debug!(play_id = %id, rows, "Updated play");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn repository() -> PlayRepository {
        let db = Database::in_memory().await.unwrap();
        db.migrate().await.unwrap();
        db.plays()
    }

    #[tokio::test]
    async fn test_create_without_playwright() {
        let repo = repository().await;
        let mut play = Play::new("Everyman", 1510, None);

        let id = repo.create(&mut play).await.unwrap();

        let stored = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored, play);
        assert_eq!(stored.playwright_id, None);
    }

    #[tokio::test]
    async fn test_create_saved_play_fails() {
        let repo = repository().await;
        let mut play = Play::from_raw(9, "Medea".to_string(), -431, None);

        let err = repo.create(&mut play).await.unwrap_err();

        assert!(matches!(
            err,
            PersistenceError::AlreadyExists {
                kind: EntityKind::Play,
                operation: Operation::Create,
                ..
            }
        ));
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
