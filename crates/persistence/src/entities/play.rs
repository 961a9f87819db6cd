//! Play entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the plays table.
#[derive(Debug, Clone, FromRow)]
pub struct PlayEntity {
    pub id: i64,
    pub title: String,
    pub year: i64,
    pub playwright_id: Option<i64>,
}

impl From<PlayEntity> for domain::models::Play {
    fn from(entity: PlayEntity) -> Self {
        Self::from_raw(entity.id, entity.title, entity.year, entity.playwright_id)
    }
}
