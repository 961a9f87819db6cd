//! Playwright entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the playwrights table.
#[derive(Debug, Clone, FromRow)]
pub struct PlaywrightEntity {
    pub id: i64,
    pub name: String,
    pub birth_year: i64,
}

impl From<PlaywrightEntity> for domain::models::Playwright {
    fn from(entity: PlaywrightEntity) -> Self {
        Self::from_raw(entity.id, entity.name, entity.birth_year)
    }
}
