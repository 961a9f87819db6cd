//! Descriptors for which entity and which operation an error refers to.

use serde::{Deserialize, Serialize};

/// The kinds of entity stored by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Playwright,
    Play,
}

impl EntityKind {
    /// Name of the backing table.
    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::Playwright => "playwrights",
            EntityKind::Play => "plays",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Playwright => write!(f, "playwright"),
            EntityKind::Play => write!(f, "play"),
        }
    }
}

/// Operations that depend on the identity state of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Create,
    Update,
    ListPlays,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
            Operation::ListPlays => write!(f, "list plays"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_table() {
        assert_eq!(EntityKind::Playwright.table(), "playwrights");
        assert_eq!(EntityKind::Play.table(), "plays");
    }

    #[test]
    fn test_display() {
        assert_eq!(EntityKind::Playwright.to_string(), "playwright");
        assert_eq!(Operation::ListPlays.to_string(), "list plays");
    }

    #[test]
    fn test_operation_serialization() {
        let json = serde_json::to_string(&Operation::ListPlays).unwrap();
        assert_eq!(json, "\"list_plays\"");
    }
}
