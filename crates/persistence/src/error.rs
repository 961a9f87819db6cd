//! Errors returned by the repositories.

use domain::models::{EntityKind, Operation};
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    /// `create` was called on an entity that already has a storage id.
    #[error("cannot {operation} {kind} that is already in database: {description}")]
    AlreadyExists {
        kind: EntityKind,
        operation: Operation,
        description: String,
    },

    /// An operation that needs a storage id was called on an unsaved entity.
    #[error("cannot {operation} {kind} that is not in database: {description}")]
    NotPersisted {
        kind: EntityKind,
        operation: Operation,
        description: String,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl PersistenceError {
    pub(crate) fn already_exists(kind: EntityKind, entity: &impl Display) -> Self {
        let description = entity.to_string();
        let operation = Operation::Create;
        tracing::warn!(
            %kind,
            table = kind.table(),
            %operation,
            %description,
            "Entity is already saved"
        );
        Self::AlreadyExists {
            kind,
            operation,
            description,
        }
    }

    pub(crate) fn not_persisted(
        kind: EntityKind,
        operation: Operation,
        entity: &impl Display,
    ) -> Self {
        let description = entity.to_string();
        tracing::warn!(
            %kind,
            table = kind.table(),
            %operation,
            %description,
            "Entity has not been saved"
        );
        Self::NotPersisted {
            kind,
            operation,
            description,
        }
    }

    /// True for the usage errors, as opposed to storage failures.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. } | Self::NotPersisted { .. })
    }
}
