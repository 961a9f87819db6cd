//! Storage-assigned identifiers and the saved/unsaved state of an entity.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Primary key of a row in the `playwrights` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaywrightId(pub i64);

/// Primary key of a row in the `plays` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayId(pub i64);

impl fmt::Display for PlaywrightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PlaywrightId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<i64> for PlayId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Whether an entity has been written to storage yet.
///
/// An entity starts out `Unsaved` and becomes `Saved` once storage has
/// assigned it a primary key. Nothing moves an entity back to `Unsaved`.
///
/// Serializes as the bare id, or `null` while unsaved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identity<Id> {
    Unsaved,
    Saved(Id),
}

impl<Id: Copy> Identity<Id> {
    /// Returns the storage id, if one has been assigned.
    pub fn id(&self) -> Option<Id> {
        match self {
            Identity::Unsaved => None,
            Identity::Saved(id) => Some(*id),
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Identity::Saved(_))
    }
}

impl<Id> Default for Identity<Id> {
    fn default() -> Self {
        Identity::Unsaved
    }
}

impl<Id> From<Option<Id>> for Identity<Id> {
    fn from(id: Option<Id>) -> Self {
        match id {
            Some(id) => Identity::Saved(id),
            None => Identity::Unsaved,
        }
    }
}

impl<Id: Serialize> Serialize for Identity<Id> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Identity::Unsaved => serializer.serialize_none(),
            Identity::Saved(id) => serializer.serialize_some(id),
        }
    }
}

impl<'de, Id: Deserialize<'de>> Deserialize<'de> for Identity<Id> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<Id>::deserialize(deserializer)?.into())
    }
}
