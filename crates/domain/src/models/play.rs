//! Play domain model.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::identity::{Identity, PlayId, PlaywrightId};

/// A play, optionally attributed to a playwright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    #[serde(default)]
    pub id: Identity<PlayId>,
    pub title: String,
    pub year: i64,
    pub playwright_id: Option<PlaywrightId>,
}

impl Play {
    /// Creates a play that has not been written to storage yet.
    pub fn new(title: impl Into<String>, year: i64, playwright_id: Option<PlaywrightId>) -> Self {
        Self {
            id: Identity::Unsaved,
            title: title.into(),
            year,
            playwright_id,
        }
    }

    /// Creates a play for a row that already exists in storage.
    pub fn from_raw(id: i64, title: String, year: i64, playwright_id: Option<i64>) -> Self {
        Self {
            id: Identity::Saved(PlayId(id)),
            title,
            year,
            playwright_id: playwright_id.map(PlaywrightId),
        }
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Identity::Saved(id) => write!(f, "Play #{} {:?} ({})", id, self.title, self.year),
            Identity::Unsaved => write!(f, "Play (unsaved) {:?} ({})", self.title, self.year),
        }
    }
}
