//! Playwright domain model.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::identity::{Identity, PlaywrightId};

/// An author of plays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playwright {
    #[serde(default)]
    pub id: Identity<PlaywrightId>,
    pub name: String,
    /// Negative for years BCE.
    pub birth_year: i64,
}

impl Playwright {
    /// Creates a playwright that has not been written to storage yet.
    pub fn new(name: impl Into<String>, birth_year: i64) -> Self {
        Self {
            id: Identity::Unsaved,
            name: name.into(),
            birth_year,
        }
    }

    /// Creates a playwright for a row that already exists in storage.
    pub fn from_raw(id: i64, name: String, birth_year: i64) -> Self {
        Self {
            id: Identity::Saved(PlaywrightId(id)),
            name,
            birth_year,
        }
    }
}

impl fmt::Display for Playwright {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Identity::Saved(id) => {
                write!(f, "Playwright #{} {:?} (b. {})", id, self.name, self.birth_year)
            }
            Identity::Unsaved => {
                write!(f, "Playwright (unsaved) {:?} (b. {})", self.name, self.birth_year)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::name::en::Name;
    use fake::Fake;

    #[test]
    fn test_new_is_unsaved() {
        let name: String = Name().fake();
        let playwright = Playwright::new(name.clone(), 1564);
        assert_eq!(playwright.id, Identity::Unsaved);
        assert_eq!(playwright.name, name);
        assert_eq!(playwright.birth_year, 1564);
    }

    #[test]
    fn test_from_raw_is_saved() {
        let playwright = Playwright::from_raw(3, "Sophocles".to_string(), -497);
        assert_eq!(playwright.id.id(), Some(PlaywrightId(3)));
    }

    #[test]
    fn test_display() {
        let unsaved = Playwright::new("Moliere", 1622);
        assert_eq!(unsaved.to_string(), "Playwright (unsaved) \"Moliere\" (b. 1622)");

        let saved = Playwright::from_raw(1, "Sophocles".to_string(), -497);
        assert_eq!(saved.to_string(), "Playwright #1 \"Sophocles\" (b. -497)");
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let playwright = Playwright::from_raw(1, "Sophocles".to_string(), -497);
        let json = serde_json::to_value(&playwright).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["birthYear"], -497);
    }

    #[test]
    fn test_deserialization_without_id() {
        let playwright: Playwright =
            serde_json::from_str(r#"{"name":"Ibsen","birthYear":1828}"#).unwrap();
        assert_eq!(playwright, Playwright::new("Ibsen", 1828));
    }
}
