use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a character (the game's `baseID`, e.g. `"DARTHVADER"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(String);

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CharacterId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CharacterId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<CharacterId> for String {
    fn from(value: CharacterId) -> Self {
        value.0
    }
}
