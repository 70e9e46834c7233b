//! Display metadata the game provides for a character.

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;

/// Avatar shown for characters migrated from a format that never stored one.
pub const PLACEHOLDER_AVATAR: &str = "/img/blank-character.png";

/// Name, image and tags for a character as reported by the game.
///
/// The persisted form does not carry the character id; it is stamped with the
/// owning character's id when the aggregate is rebuilt (see
/// [`GameSettingsRecord::into_settings`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    base_id: CharacterId,
    name: String,
    avatar_url: String,
    tags: Vec<String>,
    description: String,
}

impl GameSettings {
    pub fn new(
        base_id: CharacterId,
        name: impl Into<String>,
        avatar_url: impl Into<String>,
        tags: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            base_id,
            name: name.into(),
            avatar_url: avatar_url.into(),
            tags,
            description: description.into(),
        }
    }

    /// Lossy settings for characters that only ever stored a name.
    pub fn placeholder(base_id: CharacterId, name: impl Into<String>) -> Self {
        Self::new(base_id, name, PLACEHOLDER_AVATAR, Vec::new(), "")
    }

    pub fn base_id(&self) -> &CharacterId {
        &self.base_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Wire form, without the id.
    pub fn to_record(&self) -> GameSettingsRecord {
        GameSettingsRecord {
            name: self.name.clone(),
            avatar_url: self.avatar_url.clone(),
            tags: self.tags.clone(),
            description: self.description.clone(),
        }
    }
}

/// Persisted shape of [`GameSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettingsRecord {
    pub name: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl GameSettingsRecord {
    /// Rebuild the settings, stamping them with the owner's id.
    pub fn into_settings(self, base_id: CharacterId) -> GameSettings {
        GameSettings {
            base_id,
            name: self.name,
            avatar_url: self.avatar_url,
            tags: self.tags,
            description: self.description,
        }
    }
}
