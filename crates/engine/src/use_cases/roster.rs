//! Roster migration use case.
//!
//! A persisted roster is a versioned document holding every character keyed by
//! `baseID`. Rosters written by app versions 1.1/1.2 use the flat legacy
//! character format; anything newer is already in the current format. Either
//! way the result is a current-schema roster ordered by Galactic Power.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use modsopt_domain::{Character, CharacterCatalog, LegacyCharacter};

use crate::infrastructure::ports::ClockPort;

/// Version stamped on every roster this engine writes.
pub const CURRENT_SCHEMA_VERSION: &str = "1.4.0";

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Unsupported roster version: {0}")]
    UnsupportedVersion(String),
    #[error("Invalid roster document: {0}")]
    Document(#[source] serde_json::Error),
    #[error("Invalid character {base_id}: {source}")]
    Character {
        base_id: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Character {base_id} appears more than once in the roster")]
    DuplicateCharacter { base_id: String },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize roster: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl RosterError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Which character format a roster document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaVersion {
    /// Flat v1.1/v1.2 records.
    Legacy,
    /// Nested aggregate records.
    Current,
}

impl SchemaVersion {
    /// Classify a `major.minor[.patch]` version string.
    pub fn detect(version: &str) -> Result<Self, RosterError> {
        let unsupported = || RosterError::UnsupportedVersion(version.to_string());

        let mut parts = version.trim().trim_start_matches('v').split('.');
        let major: u32 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(unsupported)?;
        let minor: u32 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(unsupported)?;

        match (major, minor) {
            (1, 1) | (1, 2) => Ok(Self::Legacy),
            (1, 3..) | (2.., _) => Ok(Self::Current),
            _ => Err(unsupported()),
        }
    }
}

/// A roster as read from storage.
#[derive(Debug, Deserialize)]
pub struct RosterDocument {
    pub version: String,
    #[serde(default)]
    pub characters: Map<String, Value>,
}

/// A roster in the current schema, ready to be written.
///
/// `characters` is kept in roster order and written as a map keyed by
/// `baseID`, so the output can be read back as a [`RosterDocument`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigratedRoster {
    pub version: String,
    pub migrated_at: DateTime<Utc>,
    pub source_schema: SchemaVersion,
    #[serde(serialize_with = "characters_by_base_id")]
    pub characters: Vec<Character>,
}

fn characters_by_base_id<S>(characters: &[Character], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(characters.iter().map(|c| (c.base_id(), c)))
}

/// What a file migration did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationSummary {
    pub source_version: String,
    pub source_schema: SchemaVersion,
    pub characters: usize,
}

pub struct RosterMigration {
    catalog: Arc<dyn CharacterCatalog>,
    clock: Arc<dyn ClockPort>,
}

impl RosterMigration {
    pub fn new(catalog: Arc<dyn CharacterCatalog>, clock: Arc<dyn ClockPort>) -> Self {
        Self { catalog, clock }
    }

    pub fn migrate_str(&self, json: &str) -> Result<MigratedRoster, RosterError> {
        let document: RosterDocument = serde_json::from_str(json).map_err(RosterError::Document)?;
        self.migrate_document(document)
    }

    pub fn migrate_document(
        &self,
        document: RosterDocument,
    ) -> Result<MigratedRoster, RosterError> {
        let schema = SchemaVersion::detect(&document.version)?;
        tracing::info!(
            version = %document.version,
            schema = ?schema,
            characters = document.characters.len(),
            "Migrating roster"
        );

        let mut characters = Vec::with_capacity(document.characters.len());
        let mut seen = HashSet::with_capacity(document.characters.len());
        for (key, value) in document.characters {
            let character = self.migrate_character(schema, &key, value)?;
            if !seen.insert(character.base_id().clone()) {
                return Err(RosterError::DuplicateCharacter {
                    base_id: character.base_id().to_string(),
                });
            }
            if character.base_id().as_str() != key {
                tracing::warn!(
                    key = %key,
                    base_id = %character.base_id(),
                    "Roster key does not match character baseID"
                );
            }
            characters.push(character);
        }

        characters.sort_by(Character::compare_gp);

        Ok(MigratedRoster {
            version: CURRENT_SCHEMA_VERSION.to_string(),
            migrated_at: self.clock.now(),
            source_schema: schema,
            characters,
        })
    }

    /// Read `input`, migrate it and write the current-schema roster to `output`.
    pub fn migrate_file(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<MigrationSummary, RosterError> {
        let json = std::fs::read_to_string(input).map_err(|e| RosterError::io(input, e))?;
        let document: RosterDocument =
            serde_json::from_str(&json).map_err(RosterError::Document)?;
        let source_version = document.version.clone();

        let roster = self.migrate_document(document)?;
        let rendered = serde_json::to_string_pretty(&roster).map_err(RosterError::Serialize)?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| RosterError::io(parent, e))?;
        }
        std::fs::write(output, rendered).map_err(|e| RosterError::io(output, e))?;

        tracing::info!(
            output = %output.display(),
            characters = roster.characters.len(),
            "Wrote migrated roster"
        );

        Ok(MigrationSummary {
            source_version,
            source_schema: roster.source_schema,
            characters: roster.characters.len(),
        })
    }

    fn migrate_character(
        &self,
        schema: SchemaVersion,
        key: &str,
        value: Value,
    ) -> Result<Character, RosterError> {
        let invalid = |source| RosterError::Character {
            base_id: key.to_string(),
            source,
        };

        match schema {
            SchemaVersion::Legacy => {
                let legacy: LegacyCharacter = serde_json::from_value(value).map_err(invalid)?;
                let character =
                    Character::deserialize_version_one_two(legacy, self.catalog.as_ref());

                if character.default_settings().is_none() {
                    tracing::warn!(
                        base_id = %key,
                        "Character not in catalog, migrated without defaults"
                    );
                }
                tracing::debug!(
                    base_id = %key,
                    selected_target = character.selected_target().map(|t| t.name()),
                    "Migrated legacy character"
                );
                Ok(character)
            }
            SchemaVersion::Current => serde_json::from_value(value).map_err(invalid),
        }
    }
}
