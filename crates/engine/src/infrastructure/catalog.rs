//! JSON-file-backed character catalog.
//!
//! The catalog file maps each `baseID` to its default settings:
//!
//! ```json
//! { "DARTHVADER": { "targets": [{ "name": "PvP", "speed": 100 }], "damageType": "physical" } }
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use modsopt_domain::{CharacterCatalog, CharacterId, CharacterSettings};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Catalog loaded once from JSON and served from memory.
#[derive(Debug, Default)]
pub struct JsonCatalog {
    entries: HashMap<CharacterId, Arc<CharacterSettings>>,
}

impl JsonCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<CharacterId, CharacterSettings> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .map(|(id, settings)| (id, Arc::new(settings)))
            .collect();
        Ok(Self { entries })
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            characters = catalog.len(),
            "Loaded character catalog"
        );
        Ok(catalog)
    }

    /// Like [`from_path`](Self::from_path), but a missing file yields an empty
    /// catalog: uncataloged characters are still valid characters.
    pub fn load_or_empty(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Character catalog not found, continuing without catalog defaults"
            );
            return Ok(Self::default());
        }
        Self::from_path(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CharacterCatalog for JsonCatalog {
    fn settings_for(&self, id: &CharacterId) -> Option<Arc<CharacterSettings>> {
        self.entries.get(id).cloned()
    }
}
