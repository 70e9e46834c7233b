//! Character catalog port.
//!
//! The catalog is the built-in table of per-character defaults. The domain only
//! reads from it, and a character missing from it is still a valid character.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ids::CharacterId;
use crate::value_objects::CharacterSettings;

/// Read-only lookup of catalog defaults by character id.
#[cfg_attr(test, mockall::automock)]
pub trait CharacterCatalog: Send + Sync {
    /// Defaults for `id`, or `None` when the character is not cataloged.
    fn settings_for(&self, id: &CharacterId) -> Option<Arc<CharacterSettings>>;
}

impl CharacterCatalog for HashMap<CharacterId, Arc<CharacterSettings>> {
    fn settings_for(&self, id: &CharacterId) -> Option<Arc<CharacterSettings>> {
        self.get(id).cloned()
    }
}
