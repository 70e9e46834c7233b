//! Character aggregate - one roster entry and everything the optimizer knows about it
//!
//! # Composition
//!
//! A character is its `baseID` plus four optional sub-records:
//! - `default_settings`: catalog defaults (shared, never edited)
//! - `game_settings`: name/image/tags reported by the game (shared, never edited)
//! - `player_values`: the player's progress on the character
//! - `optimizer_settings`: the player's targets and optimizer flags
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: All fields are encapsulated
//! - **No `&mut` methods**: every update consumes the value and returns a new one
//! - **Structural sharing**: the shared sub-records sit behind `Arc`, so `clone()`
//!   copies the player-owned records and shares the rest
//! - **Injected catalog**: operations that need catalog defaults take a
//!   [`CharacterCatalog`] instead of reaching for a global table

use std::cmp::Ordering;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::CharacterCatalog;
use crate::ids::CharacterId;
use crate::value_objects::{
    CharacterSettings, GameSettings, GameSettingsRecord, OptimizationPlan, OptimizerSettings,
    PlayerValues,
};

/// A character in the player's roster.
///
/// # Invariants
///
/// - `base_id` never changes after construction
/// - Target names are unique in [`targets`](Self::targets); player targets
///   shadow catalog targets of the same name
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use std::sync::Arc;
/// use modsopt_domain::{
///     Character, CharacterId, CharacterSettings, OptimizerSettings, PlayerValues,
/// };
///
/// let catalog: HashMap<CharacterId, Arc<CharacterSettings>> = HashMap::new();
/// let vader = Character::new(CharacterId::new("DARTHVADER"), None, None, None, None)
///     .with_player_values(Some(PlayerValues::new(85, 7, 13, Vec::new(), 32_000)))
///     .with_optimizer_settings(Some(OptimizerSettings::default()));
///
/// assert_eq!(vader.galactic_power(), 32_000);
/// assert!(vader.default_target(&catalog).is_unnamed());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    base_id: CharacterId,
    default_settings: Option<Arc<CharacterSettings>>,
    game_settings: Option<Arc<GameSettings>>,
    player_values: Option<PlayerValues>,
    optimizer_settings: Option<OptimizerSettings>,
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    pub fn new(
        base_id: CharacterId,
        default_settings: Option<Arc<CharacterSettings>>,
        game_settings: Option<GameSettings>,
        player_values: Option<PlayerValues>,
        optimizer_settings: Option<OptimizerSettings>,
    ) -> Self {
        Self {
            base_id,
            default_settings,
            game_settings: game_settings.map(Arc::new),
            player_values,
            optimizer_settings,
        }
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn base_id(&self) -> &CharacterId {
        &self.base_id
    }

    #[inline]
    pub fn default_settings(&self) -> Option<&CharacterSettings> {
        self.default_settings.as_deref()
    }

    #[inline]
    pub fn game_settings(&self) -> Option<&GameSettings> {
        self.game_settings.as_deref()
    }

    #[inline]
    pub fn player_values(&self) -> Option<&PlayerValues> {
        self.player_values.as_ref()
    }

    #[inline]
    pub fn optimizer_settings(&self) -> Option<&OptimizerSettings> {
        self.optimizer_settings.as_ref()
    }

    /// The target the player currently has selected, if any.
    pub fn selected_target(&self) -> Option<&OptimizationPlan> {
        self.optimizer_settings.as_ref().and_then(|s| s.target())
    }

    /// Galactic Power, or 0 when no player values are known.
    pub fn galactic_power(&self) -> u64 {
        self.player_values
            .as_ref()
            .map_or(0, PlayerValues::galactic_power)
    }

    // =========================================================================
    // Copy-on-write transforms
    //
    // `None` leaves the character exactly as it was; these never clear a field.
    // =========================================================================

    pub fn with_default_settings(mut self, settings: Option<Arc<CharacterSettings>>) -> Self {
        if let Some(settings) = settings {
            self.default_settings = Some(settings);
        }
        self
    }

    pub fn with_game_settings(mut self, settings: Option<GameSettings>) -> Self {
        if let Some(settings) = settings {
            self.game_settings = Some(Arc::new(settings));
        }
        self
    }

    pub fn with_player_values(mut self, values: Option<PlayerValues>) -> Self {
        if let Some(values) = values {
            self.player_values = Some(values);
        }
        self
    }

    pub fn with_optimizer_settings(mut self, settings: Option<OptimizerSettings>) -> Self {
        if let Some(settings) = settings {
            self.optimizer_settings = Some(settings);
        }
        self
    }

    // =========================================================================
    // Targets
    // =========================================================================

    /// Catalog targets overlaid with the player's targets, keyed by name.
    ///
    /// Catalog order comes first; a player target with a catalog name takes
    /// that slot, other player targets follow in their own order.
    pub fn targets(&self, catalog: &dyn CharacterCatalog) -> Vec<OptimizationPlan> {
        let mut by_name: IndexMap<String, OptimizationPlan> = IndexMap::new();

        if let Some(defaults) = catalog.settings_for(&self.base_id) {
            for target in defaults.targets() {
                by_name.insert(target.name().to_string(), target.clone());
            }
        }

        if let Some(settings) = &self.optimizer_settings {
            for target in settings.targets() {
                by_name.insert(target.name().to_string(), target.clone());
            }
        }

        by_name.into_values().collect()
    }

    /// First available target, falling back to an `"unnamed"` blank plan.
    pub fn default_target(&self, catalog: &dyn CharacterCatalog) -> OptimizationPlan {
        self.targets(catalog)
            .into_iter()
            .next()
            .unwrap_or_else(OptimizationPlan::unnamed)
    }

    /// Put the catalog's version of `target_name` back and select it.
    ///
    /// Without a catalog target of that name, the player's target is dropped
    /// and nothing is selected.
    pub fn with_reset_target(mut self, catalog: &dyn CharacterCatalog, target_name: &str) -> Self {
        let settings = self.optimizer_settings.take().unwrap_or_default();
        let default = catalog
            .settings_for(&self.base_id)
            .and_then(|defaults| defaults.target(target_name).cloned());

        let settings = match default {
            Some(target) => settings.with_target_override(target),
            None => settings.with_deleted_target(target_name).with_target(None),
        };
        self.with_optimizer_settings(Some(settings))
    }

    /// Replace every player target with exactly the catalog's targets.
    pub fn with_reset_targets(mut self, catalog: &dyn CharacterCatalog) -> Self {
        let settings = self.optimizer_settings.take().unwrap_or_default();
        let defaults = catalog
            .settings_for(&self.base_id)
            .map(|defaults| defaults.targets().to_vec())
            .unwrap_or_default();

        self.with_optimizer_settings(Some(settings.with_targets(defaults)))
    }

    /// Remove a player target. Unknown names leave the character unchanged.
    pub fn with_deleted_target(mut self, target_name: &str) -> Self {
        self.optimizer_settings = self
            .optimizer_settings
            .take()
            .map(|settings| settings.with_deleted_target(target_name));
        self
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    /// Roster order: highest Galactic Power first, ties by `baseID`.
    ///
    /// Usable directly with `sort_by`.
    pub fn compare_gp(&self, other: &Self) -> Ordering {
        other
            .galactic_power()
            .cmp(&self.galactic_power())
            .then_with(|| self.base_id.cmp(&other.base_id))
    }

    pub(crate) fn from_parts(
        base_id: CharacterId,
        default_settings: Option<Arc<CharacterSettings>>,
        game_settings: Option<Arc<GameSettings>>,
        player_values: Option<PlayerValues>,
        optimizer_settings: Option<OptimizerSettings>,
    ) -> Self {
        Self {
            base_id,
            default_settings,
            game_settings,
            player_values,
            optimizer_settings,
        }
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Outgoing wire format.
///
/// `defaultSettings`/`gameSettings` are omitted when absent while
/// `playerValues`/`optimizerSettings` are written as `null`; readers depend on
/// that difference.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CharacterWireFormat<'a> {
    #[serde(rename = "baseID")]
    base_id: &'a CharacterId,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_settings: Option<&'a CharacterSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    game_settings: Option<GameSettingsRecord>,
    player_values: Option<&'a PlayerValues>,
    optimizer_settings: Option<&'a OptimizerSettings>,
}

/// Incoming wire format. `playerValues` and `optimizerSettings` must be
/// present, though either may be `null`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CharacterRecord {
    #[serde(rename = "baseID")]
    base_id: CharacterId,
    #[serde(default)]
    default_settings: Option<CharacterSettings>,
    #[serde(default)]
    game_settings: Option<GameSettingsRecord>,
    #[serde(deserialize_with = "required_nullable")]
    player_values: Option<PlayerValues>,
    #[serde(deserialize_with = "required_nullable")]
    optimizer_settings: Option<OptimizerSettings>,
}

/// Accepts `null` but, unlike a bare `Option`, not a missing key.
fn required_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

impl Serialize for Character {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = CharacterWireFormat {
            base_id: &self.base_id,
            default_settings: self.default_settings.as_deref(),
            game_settings: self.game_settings.as_ref().map(|s| s.to_record()),
            player_values: self.player_values.as_ref(),
            optimizer_settings: self.optimizer_settings.as_ref(),
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Character {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = CharacterRecord::deserialize(deserializer)?;

        let game_settings = record
            .game_settings
            .map(|settings| Arc::new(settings.into_settings(record.base_id.clone())));

        Ok(Character::from_parts(
            record.base_id,
            record.default_settings.map(Arc::new),
            game_settings,
            record.player_values,
            record.optimizer_settings,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCharacterCatalog;
    use crate::value_objects::{DamageType, ModDots, WeightedStat};
    use std::collections::HashMap;

    fn plan(name: &str, speed: f64) -> OptimizationPlan {
        OptimizationPlan::new(name).with_weight(WeightedStat::Speed, speed)
    }

    fn names(targets: &[OptimizationPlan]) -> Vec<&str> {
        targets.iter().map(|t| t.name()).collect()
    }

    fn catalog_with(
        id: &str,
        targets: Vec<OptimizationPlan>,
    ) -> HashMap<CharacterId, Arc<CharacterSettings>> {
        let mut catalog = HashMap::new();
        catalog.insert(
            CharacterId::new(id),
            Arc::new(CharacterSettings::new(targets, DamageType::Physical)),
        );
        catalog
    }

    fn create_test_character() -> Character {
        Character::new(
            CharacterId::new("COMMANDERLUKESKYWALKER"),
            Some(Arc::new(CharacterSettings::new(
                vec![plan("PvP", 100.0)],
                DamageType::Physical,
            ))),
            Some(GameSettings::new(
                CharacterId::new("COMMANDERLUKESKYWALKER"),
                "Commander Luke Skywalker",
                "/img/cls.png",
                vec!["Rebel".to_string(), "Leader".to_string()],
                "Jedi Knight",
            )),
            Some(PlayerValues::new(85, 7, 13, vec!["Mk 12 Gizmo".to_string()], 38_500)),
            Some(OptimizerSettings::new(
                Some(plan("Fast", 200.0)),
                vec![plan("Fast", 200.0)],
                ModDots::FIVE,
                true,
                false,
            )),
        )
    }

    fn with_gp(id: &str, gp: u64) -> Character {
        Character::new(CharacterId::new(id), None, None, None, None)
            .with_player_values(Some(PlayerValues::new(85, 7, 13, Vec::new(), gp)))
    }

    mod transforms {
        use super::*;

        #[test]
        fn none_input_returns_character_unchanged() {
            let character = create_test_character();
            let before = character.clone();

            let after = character
                .with_default_settings(None)
                .with_game_settings(None)
                .with_player_values(None)
                .with_optimizer_settings(None);

            assert_eq!(after, before);
            assert!(Arc::ptr_eq(
                after.default_settings.as_ref().unwrap(),
                before.default_settings.as_ref().unwrap()
            ));
            assert!(Arc::ptr_eq(
                after.game_settings.as_ref().unwrap(),
                before.game_settings.as_ref().unwrap()
            ));
        }

        #[test]
        fn transform_leaves_original_untouched() {
            let original = create_test_character();
            let updated = original
                .clone()
                .with_player_values(Some(PlayerValues::new(85, 7, 13, Vec::new(), 1)));

            assert_eq!(original.galactic_power(), 38_500);
            assert_eq!(updated.galactic_power(), 1);
            assert_eq!(updated.base_id(), original.base_id());
        }

        #[test]
        fn transform_shares_untouched_records() {
            let original = create_test_character();
            let updated = original
                .clone()
                .with_optimizer_settings(Some(OptimizerSettings::default()));

            assert!(Arc::ptr_eq(
                original.default_settings.as_ref().unwrap(),
                updated.default_settings.as_ref().unwrap()
            ));
            assert!(Arc::ptr_eq(
                original.game_settings.as_ref().unwrap(),
                updated.game_settings.as_ref().unwrap()
            ));
            assert_ne!(original.optimizer_settings(), updated.optimizer_settings());
        }

        #[test]
        fn with_game_settings_replaces_field() {
            let character = Character::new(CharacterId::new("REY"), None, None, None, None)
                .with_game_settings(Some(GameSettings::placeholder(
                    CharacterId::new("REY"),
                    "Rey",
                )));

            assert_eq!(character.game_settings().map(|s| s.name()), Some("Rey"));
        }
    }

    mod targets {
        use super::*;

        #[test]
        fn player_targets_shadow_catalog_targets() {
            let catalog = catalog_with("HERMITYODA", vec![plan("A", 1.0), plan("B", 1.0)]);
            let character = Character::new(CharacterId::new("HERMITYODA"), None, None, None, None)
                .with_optimizer_settings(Some(OptimizerSettings::default().with_targets(vec![
                    plan("B", 99.0),
                    plan("C", 1.0),
                ])));

            let targets = character.targets(&catalog);

            assert_eq!(names(&targets), vec!["A", "B", "C"]);
            assert_eq!(targets[1], plan("B", 99.0));
        }

        #[test]
        fn uncataloged_character_uses_only_player_targets() {
            let mut catalog = MockCharacterCatalog::new();
            catalog.expect_settings_for().returning(|_| None);

            let character = Character::new(CharacterId::new("NEW"), None, None, None, None)
                .with_optimizer_settings(Some(
                    OptimizerSettings::default().with_targets(vec![plan("Mine", 1.0)]),
                ));

            assert_eq!(names(&character.targets(&catalog)), vec!["Mine"]);
        }

        #[test]
        fn default_target_falls_back_to_unnamed() {
            let catalog: HashMap<CharacterId, Arc<CharacterSettings>> = HashMap::new();
            let character = Character::new(CharacterId::new("NEW"), None, None, None, None);

            let target = character.default_target(&catalog);
            assert!(target.is_unnamed());
            assert!(target.is_blank());
        }

        #[test]
        fn default_target_is_first_merged_target() {
            let catalog = catalog_with("HERMITYODA", vec![plan("A", 1.0)]);
            let character = Character::new(CharacterId::new("HERMITYODA"), None, None, None, None);

            assert_eq!(character.default_target(&catalog).name(), "A");
        }

        #[test]
        fn reset_targets_restores_catalog_exactly() {
            let catalog = catalog_with("HERMITYODA", vec![plan("A", 1.0), plan("B", 1.0)]);
            let character = Character::new(CharacterId::new("HERMITYODA"), None, None, None, None)
                .with_optimizer_settings(Some(OptimizerSettings::default().with_targets(vec![
                    plan("A", 50.0),
                    plan("C", 1.0),
                ])));

            let reset = character.with_reset_targets(&catalog);
            let stored = reset.optimizer_settings().unwrap().targets();

            assert_eq!(stored, [plan("A", 1.0), plan("B", 1.0)]);
            assert_eq!(
                reset.targets(&catalog),
                vec![plan("A", 1.0), plan("B", 1.0)]
            );
        }

        #[test]
        fn reset_targets_without_catalog_entry_empties_collection() {
            let catalog: HashMap<CharacterId, Arc<CharacterSettings>> = HashMap::new();
            let character = create_test_character().with_reset_targets(&catalog);

            assert!(character.optimizer_settings().unwrap().targets().is_empty());
            assert!(character.selected_target().is_none());
        }

        #[test]
        fn reset_target_restores_catalog_version_and_selects_it() {
            let catalog = catalog_with("HERMITYODA", vec![plan("A", 1.0)]);
            let character = Character::new(CharacterId::new("HERMITYODA"), None, None, None, None)
                .with_optimizer_settings(Some(
                    OptimizerSettings::default()
                        .with_target_override(plan("A", 50.0))
                        .with_target_override(plan("C", 5.0)),
                ));

            let reset = character.with_reset_target(&catalog, "A");

            assert_eq!(reset.selected_target(), Some(&plan("A", 1.0)));
            assert_eq!(
                reset.optimizer_settings().unwrap().targets(),
                [plan("A", 1.0), plan("C", 5.0)]
            );
        }

        #[test]
        fn reset_target_without_default_clears_selection() {
            let catalog = catalog_with("HERMITYODA", vec![plan("A", 1.0)]);
            let character = Character::new(CharacterId::new("HERMITYODA"), None, None, None, None)
                .with_optimizer_settings(Some(
                    OptimizerSettings::default().with_target_override(plan("C", 5.0)),
                ));

            let reset = character.with_reset_target(&catalog, "C");

            assert!(reset.selected_target().is_none());
            assert!(reset.optimizer_settings().unwrap().targets().is_empty());
        }

        #[test]
        fn reset_target_without_optimizer_settings_creates_them() {
            let catalog = catalog_with("HERMITYODA", vec![plan("A", 1.0)]);
            let character = Character::new(CharacterId::new("HERMITYODA"), None, None, None, None);

            let reset = character.with_reset_target(&catalog, "A");
            assert_eq!(reset.selected_target(), Some(&plan("A", 1.0)));
        }

        #[test]
        fn delete_target_removes_player_entry() {
            let character = create_test_character().with_deleted_target("Fast");

            assert!(character.optimizer_settings().unwrap().targets().is_empty());
            assert!(character.selected_target().is_none());
        }

        #[test]
        fn delete_unknown_target_is_noop() {
            let character = create_test_character();
            let after = character.clone().with_deleted_target("Nope");

            assert_eq!(after, character);
        }

        #[test]
        fn delete_without_optimizer_settings_is_noop() {
            let character = Character::new(CharacterId::new("REY"), None, None, None, None);
            let after = character.clone().with_deleted_target("Anything");

            assert_eq!(after, character);
            assert!(after.optimizer_settings().is_none());
        }
    }

    mod ordering {
        use super::*;

        #[test]
        fn higher_gp_sorts_first() {
            let lower = with_gp("A", 100);
            let higher = with_gp("B", 200);

            assert_eq!(lower.compare_gp(&higher), Ordering::Greater);
            assert_eq!(higher.compare_gp(&lower), Ordering::Less);
        }

        #[test]
        fn equal_gp_sorts_by_base_id() {
            let a = with_gp("AAYLASECURA", 100);
            let b = with_gp("BB8", 100);

            assert_eq!(a.compare_gp(&b), Ordering::Less);
            assert_eq!(b.compare_gp(&a), Ordering::Greater);
            assert_eq!(a.compare_gp(&a.clone()), Ordering::Equal);
        }

        #[test]
        fn sort_by_orders_roster() {
            let mut roster = vec![
                with_gp("C", 100),
                with_gp("A", 300),
                Character::new(CharacterId::new("Z"), None, None, None, None),
                with_gp("B", 100),
            ];
            roster.sort_by(Character::compare_gp);

            let ids: Vec<&str> = roster.iter().map(|c| c.base_id().as_str()).collect();
            assert_eq!(ids, vec!["A", "B", "C", "Z"]);
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn serialize_deserialize_roundtrip() {
            let character = create_test_character();

            let json = serde_json::to_string(&character).unwrap();
            let deserialized: Character = serde_json::from_str(&json).unwrap();

            assert_eq!(deserialized, character);
            assert_eq!(
                deserialized.game_settings().unwrap().base_id().as_str(),
                "COMMANDERLUKESKYWALKER"
            );
        }

        #[test]
        fn absent_settings_are_omitted_but_player_records_are_null() {
            let character = Character::new(CharacterId::new("REY"), None, None, None, None);
            let json = serde_json::to_value(&character).unwrap();
            let object = json.as_object().unwrap();

            assert_eq!(object["baseID"], "REY");
            assert!(!object.contains_key("defaultSettings"));
            assert!(!object.contains_key("gameSettings"));
            assert!(object["playerValues"].is_null());
            assert!(object["optimizerSettings"].is_null());
        }

        #[test]
        fn game_settings_are_written_without_id() {
            let json = serde_json::to_value(create_test_character()).unwrap();

            assert!(json["gameSettings"].get("baseID").is_none());
            assert_eq!(json["gameSettings"]["name"], "Commander Luke Skywalker");
        }

        #[test]
        fn game_settings_are_stamped_with_parent_id() {
            let json = r#"{
                "baseID": "REY",
                "gameSettings": {"name": "Rey", "avatarUrl": "/img/rey.png", "tags": [], "description": ""},
                "playerValues": null,
                "optimizerSettings": null
            }"#;

            let character: Character = serde_json::from_str(json).unwrap();
            assert_eq!(character.game_settings().unwrap().base_id().as_str(), "REY");
        }

        #[test]
        fn missing_player_values_key_fails() {
            let json = r#"{"baseID": "REY", "optimizerSettings": null}"#;

            let err = serde_json::from_str::<Character>(json).unwrap_err();
            assert!(err.to_string().contains("playerValues"));
        }

        #[test]
        fn missing_optimizer_settings_key_fails() {
            let json = r#"{"baseID": "REY", "playerValues": null}"#;

            let err = serde_json::from_str::<Character>(json).unwrap_err();
            assert!(err.to_string().contains("optimizerSettings"));
        }

        #[test]
        fn null_player_records_are_absent() {
            let json = r#"{"baseID": "REY", "playerValues": null, "optimizerSettings": null}"#;

            let character: Character = serde_json::from_str(json).unwrap();
            assert!(character.player_values().is_none());
            assert!(character.optimizer_settings().is_none());
            assert!(character.default_settings().is_none());
            assert!(character.game_settings().is_none());
        }
    }
}
