//! Migration of characters persisted by app versions 1.1 and 1.2.
//!
//! The old format stored one flat record per character: progress values, a
//! single selected plan and an optional map of named plans. Everything the
//! current aggregate keeps in sub-records is rebuilt from those fields here.

use indexmap::IndexMap;
use serde::Deserialize;

use super::character::Character;
use crate::catalog::CharacterCatalog;
use crate::ids::CharacterId;
use crate::value_objects::{
    BaseStats, GameSettings, ModDots, OptimizationPlan, OptimizerSettings, PlayerValues,
    UNNAMED_TARGET,
};

/// A character as written by the v1.2 schema. Read-only: nothing writes this
/// format anymore.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyCharacter {
    #[serde(rename = "baseID")]
    pub base_id: CharacterId,
    pub name: String,
    pub level: u32,
    pub star_level: u8,
    pub gear_level: u32,
    #[serde(default)]
    pub gear_pieces: Vec<String>,
    pub galactic_power: u64,
    #[serde(default)]
    pub base_stats: Option<BaseStats>,
    #[serde(default)]
    pub total_stats: Option<BaseStats>,
    pub optimization_plan: OptimizationPlan,
    /// Keyed by plan name, in the order the player created them.
    #[serde(default)]
    pub named_plans: Option<IndexMap<String, OptimizationPlan>>,
    #[serde(default, rename = "useOnly5DotMods")]
    pub use_only_5_dot_mods: bool,
    #[serde(default)]
    pub slice_mods: bool,
    #[serde(default)]
    pub is_locked: bool,
}

impl Character {
    /// Rebuild a current-schema character from a v1.1/v1.2 record.
    ///
    /// Never fails: missing stat blocks become [`BaseStats::NULL`], missing
    /// flags are `false`, and a character unknown to `catalog` simply has no
    /// default settings.
    pub fn deserialize_version_one_two(
        legacy: LegacyCharacter,
        catalog: &dyn CharacterCatalog,
    ) -> Character {
        let LegacyCharacter {
            base_id,
            name,
            level,
            star_level,
            gear_level,
            gear_pieces,
            galactic_power,
            base_stats,
            total_stats,
            optimization_plan,
            named_plans,
            use_only_5_dot_mods,
            slice_mods,
            is_locked,
        } = legacy;

        let optimization_plan = if optimization_plan.name().is_empty() {
            optimization_plan.named(UNNAMED_TARGET)
        } else {
            optimization_plan
        };

        let plans = named_plans.unwrap_or_else(|| {
            IndexMap::from([(UNNAMED_TARGET.to_string(), optimization_plan.clone())])
        });

        let targets: Vec<OptimizationPlan> = plans
            .into_iter()
            .map(|(key, plan)| {
                if plan.name().is_empty() {
                    plan.named(key)
                } else {
                    plan
                }
            })
            .collect();

        let target = reconcile_selected_target(optimization_plan, &targets);

        let game_settings = GameSettings::placeholder(base_id.clone(), name);

        let player_values =
            PlayerValues::new(level, star_level, gear_level, gear_pieces, galactic_power)
                .with_stats(base_stats, total_stats);

        let minimum_mod_dots = if use_only_5_dot_mods {
            ModDots::FIVE
        } else {
            ModDots::ANY
        };
        let optimizer_settings = OptimizerSettings::new(
            Some(target),
            targets,
            minimum_mod_dots,
            slice_mods,
            is_locked,
        );

        let default_settings = catalog.settings_for(&base_id);

        Character::new(
            base_id,
            default_settings,
            Some(game_settings),
            Some(player_values),
            Some(optimizer_settings),
        )
    }
}

/// Old saves often stored the selected plan a second time as `"unnamed"`.
/// When a named plan holds the same configuration, select that one instead.
fn reconcile_selected_target(
    selected: OptimizationPlan,
    targets: &[OptimizationPlan],
) -> OptimizationPlan {
    if !selected.is_unnamed() {
        return selected;
    }

    targets
        .iter()
        .find(|candidate| candidate.rename(selected.name()) == selected)
        .cloned()
        .unwrap_or(selected)
}
