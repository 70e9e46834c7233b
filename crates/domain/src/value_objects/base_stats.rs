//! Flat stat block reported for a character.

use serde::{Deserialize, Serialize};

/// Character stats as reported by the game, either before mods (base) or
/// with everything applied (total).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseStats {
    pub health: f64,
    pub protection: f64,
    pub speed: f64,
    pub crit_dmg: f64,
    pub potency: f64,
    pub tenacity: f64,
    pub phys_dmg: f64,
    pub spec_dmg: f64,
    pub phys_crit_chance: f64,
    pub spec_crit_chance: f64,
    pub armor: f64,
    pub resistance: f64,
    pub accuracy: f64,
    pub crit_avoid: f64,
}

impl BaseStats {
    /// Explicit "no stats known" block. Valid to use everywhere a stat block
    /// is expected; every value is zero.
    pub const NULL: BaseStats = BaseStats {
        health: 0.0,
        protection: 0.0,
        speed: 0.0,
        crit_dmg: 0.0,
        potency: 0.0,
        tenacity: 0.0,
        phys_dmg: 0.0,
        spec_dmg: 0.0,
        phys_crit_chance: 0.0,
        spec_crit_chance: 0.0,
        armor: 0.0,
        resistance: 0.0,
        accuracy: 0.0,
        crit_avoid: 0.0,
    };

    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}
