//! Optimization targets
//!
//! An `OptimizationPlan` is a named set of stat weights the optimizer scores
//! mod loadouts against. Players pick one of these as the "target" for a
//! character. The same wire shape is used by the current and the legacy
//! (v1.2) persistence formats.

use serde::{Deserialize, Serialize};

/// Name given to a plan that was never explicitly named by the player.
pub const UNNAMED_TARGET: &str = "unnamed";

fn default_upgrade_mods() -> bool {
    true
}

/// A named optimization target.
///
/// Equality is full value equality, *including* the name. To ask whether two
/// plans describe the same configuration under different names, compare
/// after a [`rename`](Self::rename).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationPlan {
    #[serde(default)]
    name: String,
    #[serde(default)]
    health: f64,
    #[serde(default)]
    protection: f64,
    #[serde(default)]
    speed: f64,
    #[serde(default)]
    crit_dmg: f64,
    #[serde(default)]
    potency: f64,
    #[serde(default)]
    tenacity: f64,
    #[serde(default)]
    phys_dmg: f64,
    #[serde(default)]
    spec_dmg: f64,
    #[serde(default)]
    crit_chance: f64,
    #[serde(default)]
    armor: f64,
    #[serde(default)]
    resistance: f64,
    #[serde(default)]
    accuracy: f64,
    #[serde(default)]
    crit_avoid: f64,
    #[serde(default = "default_upgrade_mods")]
    upgrade_mods: bool,
}

/// Stat a plan can weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightedStat {
    Health,
    Protection,
    Speed,
    CritDmg,
    Potency,
    Tenacity,
    PhysDmg,
    SpecDmg,
    CritChance,
    Armor,
    Resistance,
    Accuracy,
    CritAvoid,
}

impl WeightedStat {
    pub const ALL: [WeightedStat; 13] = [
        Self::Health,
        Self::Protection,
        Self::Speed,
        Self::CritDmg,
        Self::Potency,
        Self::Tenacity,
        Self::PhysDmg,
        Self::SpecDmg,
        Self::CritChance,
        Self::Armor,
        Self::Resistance,
        Self::Accuracy,
        Self::CritAvoid,
    ];
}

impl OptimizationPlan {
    /// Create a plan with every weight at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: 0.0,
            protection: 0.0,
            speed: 0.0,
            crit_dmg: 0.0,
            potency: 0.0,
            tenacity: 0.0,
            phys_dmg: 0.0,
            spec_dmg: 0.0,
            crit_chance: 0.0,
            armor: 0.0,
            resistance: 0.0,
            accuracy: 0.0,
            crit_avoid: 0.0,
            upgrade_mods: true,
        }
    }

    /// The fallback target used when a character has nothing better.
    pub fn unnamed() -> Self {
        Self::new(UNNAMED_TARGET)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builder: replace the name in place.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_unnamed(&self) -> bool {
        self.name == UNNAMED_TARGET
    }

    pub fn upgrade_mods(&self) -> bool {
        self.upgrade_mods
    }

    /// Returns the weight assigned to `stat`.
    pub fn weight(&self, stat: WeightedStat) -> f64 {
        match stat {
            WeightedStat::Health => self.health,
            WeightedStat::Protection => self.protection,
            WeightedStat::Speed => self.speed,
            WeightedStat::CritDmg => self.crit_dmg,
            WeightedStat::Potency => self.potency,
            WeightedStat::Tenacity => self.tenacity,
            WeightedStat::PhysDmg => self.phys_dmg,
            WeightedStat::SpecDmg => self.spec_dmg,
            WeightedStat::CritChance => self.crit_chance,
            WeightedStat::Armor => self.armor,
            WeightedStat::Resistance => self.resistance,
            WeightedStat::Accuracy => self.accuracy,
            WeightedStat::CritAvoid => self.crit_avoid,
        }
    }

    /// True when no stat carries any weight.
    pub fn is_blank(&self) -> bool {
        WeightedStat::ALL.iter().all(|stat| self.weight(*stat) == 0.0)
    }

    /// Same configuration under a different name.
    pub fn rename(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Builder: set a single stat weight.
    pub fn with_weight(mut self, stat: WeightedStat, value: f64) -> Self {
        let slot = match stat {
            WeightedStat::Health => &mut self.health,
            WeightedStat::Protection => &mut self.protection,
            WeightedStat::Speed => &mut self.speed,
            WeightedStat::CritDmg => &mut self.crit_dmg,
            WeightedStat::Potency => &mut self.potency,
            WeightedStat::Tenacity => &mut self.tenacity,
            WeightedStat::PhysDmg => &mut self.phys_dmg,
            WeightedStat::SpecDmg => &mut self.spec_dmg,
            WeightedStat::CritChance => &mut self.crit_chance,
            WeightedStat::Armor => &mut self.armor,
            WeightedStat::Resistance => &mut self.resistance,
            WeightedStat::Accuracy => &mut self.accuracy,
            WeightedStat::CritAvoid => &mut self.crit_avoid,
        };
        *slot = value;
        self
    }

    /// Builder: whether the optimizer may suggest upgrading mods.
    pub fn with_upgrade_mods(mut self, upgrade: bool) -> Self {
        self.upgrade_mods = upgrade;
        self
    }
}
