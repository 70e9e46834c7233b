//! Per-character optimizer configuration chosen by the player.
//!
//! Holds the selected target, the player's named targets and the flags that
//! constrain which mods the optimizer may move onto the character.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::optimization_plan::OptimizationPlan;
use crate::error::DomainError;

// ============================================================================
// ModDots
// ============================================================================

/// Minimum mod rarity ("dots") the optimizer may use for a character.
///
/// `ModDots::ANY` (1) is the lowest rarity that exists, so it filters nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ModDots(u8);

impl ModDots {
    pub const ANY: ModDots = ModDots(1);
    pub const FIVE: ModDots = ModDots(5);
    pub const MAX: u8 = 6;

    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `dots` is outside `1..=6`.
    pub fn new(dots: u8) -> Result<Self, DomainError> {
        if !(1..=Self::MAX).contains(&dots) {
            return Err(DomainError::validation(format!(
                "Mod rarity must be between 1 and {}, got {}",
                Self::MAX,
                dots
            )));
        }
        Ok(Self(dots))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// True when every mod passes the threshold.
    pub fn is_unfiltered(self) -> bool {
        self == Self::ANY
    }
}

impl Default for ModDots {
    fn default() -> Self {
        Self::ANY
    }
}

impl fmt::Display for ModDots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-dot", self.0)
    }
}

impl TryFrom<u8> for ModDots {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModDots> for u8 {
    fn from(value: ModDots) -> u8 {
        value.0
    }
}

// ============================================================================
// OptimizerSettings
// ============================================================================

/// Optimizer configuration for one character.
///
/// # Invariants
///
/// - Target names are unique within `targets`
/// - `target`, when it names an entry of `targets`, holds that entry's value;
///   the stored entry wins over a diverging selection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "OptimizerSettingsRecord")]
pub struct OptimizerSettings {
    target: Option<OptimizationPlan>,
    targets: Vec<OptimizationPlan>,
    minimum_mod_dots: ModDots,
    slice_mods: bool,
    is_locked: bool,
}

impl OptimizerSettings {
    pub fn new(
        target: Option<OptimizationPlan>,
        targets: Vec<OptimizationPlan>,
        minimum_mod_dots: ModDots,
        slice_mods: bool,
        is_locked: bool,
    ) -> Self {
        let targets = unique_by_name(targets);
        Self {
            target: target.map(|selected| bind_selection(selected, &targets)),
            targets,
            minimum_mod_dots,
            slice_mods,
            is_locked,
        }
    }

    // ========== Getters ==========

    /// The currently selected target, if any.
    pub fn target(&self) -> Option<&OptimizationPlan> {
        self.target.as_ref()
    }

    pub fn targets(&self) -> &[OptimizationPlan] {
        &self.targets
    }

    pub fn minimum_mod_dots(&self) -> ModDots {
        self.minimum_mod_dots
    }

    pub fn slice_mods(&self) -> bool {
        self.slice_mods
    }

    pub fn is_locked(&self) -> bool {
        self.is_locked
    }

    // ========== Copy-on-write updates ==========

    /// Select a target without touching the named collection.
    ///
    /// Selecting a stored name selects the stored value.
    pub fn with_target(mut self, target: Option<OptimizationPlan>) -> Self {
        self.target = target.map(|selected| bind_selection(selected, &self.targets));
        self
    }

    /// Store `target` under its name (replacing in place, or appending) and
    /// select it.
    pub fn with_target_override(mut self, target: OptimizationPlan) -> Self {
        match self
            .targets
            .iter_mut()
            .find(|existing| existing.name() == target.name())
        {
            Some(existing) => *existing = target.clone(),
            None => self.targets.push(target.clone()),
        }
        self.target = Some(target);
        self
    }

    /// Remove the target called `name`. Unknown names are ignored.
    pub fn with_deleted_target(mut self, name: &str) -> Self {
        self.targets.retain(|target| target.name() != name);
        if self.target.as_ref().is_some_and(|t| t.name() == name) {
            self.target = None;
        }
        self
    }

    /// Replace the whole named collection.
    ///
    /// The selection survives only if a target of the same name is still
    /// present, and then points at the new value.
    pub fn with_targets(mut self, targets: Vec<OptimizationPlan>) -> Self {
        self.targets = unique_by_name(targets);
        self.target = self.target.take().and_then(|selected| {
            self.targets
                .iter()
                .find(|target| target.name() == selected.name())
                .cloned()
        });
        self
    }

    pub fn lock(mut self) -> Self {
        self.is_locked = true;
        self
    }

    pub fn unlock(mut self) -> Self {
        self.is_locked = false;
        self
    }

    pub fn with_mod_slicing(mut self, slice_mods: bool) -> Self {
        self.slice_mods = slice_mods;
        self
    }

    pub fn with_minimum_mod_dots(mut self, dots: ModDots) -> Self {
        self.minimum_mod_dots = dots;
        self
    }
}

/// Later entries win, keeping the position of the first occurrence.
fn unique_by_name(targets: Vec<OptimizationPlan>) -> Vec<OptimizationPlan> {
    let mut by_name: IndexMap<String, OptimizationPlan> = IndexMap::with_capacity(targets.len());
    for target in targets {
        by_name.insert(target.name().to_string(), target);
    }
    by_name.into_values().collect()
}

/// The stored target named like `selected`, or `selected` itself.
fn bind_selection(selected: OptimizationPlan, targets: &[OptimizationPlan]) -> OptimizationPlan {
    targets
        .iter()
        .find(|target| target.name() == selected.name())
        .cloned()
        .unwrap_or(selected)
}

/// Persisted shape; normalized through [`OptimizerSettings::new`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptimizerSettingsRecord {
    #[serde(default)]
    target: Option<OptimizationPlan>,
    #[serde(default)]
    targets: Vec<OptimizationPlan>,
    #[serde(default)]
    minimum_mod_dots: ModDots,
    #[serde(default)]
    slice_mods: bool,
    #[serde(default)]
    is_locked: bool,
}

impl From<OptimizerSettingsRecord> for OptimizerSettings {
    fn from(record: OptimizerSettingsRecord) -> Self {
        Self::new(
            record.target,
            record.targets,
            record.minimum_mod_dots,
            record.slice_mods,
            record.is_locked,
        )
    }
}
