//! Built-in, per-character defaults supplied by the character catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::optimization_plan::OptimizationPlan;
use crate::error::DomainError;

/// Which kind of damage a character primarily deals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    #[default]
    Physical,
    Special,
    Mixed,
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Physical => write!(f, "physical"),
            Self::Special => write!(f, "special"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

impl FromStr for DamageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "physical" => Ok(Self::Physical),
            "special" => Ok(Self::Special),
            "mixed" => Ok(Self::Mixed),
            _ => Err(DomainError::parse(format!("Unknown damage type: {}", s))),
        }
    }
}

/// Catalog defaults for a single character: suggested targets and search tags.
///
/// These are never edited by the player. Player customizations live in
/// [`OptimizerSettings`](super::OptimizerSettings) and shadow these by name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSettings {
    #[serde(default)]
    targets: Vec<OptimizationPlan>,
    #[serde(default)]
    extra_tags: Vec<String>,
    #[serde(default)]
    damage_type: DamageType,
}

impl CharacterSettings {
    pub fn new(targets: Vec<OptimizationPlan>, damage_type: DamageType) -> Self {
        Self {
            targets,
            extra_tags: Vec::new(),
            damage_type,
        }
    }

    /// Builder: add search tags beyond the ones the game supplies.
    pub fn with_extra_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extra_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn targets(&self) -> &[OptimizationPlan] {
        &self.targets
    }

    /// The catalog target called `name`, if there is one.
    pub fn target(&self, name: &str) -> Option<&OptimizationPlan> {
        self.targets.iter().find(|target| target.name() == name)
    }

    pub fn extra_tags(&self) -> &[String] {
        &self.extra_tags
    }

    pub fn damage_type(&self) -> DamageType {
        self.damage_type
    }
}
