//! Mods optimizer domain: the roster character aggregate and its value objects.
//!
//! Nothing in this crate performs I/O. Catalog defaults are reached through the
//! [`CharacterCatalog`] port so callers decide where they come from.

pub mod aggregates;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::{Character, LegacyCharacter};
pub use catalog::CharacterCatalog;
pub use error::DomainError;
pub use ids::CharacterId;
pub use value_objects::{
    BaseStats, CharacterSettings, DamageType, GameSettings, GameSettingsRecord, ModDots,
    OptimizationPlan, OptimizerSettings, PlayerValues, WeightedStat, PLACEHOLDER_AVATAR,
    UNNAMED_TARGET,
};
