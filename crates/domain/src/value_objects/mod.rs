//! Value objects - Immutable objects defined by their attributes

mod base_stats;
mod character_settings;
mod game_settings;
mod optimization_plan;
mod optimizer_settings;
mod player_values;

pub use base_stats::BaseStats;
pub use character_settings::{CharacterSettings, DamageType};
pub use game_settings::{GameSettings, GameSettingsRecord, PLACEHOLDER_AVATAR};
pub use optimization_plan::{OptimizationPlan, WeightedStat, UNNAMED_TARGET};
pub use optimizer_settings::{ModDots, OptimizerSettings};
pub use player_values::PlayerValues;
