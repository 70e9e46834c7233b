//! Player-specific progress for a character.

use serde::{Deserialize, Serialize};

use super::base_stats::BaseStats;

/// Where the player has taken a character: level, stars, gear and power.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerValues {
    level: u32,
    stars: u8,
    gear_level: u32,
    #[serde(default)]
    gear_pieces: Vec<String>,
    galactic_power: u64,
    #[serde(default)]
    base_stats: BaseStats,
    #[serde(default)]
    total_stats: BaseStats,
}

impl PlayerValues {
    /// Create player values with null stat blocks.
    pub fn new(
        level: u32,
        stars: u8,
        gear_level: u32,
        gear_pieces: Vec<String>,
        galactic_power: u64,
    ) -> Self {
        Self {
            level,
            stars,
            gear_level,
            gear_pieces,
            galactic_power,
            base_stats: BaseStats::NULL,
            total_stats: BaseStats::NULL,
        }
    }

    /// Builder: attach stat blocks. Missing blocks stay the null sentinel.
    pub fn with_stats(mut self, base: Option<BaseStats>, total: Option<BaseStats>) -> Self {
        self.base_stats = base.unwrap_or(BaseStats::NULL);
        self.total_stats = total.unwrap_or(BaseStats::NULL);
        self
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn gear_level(&self) -> u32 {
        self.gear_level
    }

    pub fn gear_pieces(&self) -> &[String] {
        &self.gear_pieces
    }

    pub fn galactic_power(&self) -> u64 {
        self.galactic_power
    }

    pub fn base_stats(&self) -> &BaseStats {
        &self.base_stats
    }

    pub fn total_stats(&self) -> &BaseStats {
        &self.total_stats
    }
}
