use std::time::Duration;

use crate::stats::StatBlock;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// How long the cancel fade plays before the skill machine returns to idle.
    pub cancel_fade_ms: u32,
    /// Distance under which an actor counts as standing on its destination.
    pub arrival_epsilon: f32,
    /// Bag layout given to a fresh player.
    pub default_bag: String,
    /// Ability points granted to a fresh player.
    pub starting_ability_points: u32,
    /// Base pools for a fresh player.
    pub starting_stats: StatBlock,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of skills one actor can have learned at once.
    pub const MAX_SKILLS: usize = 32;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CANCEL_FADE_MS: u32 = 400;
    pub const DEFAULT_ARRIVAL_EPSILON: f32 = 0.05;
    pub const DEFAULT_BAG: &'static str = "starter";
    pub const DEFAULT_STARTING_AP: u32 = 10;

    pub fn new() -> Self {
        Self {
            cancel_fade_ms: Self::DEFAULT_CANCEL_FADE_MS,
            arrival_epsilon: Self::DEFAULT_ARRIVAL_EPSILON,
            default_bag: Self::DEFAULT_BAG.to_owned(),
            starting_ability_points: Self::DEFAULT_STARTING_AP,
            starting_stats: StatBlock::default(),
        }
    }

    pub fn cancel_fade(&self) -> Duration {
        Duration::from_millis(u64::from(self.cancel_fade_ms))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
