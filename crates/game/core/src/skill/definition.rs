use std::time::Duration;

use crate::types::SkillId;

/// Tuning for one rank of a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankProfile {
    pub load_ms: u32,
    pub use_ms: u32,
    pub cooldown_ms: u32,
    /// Experience needed before the next rank can be bought.
    pub exp_threshold: u32,
    /// Ability points spent to advance from this rank.
    pub ap_cost: u32,
    /// Chance, in percent, that a use succeeds.
    pub success_rate: u8,
    pub exp_per_use: u32,
}

impl RankProfile {
    pub fn load_time(&self) -> Duration {
        Duration::from_millis(u64::from(self.load_ms))
    }

    pub fn use_time(&self) -> Duration {
        Duration::from_millis(u64::from(self.use_ms))
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(u64::from(self.cooldown_ms))
    }
}

/// Design data for a skill: one [`RankProfile`] per reachable rank, in rank order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub id: SkillId,
    pub name: String,
    pub ranks: Vec<RankProfile>,
}

impl SkillDefinition {
    pub fn new(id: SkillId, name: impl Into<String>, ranks: Vec<RankProfile>) -> Self {
        Self {
            id,
            name: name.into(),
            ranks,
        }
    }

    pub fn profile(&self, rank_index: usize) -> Option<&RankProfile> {
        self.ranks.get(rank_index)
    }
}
