use std::sync::Arc;
use std::time::Duration;

use super::definition::{RankProfile, SkillDefinition};
use super::error::SkillError;
use super::rank::Rank;
use crate::types::SkillId;

/// One actor's learned copy of a skill.
///
/// The rank only ever increases; experience resets on each rank up.
#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
    definition: Arc<SkillDefinition>,
    rank_index: usize,
    exp: u32,
    cooldown_remaining: Duration,
}

impl Skill {
    /// Learns a skill at Novice.
    pub fn new(definition: Arc<SkillDefinition>) -> Result<Self, SkillError> {
        match definition.ranks.len() {
            0 => return Err(SkillError::NoRanks(definition.id)),
            count if count > Rank::count() => {
                return Err(SkillError::TooManyRanks {
                    id: definition.id,
                    count,
                });
            }
            _ => {}
        }
        Ok(Self {
            definition,
            rank_index: 0,
            exp: 0,
            cooldown_remaining: Duration::ZERO,
        })
    }

    pub fn id(&self) -> SkillId {
        self.definition.id
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn definition(&self) -> &Arc<SkillDefinition> {
        &self.definition
    }

    pub fn rank(&self) -> Rank {
        Rank::from_index(self.rank_index).unwrap_or(Rank::MAX)
    }

    pub fn rank_index(&self) -> usize {
        self.rank_index
    }

    /// Tuning for the current rank.
    pub fn profile(&self) -> RankProfile {
        self.definition
            .profile(self.rank_index)
            .copied()
            .unwrap_or_default()
    }

    pub fn exp(&self) -> u32 {
        self.exp
    }

    pub fn is_max_rank(&self) -> bool {
        self.rank_index + 1 >= self.definition.ranks.len()
    }

    pub fn load_time(&self) -> Duration {
        self.profile().load_time()
    }

    pub fn use_time(&self) -> Duration {
        self.profile().use_time()
    }

    pub fn cooldown(&self) -> Duration {
        self.profile().cooldown()
    }

    /// Adds experience, capped at the current rank's threshold.
    ///
    /// Returns `true` if the skill can now rank up.
    pub fn train(&mut self, amount: u32) -> bool {
        let threshold = self.profile().exp_threshold;
        self.exp = self.exp.saturating_add(amount).min(threshold);
        self.can_rank_up()
    }

    pub fn can_rank_up(&self) -> bool {
        !self.is_max_rank() && self.exp >= self.profile().exp_threshold
    }

    /// Spends ability points from `ability_points` to advance one rank.
    pub fn rank_up(&mut self, ability_points: &mut u32) -> Result<Rank, SkillError> {
        if self.is_max_rank() {
            return Err(SkillError::MaxRank(self.id()));
        }
        let profile = self.profile();
        if self.exp < profile.exp_threshold {
            return Err(SkillError::NotEnoughExp {
                id: self.id(),
                have: self.exp,
                need: profile.exp_threshold,
            });
        }
        if *ability_points < profile.ap_cost {
            return Err(SkillError::NotEnoughAp {
                required: profile.ap_cost,
                available: *ability_points,
            });
        }

        *ability_points -= profile.ap_cost;
        self.rank_index += 1;
        self.exp = 0;
        Ok(self.rank())
    }

    pub fn start_cooldown(&mut self) {
        self.cooldown_remaining = self.cooldown();
    }

    pub fn tick_cooldown(&mut self, delta: Duration) {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(delta);
    }

    pub fn cooldown_remaining(&self) -> Duration {
        self.cooldown_remaining
    }

    pub fn is_on_cooldown(&self) -> bool {
        !self.cooldown_remaining.is_zero()
    }
}
