use std::sync::Arc;
use std::time::Duration;

use arrayvec::ArrayVec;

use super::definition::SkillDefinition;
use super::error::SkillError;
use super::learned::Skill;
use super::rank::Rank;
use crate::config::GameConfig;
use crate::types::SkillId;

/// Skills an actor has learned, plus the ability points it can spend on them.
#[derive(Clone, Debug, Default)]
pub struct SkillBook {
    skills: ArrayVec<Skill, { GameConfig::MAX_SKILLS }>,
    ability_points: u32,
}

impl SkillBook {
    pub fn new(ability_points: u32) -> Self {
        Self {
            skills: ArrayVec::new(),
            ability_points,
        }
    }

    pub fn learn(&mut self, definition: Arc<SkillDefinition>) -> Result<(), SkillError> {
        if self.get(definition.id).is_some() {
            return Err(SkillError::AlreadyLearned(definition.id));
        }
        let skill = Skill::new(definition)?;
        self.skills
            .try_push(skill)
            .map_err(|_| SkillError::BookFull)?;
        Ok(())
    }

    pub fn get(&self, id: SkillId) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.id() == id)
    }

    pub fn get_mut(&mut self, id: SkillId) -> Option<&mut Skill> {
        self.skills.iter_mut().find(|skill| skill.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn ability_points(&self) -> u32 {
        self.ability_points
    }

    pub fn grant_ability_points(&mut self, amount: u32) {
        self.ability_points = self.ability_points.saturating_add(amount);
    }

    /// Adds training experience. Returns `true` if the skill can now rank up.
    pub fn train(&mut self, id: SkillId, amount: u32) -> Result<bool, SkillError> {
        let skill = self.get_mut(id).ok_or(SkillError::Unknown(id))?;
        Ok(skill.train(amount))
    }

    pub fn rank_up(&mut self, id: SkillId) -> Result<Rank, SkillError> {
        let skill = self
            .skills
            .iter_mut()
            .find(|skill| skill.id() == id)
            .ok_or(SkillError::Unknown(id))?;
        skill.rank_up(&mut self.ability_points)
    }

    pub fn tick_cooldowns(&mut self, delta: Duration) {
        for skill in &mut self.skills {
            skill.tick_cooldown(delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::RankProfile;

    fn definition(id: u32) -> Arc<SkillDefinition> {
        let profile = RankProfile {
            exp_threshold: 10,
            ap_cost: 4,
            ..RankProfile::default()
        };
        Arc::new(SkillDefinition::new(
            SkillId(id),
            format!("skill-{id}"),
            vec![profile; 4],
        ))
    }

    #[test]
    fn learn_once() {
        let mut book = SkillBook::new(0);
        book.learn(definition(1)).unwrap();
        assert_eq!(
            book.learn(definition(1)),
            Err(SkillError::AlreadyLearned(SkillId(1)))
        );
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn book_capacity_is_bounded() {
        let mut book = SkillBook::new(0);
        for id in 0..GameConfig::MAX_SKILLS as u32 {
            book.learn(definition(id)).unwrap();
        }
        assert_eq!(book.learn(definition(999)), Err(SkillError::BookFull));
    }

    #[test]
    fn rank_up_spends_book_points() {
        let mut book = SkillBook::new(5);
        book.learn(definition(7)).unwrap();

        assert_eq!(book.train(SkillId(7), 10), Ok(true));
        assert_eq!(book.rank_up(SkillId(7)), Ok(Rank::F));
        assert_eq!(book.ability_points(), 1);
        assert_eq!(book.rank_up(SkillId(8)), Err(SkillError::Unknown(SkillId(8))));
    }
}
