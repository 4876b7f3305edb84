use std::cell::RefCell;
use std::rc::Rc;

use crate::types::{ActorId, ItemHandle, SkillId, Vector2};

/// A map resource an actor can gather from with a skill.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarvestTarget {
    pub position: Vector2,
    pub item: ItemHandle,
    pub quantity: u16,
}

impl HarvestTarget {
    pub fn new(position: Vector2, item: ItemHandle, quantity: u16) -> Self {
        Self {
            position,
            item,
            quantity,
        }
    }
}

/// Outcome of one completed skill use.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillOutcome {
    pub actor: ActorId,
    pub skill: SkillId,
    pub success: bool,
    /// Item and quantity gathered, for successful harvests.
    pub gained: Option<(ItemHandle, u16)>,
    /// Resource the skill was used on, so depletion logic can find it.
    pub target: Option<HarvestTarget>,
}

/// Receives skill outcomes; training and resource depletion subscribe downstream.
pub trait ResultHandler {
    fn publish(&mut self, outcome: SkillOutcome);
}

/// Handler that drops every outcome.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullResults;

impl ResultHandler for NullResults {
    fn publish(&mut self, _outcome: SkillOutcome) {}
}

/// Handler that keeps outcomes in a shared log.
///
/// Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct OutcomeLog {
    outcomes: Rc<RefCell<Vec<SkillOutcome>>>,
}

impl OutcomeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> Vec<SkillOutcome> {
        self.outcomes.borrow().clone()
    }

    pub fn drain(&self) -> Vec<SkillOutcome> {
        self.outcomes.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.borrow().is_empty()
    }
}

impl ResultHandler for OutcomeLog {
    fn publish(&mut self, outcome: SkillOutcome) {
        self.outcomes.borrow_mut().push(outcome);
    }
}
