//! Event types for different topics.

use game_core::{ActorId, ItemHandle, Rank, SkillId, Slot, StatChanges, Vector2};
use serde::{Deserialize, Serialize};

/// Changes to the player's bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryEvent {
    /// Loot was offered to the bag. `dropped` units did not fit.
    ItemsGained {
        item: ItemHandle,
        placed: u16,
        dropped: u16,
        revision: u64,
    },

    ItemsRemoved {
        item: ItemHandle,
        quantity: u32,
        revision: u64,
    },

    ItemShifted { from: Slot, to: Slot, revision: u64 },
}

/// Skill resolution and progression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkillEvent {
    /// A use phase finished.
    Resolved {
        actor: ActorId,
        skill: SkillId,
        success: bool,
        gained: Option<(ItemHandle, u16)>,
    },

    /// Experience was credited; `ready` is set once the rank threshold is met.
    Trained {
        actor: ActorId,
        skill: SkillId,
        exp: u32,
        ready: bool,
    },

    RankedUp {
        actor: ActorId,
        skill: SkillId,
        rank: Rank,
        ability_points: u32,
    },

    /// A resource node has no harvests left.
    NodeDepleted { node: usize },
}

/// Stat pools changed since the last frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsEvent {
    pub actor: ActorId,
    pub changes: StatChanges,
}

/// Walk lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MovementEvent {
    Started {
        actor: ActorId,
        destination: Vector2,
    },

    Arrived {
        actor: ActorId,
        position: Vector2,
    },

    /// No complete path; the actor stays put.
    Refused {
        actor: ActorId,
        destination: Vector2,
    },
}

impl MovementEvent {
    pub fn actor(&self) -> ActorId {
        match self {
            Self::Started { actor, .. } | Self::Arrived { actor, .. } | Self::Refused { actor, .. } => {
                *actor
            }
        }
    }
}
