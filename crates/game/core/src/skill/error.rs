use std::time::Duration;

use crate::error::{ErrorSeverity, GameError};
use crate::types::SkillId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkillError {
    #[error("{0} is not learned")]
    Unknown(SkillId),

    #[error("{0} is already learned")]
    AlreadyLearned(SkillId),

    #[error("skill book is full")]
    BookFull,

    #[error("{0} defines no ranks")]
    NoRanks(SkillId),

    #[error("{id} defines {count} ranks, more than the rank sequence holds")]
    TooManyRanks { id: SkillId, count: usize },

    #[error("{0} is already at its highest rank")]
    MaxRank(SkillId),

    #[error("{id} needs {need} exp to rank up, has {have}")]
    NotEnoughExp { id: SkillId, have: u32, need: u32 },

    #[error("rank up needs {required} AP, only {available} available")]
    NotEnoughAp { required: u32, available: u32 },

    #[error("{id} is cooling down ({remaining:?} left)")]
    OnCooldown { id: SkillId, remaining: Duration },

    #[error("another skill is in progress")]
    Busy,
}

impl GameError for SkillError {
    fn severity(&self) -> ErrorSeverity {
        use SkillError::*;
        match self {
            OnCooldown { .. } | Busy | NotEnoughExp { .. } | NotEnoughAp { .. } => {
                ErrorSeverity::Recoverable
            }
            Unknown(_) | AlreadyLearned(_) | BookFull | MaxRank(_) => ErrorSeverity::Validation,
            NoRanks(_) | TooManyRanks { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use SkillError::*;
        match self {
            Unknown(_) => "SKILL_UNKNOWN",
            AlreadyLearned(_) => "SKILL_ALREADY_LEARNED",
            BookFull => "SKILL_BOOK_FULL",
            NoRanks(_) => "SKILL_NO_RANKS",
            TooManyRanks { .. } => "SKILL_TOO_MANY_RANKS",
            MaxRank(_) => "SKILL_MAX_RANK",
            NotEnoughExp { .. } => "SKILL_NOT_ENOUGH_EXP",
            NotEnoughAp { .. } => "SKILL_NOT_ENOUGH_AP",
            OnCooldown { .. } => "SKILL_ON_COOLDOWN",
            Busy => "SKILL_BUSY",
        }
    }
}
