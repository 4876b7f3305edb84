//! Skill definitions, per-actor progression and the skill book.
//!
//! A [`SkillDefinition`] is shared design data; a [`Skill`] is one actor's
//! learned copy of it (rank, experience, cooldown).
mod book;
mod definition;
mod error;
mod learned;
mod rank;

pub use book::SkillBook;
pub use definition::{RankProfile, SkillDefinition};
pub use error::SkillError;
pub use learned::Skill;
pub use rank::Rank;
