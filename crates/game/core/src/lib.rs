//! Engine-independent gameplay core.
//!
//! `game-core` holds the rules that do not depend on any renderer or asset
//! pipeline: the grid inventory ([`bag`]), actor stats and skills, and the
//! controllers that sequence movement and skill use on top of
//! [`state_machine`]. Everything outside (navigation, visuals, outcome
//! consumers, randomness) is reached through the traits in [`env`].
pub mod bag;
pub mod config;
pub mod controller;
pub mod env;
pub mod error;
pub mod skill;
pub mod stats;
pub mod types;

pub use bag::{BagError, BagLayout, BagStack, CellState, Footprint, GridBag, Slot};
pub use config::GameConfig;
pub use controller::{
    ActorBody, ActorContext, ActorController, ActorError, MovementController, MovementError,
    MovementState, SkillController, SkillState,
};
pub use env::{
    HarvestTarget, ItemCatalog, ItemCategory, ItemDefinition, ItemOracle, NavigationBackend,
    NullResults, NullVisuals, OutcomeLog, PathStatus, PcgRng, ResultHandler, RngOracle,
    SkillOutcome, VisualRecorder, VisualSignal, VisualSink,
};
pub use error::{ErrorSeverity, GameError};
pub use skill::{Rank, RankProfile, Skill, SkillBook, SkillDefinition, SkillError};
pub use stats::{ActorStats, DerivedStats, StatBlock, StatChanges, StatKind, StatPool};
pub use types::{ActorId, ItemHandle, SkillId, Vector2};
