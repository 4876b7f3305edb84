//! Data-driven content definitions and loaders.
//!
//! This crate reads the game's design data from RON/TOML files:
//! - Item catalog (RON)
//! - Bag layouts (RON)
//! - Skill definitions and per-rank tuning (RON)
//! - Maps with resource nodes and mob spawns (RON)
//! - Game configuration (TOML)
//!
//! Every record is decoded straight into a typed game-core struct and checked
//! once at load time; nothing downstream looks data up by string key.

#[cfg(feature = "loaders")]
pub mod content;
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use content::Content;
#[cfg(feature = "loaders")]
pub use loaders::{
    BagLayoutLoader, ConfigLoader, ContentFactory, ItemLoader, LoadResult, MapDefinition,
    MapLoader, MobSpawn, ResourceNode, SkillLoader,
};
