//! Content loaders for reading game data from files.
//!
//! Each loader parses one file format into game-core types and rejects
//! records that would break core invariants (zero-size footprints, skills
//! without ranks, duplicate identifiers).

pub mod bag;
pub mod config;
pub mod factory;
pub mod item;
pub mod map;
pub mod skill;

pub use bag::BagLayoutLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use map::{MapDefinition, MapLoader, MobSpawn, ResourceNode};
pub use skill::SkillLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Parses RON text, naming the file in the error.
pub(crate) fn parse_ron<T: serde::de::DeserializeOwned>(path: &Path, text: &str) -> LoadResult<T> {
    ron::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse RON at {}: {}", path.display(), e))
}
