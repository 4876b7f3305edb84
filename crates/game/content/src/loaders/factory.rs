//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use crate::content::Content;
use crate::loaders::{
    BagLayoutLoader, ConfigLoader, ItemLoader, LoadResult, MapDefinition, MapLoader, SkillLoader,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// ├── bags.ron
/// ├── skills.ron
/// └── maps/
///     └── meadow.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<game_core::GameConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join("config.toml"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<game_core::ItemDefinition>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load bag layouts from `bags.ron`.
    pub fn load_bags(&self) -> LoadResult<Vec<game_core::BagLayout>> {
        BagLayoutLoader::load(&self.data_dir.join("bags.ron"))
    }

    /// Load skill definitions from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<Vec<std::sync::Arc<game_core::SkillDefinition>>> {
        SkillLoader::load(&self.data_dir.join("skills.ron"))
    }

    /// Load a map from `maps/{map_name}.ron`.
    pub fn load_map(&self, map_name: &str) -> LoadResult<MapDefinition> {
        let path = self.data_dir.join("maps").join(format!("{map_name}.ron"));
        MapLoader::load(&path)
    }

    /// Loads every file and cross-checks references between them.
    pub fn load_all(&self, map_name: &str) -> LoadResult<Content> {
        let content = Content::new(
            self.load_config()?,
            self.load_items()?,
            self.load_bags()?,
            self.load_skills()?,
            self.load_map(map_name)?,
        )?;
        tracing::info!(
            data_dir = %self.data_dir.display(),
            items = content.items().len(),
            bags = content.bags().len(),
            skills = content.skills().len(),
            map = %content.map().name,
            "content loaded"
        );
        Ok(content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path().join("nope"));
        let error = factory.load_all("meadow").unwrap_err();
        assert!(error.to_string().contains("items.ron"));
    }
}
