//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Missing keys fall back to [`GameConfig::default`].
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> LoadResult<GameConfig> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "config not found, using defaults");
            return Ok(GameConfig::default());
        }
        Self::load(path)
    }

    pub(crate) fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        anyhow::ensure!(
            config.arrival_epsilon >= 0.0,
            "arrival_epsilon must not be negative"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse("cancel_fade_ms = 250\n").unwrap();
        assert_eq!(config.cancel_fade_ms, 250);
        assert_eq!(config.default_bag, GameConfig::DEFAULT_BAG);
    }

    #[test]
    fn reads_starting_stats_table() {
        let text = r#"
            [starting_stats]
            hp = 60.0
            mp = 20.0
            str = 15.0
            int = 12.0
            dex = 14.0
            luck = 8.0
        "#;
        let config = ConfigLoader::parse(text).unwrap();
        assert_eq!(config.starting_stats.hp, 60.0);
    }
}
