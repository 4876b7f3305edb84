//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemCatalogRon {
    items: Vec<ItemDefinition>,
}

/// Loader for the item catalog.
///
/// ```ron
/// (
///     items: [
///         (handle: ItemHandle(1), name: "Copper Ore", category: Material,
///          width: 1, height: 1, max_stack: 20),
///     ],
/// )
/// ```
pub struct ItemLoader;

impl ItemLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::parse(path, &content)
    }

    pub(crate) fn parse(path: &Path, content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalogRon = parse_ron(path, content)?;
        Self::validate(&catalog.items)?;
        Ok(catalog.items)
    }

    fn validate(items: &[ItemDefinition]) -> LoadResult<()> {
        let mut seen = HashSet::new();
        for item in items {
            anyhow::ensure!(
                seen.insert(item.handle),
                "duplicate item handle {}",
                item.handle
            );
            anyhow::ensure!(
                item.width > 0 && item.height > 0,
                "item '{}' has an empty footprint",
                item.name
            );
            anyhow::ensure!(
                item.max_stack > 0,
                "item '{}' has max_stack 0",
                item.name
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_footprint() {
        let text = r#"(items: [
            (handle: ItemHandle(1), name: "Ghost", category: Misc, width: 0, height: 1, max_stack: 1),
        ])"#;
        let error = ItemLoader::parse(Path::new("items.ron"), text).unwrap_err();
        assert!(error.to_string().contains("empty footprint"));
    }

    #[test]
    fn rejects_duplicate_handles() {
        let text = r#"(items: [
            (handle: ItemHandle(1), name: "A", category: Misc, width: 1, height: 1, max_stack: 1),
            (handle: ItemHandle(1), name: "B", category: Misc, width: 1, height: 1, max_stack: 1),
        ])"#;
        assert!(ItemLoader::parse(Path::new("items.ron"), text).is_err());
    }
}
