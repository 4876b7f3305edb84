//! Bag layout loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::BagLayout;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BagLayoutsRon {
    bags: Vec<BagLayout>,
}

/// Loader for bag shapes, selected at bag construction by `kind`.
///
/// Blocked cells cut irregular shapes out of the `rows x cols` rectangle:
///
/// ```ron
/// (
///     bags: [
///         (kind: "pouch", rows: 3, cols: 3, blocked: [(row: 0, col: 0)]),
///     ],
/// )
/// ```
pub struct BagLayoutLoader;

impl BagLayoutLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<BagLayout>> {
        let content = read_file(path)?;
        Self::parse(path, &content)
    }

    pub(crate) fn parse(path: &Path, content: &str) -> LoadResult<Vec<BagLayout>> {
        let data: BagLayoutsRon = parse_ron(path, content)?;

        let mut kinds = HashSet::new();
        for layout in &data.bags {
            anyhow::ensure!(
                kinds.insert(layout.kind.as_str()),
                "duplicate bag kind '{}'",
                layout.kind
            );
            anyhow::ensure!(
                layout.rows > 0 && layout.cols > 0,
                "bag '{}' has no cells",
                layout.kind
            );
            if let Some(slot) = layout
                .blocked
                .iter()
                .find(|slot| slot.row >= layout.rows || slot.col >= layout.cols)
            {
                anyhow::bail!("bag '{}' blocks {} outside its grid", layout.kind, slot);
            }
        }
        Ok(data.bags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_blocked_cells() {
        let text = r#"(bags: [(kind: "pouch", rows: 2, cols: 2, blocked: [(row: 1, col: 1)])])"#;
        let bags = BagLayoutLoader::parse(Path::new("bags.ron"), text).unwrap();
        assert_eq!(bags[0].usable_cells(), 3);
    }

    #[test]
    fn blocked_defaults_to_empty() {
        let text = r#"(bags: [(kind: "box", rows: 1, cols: 4)])"#;
        let bags = BagLayoutLoader::parse(Path::new("bags.ron"), text).unwrap();
        assert!(bags[0].blocked.is_empty());
    }

    #[test]
    fn rejects_blocked_cell_outside_grid() {
        let text = r#"(bags: [(kind: "pouch", rows: 2, cols: 2, blocked: [(row: 2, col: 0)])])"#;
        assert!(BagLayoutLoader::parse(Path::new("bags.ron"), text).is_err());
    }
}
