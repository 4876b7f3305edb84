//! Map data loader.
//!
//! Maps are grids of unit tiles addressed by integer `(x, y)`; world
//! positions map to tiles by rounding. Every tile is floor unless listed in
//! `walls`.

use std::collections::HashSet;
use std::path::Path;

use game_core::{ItemHandle, SkillId, Vector2};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron, read_file};

/// A gatherable resource placed on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceNode {
    pub position: Vector2,
    pub item: ItemHandle,
    /// Units gained per successful harvest.
    pub quantity: u16,
    pub skill: SkillId,
    /// Successful harvests before the node is depleted.
    pub charges: u32,
}

/// A wandering mob placed on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobSpawn {
    pub name: String,
    pub position: Vector2,
    pub wander_radius: f32,
}

/// Map data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    name: String,
    dimensions: (u32, u32),
    #[serde(default)]
    walls: Vec<(i32, i32)>,
    spawn: Vector2,
    #[serde(default)]
    resources: Vec<ResourceNode>,
    #[serde(default)]
    mobs: Vec<MobSpawn>,
}

/// Decoded map: terrain plus entity placement.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDefinition {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub walls: HashSet<(i32, i32)>,
    pub spawn: Vector2,
    pub resources: Vec<ResourceNode>,
    pub mobs: Vec<MobSpawn>,
}

impl MapDefinition {
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && !self.walls.contains(&(x, y))
    }

    /// Tile under a world position.
    pub fn tile_of(position: Vector2) -> (i32, i32) {
        (position.x.round() as i32, position.y.round() as i32)
    }

    fn is_walkable_at(&self, position: Vector2) -> bool {
        let (x, y) = Self::tile_of(position);
        self.is_walkable(x, y)
    }
}

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    pub fn load(path: &Path) -> LoadResult<MapDefinition> {
        let content = read_file(path)?;
        Self::parse(path, &content)
    }

    pub(crate) fn parse(path: &Path, content: &str) -> LoadResult<MapDefinition> {
        let data: MapDataRon = parse_ron(path, content)?;
        let (width, height) = data.dimensions;
        anyhow::ensure!(width > 0 && height > 0, "map '{}' is empty", data.name);

        let map = MapDefinition {
            name: data.name,
            width,
            height,
            walls: data.walls.into_iter().collect(),
            spawn: data.spawn,
            resources: data.resources,
            mobs: data.mobs,
        };

        anyhow::ensure!(
            map.is_walkable_at(map.spawn),
            "map '{}' spawns the player on a wall or outside the map",
            map.name
        );
        for node in &map.resources {
            anyhow::ensure!(
                map.is_walkable_at(node.position),
                "resource at {} on map '{}' is not reachable",
                node.position,
                map.name
            );
        }
        for mob in &map.mobs {
            anyhow::ensure!(
                map.is_walkable_at(mob.position),
                "mob '{}' on map '{}' spawns on a wall",
                mob.name,
                map.name
            );
            anyhow::ensure!(
                mob.wander_radius.is_finite() && mob.wander_radius >= 0.0,
                "mob '{}' on map '{}' has wander radius {}",
                mob.name,
                map.name,
                mob.wander_radius
            );
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_override_floor() {
        let text = r#"(
            name: "room",
            dimensions: (3, 2),
            walls: [(1, 0)],
            spawn: (x: 0.0, y: 0.0),
        )"#;
        let map = MapLoader::parse(Path::new("room.ron"), text).unwrap();
        assert!(map.is_walkable(0, 0));
        assert!(!map.is_walkable(1, 0));
        assert!(!map.is_walkable(3, 0));
        assert!(map.resources.is_empty());
    }

    #[test]
    fn rejects_spawn_on_wall() {
        let text = r#"(
            name: "room",
            dimensions: (2, 2),
            walls: [(0, 0)],
            spawn: (x: 0.2, y: -0.3),
        )"#;
        assert!(MapLoader::parse(Path::new("room.ron"), text).is_err());
    }

    #[test]
    fn rejects_negative_wander_radius() {
        let text = r#"(
            name: "room",
            dimensions: (2, 2),
            spawn: (x: 0.0, y: 0.0),
            mobs: [(name: "Fox", position: (x: 1.0, y: 1.0), wander_radius: -2.0)],
        )"#;
        let error = MapLoader::parse(Path::new("room.ron"), text).unwrap_err();
        assert!(error.to_string().contains("wander radius"));
    }
}
