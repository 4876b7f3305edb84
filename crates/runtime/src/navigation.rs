//! Tile-grid navigation backend.
//!
//! Paths are found with A* over the map's walkable tiles (4-connected, unit
//! cost) and walked at a fixed speed. Waypoints are tile centres, except the
//! last one, which is the exact requested destination.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use game_content::MapDefinition;
use game_core::{NavigationBackend, PathStatus, Vector2};

type Tile = (i32, i32);

const NEIGHBOURS: [Tile; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Open-set entry. Ordered as a min-heap on `f`, then `h`, then tile, so
/// equal-cost searches always expand in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenNode {
    f: u32,
    h: u32,
    tile: Tile,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.tile.cmp(&self.tile))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn manhattan(a: Tile, b: Tile) -> u32 {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// Result of a grid search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePath {
    /// Tiles from start to end, both inclusive.
    pub tiles: Vec<Tile>,
    /// `false` when the goal was unreachable and `tiles` ends at the
    /// reachable tile closest to it.
    pub reached: bool,
}

/// A* from `start` to `goal`. `None` if either end is not walkable.
pub fn find_path(map: &MapDefinition, start: Tile, goal: Tile) -> Option<TilePath> {
    if !map.is_walkable(start.0, start.1) || !map.is_walkable(goal.0, goal.1) {
        return None;
    }

    let mut open = BinaryHeap::new();
    let mut came_from: HashMap<Tile, Tile> = HashMap::new();
    let mut cost: HashMap<Tile, u32> = HashMap::new();
    let mut closest = (manhattan(start, goal), start);

    cost.insert(start, 0);
    open.push(OpenNode {
        f: manhattan(start, goal),
        h: manhattan(start, goal),
        tile: start,
    });

    while let Some(OpenNode { tile, h, .. }) = open.pop() {
        if tile == goal {
            return Some(TilePath {
                tiles: rebuild(&came_from, goal),
                reached: true,
            });
        }
        if (h, tile) < closest {
            closest = (h, tile);
        }

        let g = cost.get(&tile).copied().unwrap_or(u32::MAX);
        for (dx, dy) in NEIGHBOURS {
            let next = (tile.0 + dx, tile.1 + dy);
            if !map.is_walkable(next.0, next.1) {
                continue;
            }
            let tentative = g.saturating_add(1);
            if cost.get(&next).is_some_and(|&known| known <= tentative) {
                continue;
            }
            cost.insert(next, tentative);
            came_from.insert(next, tile);
            let h = manhattan(next, goal);
            open.push(OpenNode {
                f: tentative + h,
                h,
                tile: next,
            });
        }
    }

    Some(TilePath {
        tiles: rebuild(&came_from, closest.1),
        reached: false,
    })
}

fn rebuild(came_from: &HashMap<Tile, Tile>, end: Tile) -> Vec<Tile> {
    let mut tiles = vec![end];
    let mut current = end;
    while let Some(&previous) = came_from.get(&current) {
        tiles.push(previous);
        current = previous;
    }
    tiles.reverse();
    tiles
}

fn tile_centre(tile: Tile) -> Vector2 {
    Vector2::new(tile.0 as f32, tile.1 as f32)
}

/// [`NavigationBackend`] that walks A* paths over a [`MapDefinition`].
///
/// Only complete paths are kept for walking. A partial result (goal walled
/// off) or an invalid one (goal or start not walkable) reports its status
/// and leaves the agent without a path.
#[derive(Debug, Clone)]
pub struct GridNavigator {
    map: Arc<MapDefinition>,
    /// Units per second.
    speed: f32,
    position: Vector2,
    waypoints: VecDeque<Vector2>,
    destination: Option<Vector2>,
    status: PathStatus,
}

impl GridNavigator {
    pub const DEFAULT_SPEED: f32 = 4.0;

    pub fn new(map: Arc<MapDefinition>, position: Vector2) -> Self {
        Self {
            map,
            speed: Self::DEFAULT_SPEED,
            position,
            waypoints: VecDeque::new(),
            destination: None,
            status: PathStatus::None,
        }
    }

    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed.max(0.0);
        self
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Remaining waypoints, nearest first.
    pub fn waypoints(&self) -> impl Iterator<Item = Vector2> + '_ {
        self.waypoints.iter().copied()
    }

    fn clear(&mut self) {
        self.waypoints.clear();
        self.destination = None;
    }
}

impl NavigationBackend for GridNavigator {
    fn request_path(&mut self, from: Vector2, destination: Vector2) -> PathStatus {
        self.clear();

        let start = MapDefinition::tile_of(from);
        let goal = MapDefinition::tile_of(destination);
        self.status = match find_path(&self.map, start, goal) {
            None => PathStatus::Invalid,
            Some(path) if !path.reached => PathStatus::Partial,
            Some(path) => {
                self.waypoints = path.tiles.into_iter().skip(1).map(tile_centre).collect();
                self.waypoints.pop_back();
                self.waypoints.push_back(destination);
                self.destination = Some(destination);
                PathStatus::Complete
            }
        };

        tracing::trace!(%from, %destination, status = %self.status, "path requested");
        self.status
    }

    fn path_status(&self) -> PathStatus {
        self.status
    }

    fn has_path(&self) -> bool {
        !self.waypoints.is_empty()
    }

    fn update(&mut self, delta: Duration) {
        let mut budget = self.speed * delta.as_secs_f32();
        while budget > 0.0 {
            let Some(&next) = self.waypoints.front() else {
                break;
            };
            let distance = self.position.distance(next);
            if distance <= budget {
                self.position = next;
                budget -= distance;
                self.waypoints.pop_front();
            } else {
                self.position = self.position.move_towards(next, budget);
                budget = 0.0;
            }
        }
        if self.waypoints.is_empty() {
            self.destination = None;
        }
    }

    fn position(&self) -> Vector2 {
        self.position
    }

    fn destination(&self) -> Option<Vector2> {
        self.destination
    }

    fn reset_path(&mut self) {
        self.clear();
        self.status = PathStatus::None;
    }

    fn warp(&mut self, position: Vector2) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn fenced() -> Arc<MapDefinition> {
        // 7x5 with a wall at x=3 except for a gap at y=4.
        let walls: HashSet<Tile> = (0..4).map(|y| (3, y)).collect();
        Arc::new(MapDefinition {
            name: "fenced".into(),
            width: 7,
            height: 5,
            walls,
            spawn: Vector2::ZERO,
            resources: Vec::new(),
            mobs: Vec::new(),
        })
    }

    #[test]
    fn path_goes_through_the_gap() {
        let map = fenced();
        let path = find_path(&map, (1, 1), (5, 1)).unwrap();
        assert!(path.reached);
        assert_eq!(path.tiles.first(), Some(&(1, 1)));
        assert_eq!(path.tiles.last(), Some(&(5, 1)));
        assert!(path.tiles.contains(&(3, 4)));
        // 2 right, 3 down, 2 right, 3 up, each step one tile.
        assert_eq!(path.tiles.len(), 11);
    }

    #[test]
    fn same_request_same_path() {
        let map = fenced();
        let a = find_path(&map, (0, 0), (6, 0)).unwrap();
        let b = find_path(&map, (0, 0), (6, 0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn wall_goal_is_invalid() {
        let mut nav = GridNavigator::new(fenced(), Vector2::new(1.0, 1.0));
        let status = nav.request_path(nav.position(), Vector2::new(3.0, 1.0));
        assert_eq!(status, PathStatus::Invalid);
        assert!(!nav.has_path());
    }

    #[test]
    fn walled_off_goal_is_partial() {
        let mut map = (*fenced()).clone();
        map.walls.insert((3, 4));
        let mut nav = GridNavigator::new(Arc::new(map), Vector2::new(1.0, 1.0));
        let status = nav.request_path(nav.position(), Vector2::new(5.0, 1.0));
        assert_eq!(status, PathStatus::Partial);
        assert!(!nav.has_path());
        assert_eq!(nav.destination(), None);
    }

    #[test]
    fn walks_to_the_exact_destination() {
        let mut nav = GridNavigator::new(fenced(), Vector2::new(0.0, 0.0)).with_speed(2.0);
        let target = Vector2::new(1.8, 0.2);
        assert_eq!(nav.request_path(nav.position(), target), PathStatus::Complete);
        assert_eq!(nav.destination(), Some(target));

        nav.update(Duration::from_millis(500));
        assert_eq!(nav.position(), Vector2::new(1.0, 0.0));
        assert!(nav.has_path());

        for _ in 0..4 {
            nav.update(Duration::from_millis(500));
        }
        assert_eq!(nav.position(), target);
        assert!(!nav.has_path());
        assert_eq!(nav.destination(), None);
    }

    #[test]
    fn reset_drops_the_path() {
        let mut nav = GridNavigator::new(fenced(), Vector2::ZERO);
        nav.request_path(Vector2::ZERO, Vector2::new(2.0, 2.0));
        nav.reset_path();
        assert!(!nav.has_path());
        assert_eq!(nav.path_status(), PathStatus::None);

        nav.update(Duration::from_secs(1));
        assert_eq!(nav.position(), Vector2::ZERO);
    }
}
