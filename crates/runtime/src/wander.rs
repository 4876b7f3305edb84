//! Wander AI for mobs: idle for a while, then walk to a random walkable tile
//! near home.

use std::time::Duration;

use game_content::MapDefinition;
use game_core::{ActorController, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use state_machine::Timer;

/// Drives one mob's [`ActorController`].
#[derive(Debug)]
pub struct WanderBrain {
    home: Vector2,
    radius: f32,
    rng: StdRng,
    pause: Timer,
    pause_range: (u64, u64),
}

impl WanderBrain {
    /// Attempts at finding a walkable tile before giving up for this pause.
    const MAX_PICKS: usize = 8;
    const DEFAULT_PAUSE_MS: (u64, u64) = (1_000, 3_000);

    pub fn new(home: Vector2, radius: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let pause_range = Self::DEFAULT_PAUSE_MS;
        let pause = Timer::new(Duration::from_millis(
            rng.gen_range(pause_range.0..=pause_range.1),
        ));
        Self {
            home,
            radius: radius.max(0.0),
            rng,
            pause,
            pause_range,
        }
    }

    /// Idle pause bounds in milliseconds.
    #[must_use]
    pub fn with_pause(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.pause_range = (min_ms.min(max_ms), max_ms.max(min_ms));
        self.restart_pause();
        self
    }

    pub fn home(&self) -> Vector2 {
        self.home
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Counts down the idle pause while the mob stands still and sends it to
    /// a new spot when the pause runs out. A busy mob is left alone.
    pub fn think(&mut self, actor: &mut ActorController, map: &MapDefinition, delta: Duration) {
        if actor.is_busy() {
            return;
        }
        if !self.pause.tick(delta) {
            return;
        }
        self.restart_pause();

        let Some(target) = self.pick_target(map) else {
            tracing::debug!(actor = %actor.id(), "no walkable spot to wander to");
            return;
        };
        match actor.move_to(target) {
            Ok(()) => tracing::trace!(actor = %actor.id(), %target, "wandering"),
            Err(error) => tracing::debug!(actor = %actor.id(), %target, %error, "wander refused"),
        }
    }

    /// A random walkable tile centre within `radius` of home.
    pub fn pick_target(&mut self, map: &MapDefinition) -> Option<Vector2> {
        // Anything wider than the map reaches every tile anyway.
        let extent = map.width.max(map.height) as f32;
        let reach = self.radius.min(extent).floor() as i32;
        let (hx, hy) = MapDefinition::tile_of(self.home);
        for _ in 0..Self::MAX_PICKS {
            let x = hx.saturating_add(self.rng.gen_range(-reach..=reach));
            let y = hy.saturating_add(self.rng.gen_range(-reach..=reach));
            let candidate = Vector2::new(x as f32, y as f32);
            if map.is_walkable(x, y) && candidate.distance(self.home) <= self.radius {
                return Some(candidate);
            }
        }
        None
    }

    fn restart_pause(&mut self) {
        let (min, max) = self.pause_range;
        self.pause = Timer::new(Duration::from_millis(self.rng.gen_range(min..=max)));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn open_field() -> MapDefinition {
        MapDefinition {
            name: "field".into(),
            width: 9,
            height: 9,
            walls: HashSet::from([(4, 5), (5, 4)]),
            spawn: Vector2::ZERO,
            resources: Vec::new(),
            mobs: Vec::new(),
        }
    }

    #[test]
    fn targets_stay_in_radius_and_on_floor() {
        let map = open_field();
        let home = Vector2::new(4.0, 4.0);
        let mut brain = WanderBrain::new(home, 2.0, 11);
        for _ in 0..100 {
            if let Some(target) = brain.pick_target(&map) {
                let (x, y) = MapDefinition::tile_of(target);
                assert!(map.is_walkable(x, y));
                assert!(target.distance(home) <= 2.0);
            }
        }
    }

    #[test]
    fn same_seed_same_targets() {
        let map = open_field();
        let home = Vector2::new(4.0, 4.0);
        let mut a = WanderBrain::new(home, 3.0, 99);
        let mut b = WanderBrain::new(home, 3.0, 99);
        for _ in 0..20 {
            assert_eq!(a.pick_target(&map), b.pick_target(&map));
        }
    }

    #[test]
    fn zero_radius_only_offers_home() {
        let map = open_field();
        let home = Vector2::new(2.0, 2.0);
        let mut brain = WanderBrain::new(home, 0.0, 5);
        assert_eq!(brain.pick_target(&map), Some(home));
    }

    #[test]
    fn huge_radius_is_bounded_by_the_map() {
        let map = open_field();
        let mut brain = WanderBrain::new(Vector2::new(4.0, 4.0), f32::MAX, 3);
        let mut found = 0;
        for _ in 0..50 {
            if let Some(target) = brain.pick_target(&map) {
                let (x, y) = MapDefinition::tile_of(target);
                assert!(map.is_walkable(x, y));
                found += 1;
            }
        }
        assert!(found > 0);

        let mut stranded = WanderBrain::new(Vector2::new(1.0e9, -1.0e9), f32::MAX, 3);
        for _ in 0..10 {
            assert_eq!(stranded.pick_target(&map), None);
        }
    }
}
