//! Test doubles shared by the controller scenarios.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use game_core::{
    ActorContext, ActorId, NavigationBackend, OutcomeLog, PathStatus, PcgRng, RankProfile,
    SkillBook, SkillDefinition, SkillId, Vector2, VisualRecorder,
};

pub const FRAME: Duration = Duration::from_millis(100);
pub const MINING: SkillId = SkillId(1);

#[derive(Debug, Default)]
pub struct NavState {
    pub position: Vector2,
    pub destination: Option<Vector2>,
    pub status: PathStatus,
    /// Units per second.
    pub speed: f32,
    /// The walk ends once this close to the destination, without closing the gap.
    pub stop_short: f32,
    pub unreachable: Vec<Vector2>,
    /// Rounds requested destinations to whole units.
    pub snap_to_tiles: bool,
    pub resets: u32,
}

/// Straight-line navigator. Clones share state so tests can inspect it.
#[derive(Clone, Debug)]
pub struct StubNavigator {
    pub state: Rc<RefCell<NavState>>,
}

impl StubNavigator {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(NavState {
                speed: 10.0,
                stop_short: 0.1,
                ..NavState::default()
            })),
        }
    }

    pub fn with_unreachable(self, point: Vector2) -> Self {
        self.state.borrow_mut().unreachable.push(point);
        self
    }

    pub fn with_tile_snapping(self) -> Self {
        self.state.borrow_mut().snap_to_tiles = true;
        self
    }

    pub fn resets(&self) -> u32 {
        self.state.borrow().resets
    }
}

impl NavigationBackend for StubNavigator {
    fn request_path(&mut self, _from: Vector2, destination: Vector2) -> PathStatus {
        let mut state = self.state.borrow_mut();
        if state
            .unreachable
            .iter()
            .any(|point| point.distance(destination) < 0.01)
        {
            state.status = PathStatus::Partial;
            return state.status;
        }
        state.status = PathStatus::Complete;
        state.destination = Some(if state.snap_to_tiles {
            Vector2::new(destination.x.round(), destination.y.round())
        } else {
            destination
        });
        state.status
    }

    fn path_status(&self) -> PathStatus {
        self.state.borrow().status
    }

    fn has_path(&self) -> bool {
        self.state.borrow().destination.is_some()
    }

    fn update(&mut self, delta: Duration) {
        let mut state = self.state.borrow_mut();
        let Some(destination) = state.destination else {
            return;
        };
        let step = state.speed * delta.as_secs_f32();
        state.position = state.position.move_towards(destination, step);
        if state.position.distance(destination) <= state.stop_short {
            state.destination = None;
        }
    }

    fn position(&self) -> Vector2 {
        self.state.borrow().position
    }

    fn destination(&self) -> Option<Vector2> {
        self.state.borrow().destination
    }

    fn reset_path(&mut self) {
        let mut state = self.state.borrow_mut();
        state.destination = None;
        state.status = PathStatus::None;
        state.resets += 1;
    }

    fn warp(&mut self, position: Vector2) {
        self.state.borrow_mut().position = position;
    }
}

/// Load 300ms, use 200ms, cooldown 1s, always succeeds.
pub fn mining() -> Arc<SkillDefinition> {
    let profile = RankProfile {
        load_ms: 300,
        use_ms: 200,
        cooldown_ms: 1000,
        exp_threshold: 20,
        ap_cost: 1,
        success_rate: 100,
        exp_per_use: 5,
    };
    Arc::new(SkillDefinition::new(MINING, "Mining", vec![profile; 3]))
}

pub struct Harness {
    pub ctx: ActorContext,
    pub navigator: StubNavigator,
    pub visuals: VisualRecorder,
    pub outcomes: OutcomeLog,
}

pub fn harness() -> Harness {
    harness_with(StubNavigator::new())
}

pub fn harness_with(navigator: StubNavigator) -> Harness {
    let visuals = VisualRecorder::new();
    let outcomes = OutcomeLog::new();
    let mut skills = SkillBook::new(5);
    skills.learn(mining()).expect("mining is valid");

    let ctx = ActorContext::new(ActorId::PLAYER, Vector2::ZERO, navigator.clone())
        .with_skills(skills)
        .with_visuals(visuals.clone())
        .with_results(outcomes.clone())
        .with_rng(PcgRng, 7);

    Harness {
        ctx,
        navigator,
        visuals,
        outcomes,
    }
}
