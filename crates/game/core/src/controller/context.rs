use std::time::Duration;

use crate::config::GameConfig;
use crate::env::{
    NavigationBackend, NullResults, NullVisuals, PcgRng, ResultHandler, RngOracle, VisualSink,
    compute_seed,
};
use crate::skill::SkillBook;
use crate::stats::ActorStats;
use crate::types::{ActorId, Vector2};

/// Transform-like state of an actor in the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorBody {
    pub id: ActorId,
    pub position: Vector2,
    /// Unit vector of the last movement step.
    pub facing: Vector2,
    pub is_moving: bool,
}

/// Everything a controller task may read or write for one actor.
///
/// Collaborators are injected as trait objects so the same tasks run against
/// the runtime's grid navigator, a renderer, or test doubles.
pub struct ActorContext {
    pub body: ActorBody,
    pub stats: ActorStats,
    pub skills: SkillBook,
    pub navigator: Box<dyn NavigationBackend>,
    pub visuals: Box<dyn VisualSink>,
    pub results: Box<dyn ResultHandler>,
    pub config: GameConfig,
    rng: Box<dyn RngOracle>,
    seed: u64,
    nonce: u64,
    delta: Duration,
}

impl ActorContext {
    /// An actor standing at `position`, with default stats and an empty
    /// skill book. The navigator is warped onto `position`.
    pub fn new(
        id: ActorId,
        position: Vector2,
        navigator: impl NavigationBackend + 'static,
    ) -> Self {
        let config = GameConfig::default();
        let mut navigator: Box<dyn NavigationBackend> = Box::new(navigator);
        navigator.warp(position);

        Self {
            body: ActorBody {
                id,
                position,
                facing: Vector2::new(0.0, -1.0),
                is_moving: false,
            },
            stats: ActorStats::default(),
            skills: SkillBook::new(config.starting_ability_points),
            navigator,
            visuals: Box::new(NullVisuals),
            results: Box::new(NullResults),
            config,
            rng: Box::new(PcgRng),
            seed: 0,
            nonce: 0,
            delta: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn with_stats(mut self, stats: ActorStats) -> Self {
        self.stats = stats;
        self
    }

    #[must_use]
    pub fn with_skills(mut self, skills: SkillBook) -> Self {
        self.skills = skills;
        self
    }

    #[must_use]
    pub fn with_visuals(mut self, visuals: impl VisualSink + 'static) -> Self {
        self.visuals = Box::new(visuals);
        self
    }

    #[must_use]
    pub fn with_results(mut self, results: impl ResultHandler + 'static) -> Self {
        self.results = Box::new(results);
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Seeds skill rolls. Actors with the same seed and history roll the same.
    #[must_use]
    pub fn with_rng(mut self, rng: impl RngOracle + 'static, seed: u64) -> Self {
        self.rng = Box::new(rng);
        self.seed = seed;
        self
    }

    pub fn id(&self) -> ActorId {
        self.body.id
    }

    /// Length of the frame currently being processed.
    pub fn delta(&self) -> Duration {
        self.delta
    }

    pub fn set_delta(&mut self, delta: Duration) {
        self.delta = delta;
    }

    pub(crate) fn set_moving(&mut self, moving: bool) {
        self.body.is_moving = moving;
        self.visuals.set_moving(self.body.id, moving);
    }

    /// Rolls against `chance_percent`; each call advances the roll nonce.
    pub fn roll_percent(&mut self, context: u32, chance_percent: u8) -> bool {
        let seed = compute_seed(self.seed, self.nonce, self.body.id.0, context);
        self.nonce += 1;
        self.rng.roll_percent(seed, chance_percent)
    }
}

impl std::fmt::Debug for ActorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActorContext")
            .field("body", &self.body)
            .field("skills", &self.skills.len())
            .field("nonce", &self.nonce)
            .finish_non_exhaustive()
    }
}
