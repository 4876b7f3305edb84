use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::types::{ActorId, SkillId, Vector2};

/// Animation / effect sink driven by movement and skill tasks.
///
/// Signals are fire-and-forget. Tasks that must wait for an effect (pulse,
/// fade) own a timer for the effect's duration instead of blocking here.
pub trait VisualSink {
    fn set_moving(&mut self, actor: ActorId, moving: bool);

    /// Per-tick movement delta, used to pick the facing animation.
    fn set_direction(&mut self, actor: ActorId, delta: Vector2);

    /// Shows the pulsing skill-loading icon for `duration`.
    fn pulse(&mut self, actor: ActorId, skill: SkillId, duration: Duration);

    /// Fades the skill icon out for a cancelled skill.
    fn fade(&mut self, actor: ActorId, skill: SkillId, duration: Duration);

    fn hide_loading(&mut self, actor: ActorId);
}

/// One recorded visual signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VisualSignal {
    Moving(ActorId, bool),
    Direction(ActorId, Vector2),
    Pulse(ActorId, SkillId, Duration),
    Fade(ActorId, SkillId, Duration),
    HideLoading(ActorId),
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullVisuals;

impl VisualSink for NullVisuals {
    fn set_moving(&mut self, _actor: ActorId, _moving: bool) {}
    fn set_direction(&mut self, _actor: ActorId, _delta: Vector2) {}
    fn pulse(&mut self, _actor: ActorId, _skill: SkillId, _duration: Duration) {}
    fn fade(&mut self, _actor: ActorId, _skill: SkillId, _duration: Duration) {}
    fn hide_loading(&mut self, _actor: ActorId) {}
}

/// Sink that records signals into a shared log.
///
/// Clones share the same log, so a caller can keep one clone for inspection
/// while the other is owned by an actor context.
#[derive(Clone, Debug, Default)]
pub struct VisualRecorder {
    signals: Rc<RefCell<Vec<VisualSignal>>>,
}

impl VisualRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signals(&self) -> Vec<VisualSignal> {
        self.signals.borrow().clone()
    }

    pub fn clear(&self) {
        self.signals.borrow_mut().clear();
    }

    fn push(&self, signal: VisualSignal) {
        self.signals.borrow_mut().push(signal);
    }
}

impl VisualSink for VisualRecorder {
    fn set_moving(&mut self, actor: ActorId, moving: bool) {
        self.push(VisualSignal::Moving(actor, moving));
    }

    fn set_direction(&mut self, actor: ActorId, delta: Vector2) {
        self.push(VisualSignal::Direction(actor, delta));
    }

    fn pulse(&mut self, actor: ActorId, skill: SkillId, duration: Duration) {
        self.push(VisualSignal::Pulse(actor, skill, duration));
    }

    fn fade(&mut self, actor: ActorId, skill: SkillId, duration: Duration) {
        self.push(VisualSignal::Fade(actor, skill, duration));
    }

    fn hide_loading(&mut self, actor: ActorId) {
        self.push(VisualSignal::HideLoading(actor));
    }
}
