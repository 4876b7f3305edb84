use std::time::Duration;

use super::context::ActorContext;
use super::error::ActorError;
use super::movement::MovementController;
use super::skill::SkillController;
use crate::env::HarvestTarget;
use crate::types::{ActorId, SkillId, Vector2};

/// Walk-then-harvest plan waiting for the movement machine to finish.
#[derive(Clone, Copy, Debug)]
struct HarvestPlan {
    skill: SkillId,
    target: HarvestTarget,
}

/// Composition root for one actor: its context, one movement controller and
/// one skill controller.
///
/// The two machines do not exclude each other; sequences that need both
/// (walk to a resource, then gather it) are chained here.
pub struct ActorController {
    ctx: ActorContext,
    movement: MovementController,
    skill: SkillController,
    plan: Option<HarvestPlan>,
}

impl ActorController {
    pub fn new(ctx: ActorContext) -> Self {
        Self {
            ctx,
            movement: MovementController::new(),
            skill: SkillController::new(),
            plan: None,
        }
    }

    pub fn id(&self) -> ActorId {
        self.ctx.body.id
    }

    pub fn position(&self) -> Vector2 {
        self.ctx.body.position
    }

    pub fn context(&self) -> &ActorContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut ActorContext {
        &mut self.ctx
    }

    pub fn movement(&self) -> &MovementController {
        &self.movement
    }

    pub fn skill(&self) -> &SkillController {
        &self.skill
    }

    /// `true` while either machine runs or a composite plan is pending.
    pub fn is_busy(&self) -> bool {
        self.movement.is_busy() || self.skill.is_busy() || self.plan.is_some()
    }

    pub fn has_pending_plan(&self) -> bool {
        self.plan.is_some()
    }

    /// Walks to `destination`, dropping any pending harvest.
    pub fn move_to(&mut self, destination: Vector2) -> Result<(), ActorError> {
        self.plan = None;
        self.movement.path_to_position(&mut self.ctx, destination)?;
        Ok(())
    }

    pub fn use_skill(&mut self, skill: SkillId) -> Result<(), ActorError> {
        self.skill.use_skill(&mut self.ctx, skill)?;
        Ok(())
    }

    pub fn cancel_skill(&mut self) -> bool {
        self.skill.cancel(&mut self.ctx)
    }

    /// Walks to `target` and, on arrival, loads and uses `skill` on it.
    ///
    /// The skill is checked up front. If no complete path exists the whole
    /// sequence is refused and no skill starts.
    pub fn harvest(&mut self, skill: SkillId, target: HarvestTarget) -> Result<(), ActorError> {
        self.skill.check(&self.ctx, skill)?;
        self.plan = None;

        if !self.movement.is_busy() && self.has_arrived(target.position) {
            self.skill.begin(&mut self.ctx, skill, Some(target))?;
            return Ok(());
        }

        self.movement
            .path_to_position(&mut self.ctx, target.position)?;
        self.plan = Some(HarvestPlan { skill, target });
        Ok(())
    }

    /// Advances one frame: navigation, cooldowns, both machines, then any
    /// pending plan whose walk has ended.
    pub fn tick(&mut self, delta: Duration) {
        self.ctx.set_delta(delta);
        self.ctx.navigator.update(delta);
        self.ctx.skills.tick_cooldowns(delta);

        self.movement.tick(&mut self.ctx);
        self.skill.tick(&mut self.ctx);
        self.resolve_plan();
    }

    /// Hard-stops both machines and drops any pending plan.
    ///
    /// Exit hooks do not run, so their side effects are settled here: the
    /// path is dropped, the moving flag cleared and the loading indicator
    /// hidden. No cooldown starts for an interrupted skill.
    pub fn interrupt(&mut self) {
        self.plan = None;
        self.movement.stop(&mut self.ctx);
        if self.skill.interrupt() {
            self.ctx.visuals.hide_loading(self.ctx.body.id);
        }
        self.skill.reset(&mut self.ctx);
        tracing::debug!(actor = %self.ctx.body.id, "interrupted");
    }

    fn has_arrived(&self, position: Vector2) -> bool {
        self.ctx.body.position.distance(position) <= self.ctx.config.arrival_epsilon
    }

    fn resolve_plan(&mut self) {
        if self.movement.is_busy() {
            return;
        }
        let Some(plan) = self.plan.take() else {
            return;
        };

        if !self.has_arrived(plan.target.position) {
            tracing::debug!(actor = %self.ctx.body.id, "harvest aborted: target not reached");
            return;
        }
        if let Err(error) = self.skill.begin(&mut self.ctx, plan.skill, Some(plan.target)) {
            tracing::debug!(actor = %self.ctx.body.id, %error, "harvest aborted");
        }
    }
}

impl std::fmt::Debug for ActorController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActorController")
            .field("ctx", &self.ctx)
            .field("movement", &self.movement.state())
            .field("skill", &self.skill.state())
            .field("plan", &self.plan)
            .finish()
    }
}
