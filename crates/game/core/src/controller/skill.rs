use std::time::Duration;

use state_machine::{Job, StateMachine, Task, TaskStatus, Timer, idle};

use super::context::ActorContext;
use crate::env::{HarvestTarget, SkillOutcome};
use crate::skill::{Skill, SkillError};
use crate::types::SkillId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum SkillState {
    Idle,
    Load,
    Use,
    Cancel,
}

/// Waits on `timer`. The step a task is admitted in does not count toward
/// the wait, so a fresh timer only starts on the following frame.
fn wait(timer: &mut Timer, fresh: &mut bool, delta: Duration) -> TaskStatus {
    let finished = if std::mem::take(fresh) {
        timer.is_finished()
    } else {
        timer.tick(delta)
    };
    TaskStatus::running_while(!finished)
}

struct LoadTask {
    skill: SkillId,
    target: Option<HarvestTarget>,
    timer: Timer,
    fresh: bool,
}

impl LoadTask {
    fn new(skill: SkillId, target: Option<HarvestTarget>) -> Self {
        Self {
            skill,
            target,
            timer: Timer::default(),
            fresh: true,
        }
    }
}

impl Task<ActorContext, SkillState> for LoadTask {
    fn state(&self) -> SkillState {
        SkillState::Load
    }

    fn on_enter(&mut self, ctx: &mut ActorContext) {
        let duration = ctx
            .skills
            .get(self.skill)
            .map(Skill::load_time)
            .unwrap_or_default();
        self.timer = Timer::new(duration);
        ctx.visuals.pulse(ctx.body.id, self.skill, duration);
        tracing::debug!(actor = %ctx.body.id, skill = %self.skill, ?duration, "loading");
    }

    fn main(&mut self, ctx: &mut ActorContext) -> TaskStatus {
        wait(&mut self.timer, &mut self.fresh, ctx.delta())
    }

    fn on_exit(&mut self, _ctx: &mut ActorContext) -> Option<Job<ActorContext, SkillState>> {
        Some(Job::new(UseTask::new(self.skill, self.target)))
    }
}

struct UseTask {
    skill: SkillId,
    target: Option<HarvestTarget>,
    timer: Timer,
    fresh: bool,
}

impl UseTask {
    fn new(skill: SkillId, target: Option<HarvestTarget>) -> Self {
        Self {
            skill,
            target,
            timer: Timer::default(),
            fresh: true,
        }
    }

    fn resolve(&self, ctx: &mut ActorContext) {
        let success_rate = ctx
            .skills
            .get(self.skill)
            .map(|skill| skill.profile().success_rate)
            .unwrap_or(0);
        let success = ctx.roll_percent(self.skill.0, success_rate);
        let gained = self
            .target
            .filter(|_| success)
            .map(|target| (target.item, target.quantity));

        tracing::debug!(actor = %ctx.body.id, skill = %self.skill, success, "skill used");
        ctx.results.publish(SkillOutcome {
            actor: ctx.body.id,
            skill: self.skill,
            success,
            gained,
            target: self.target,
        });
    }
}

impl Task<ActorContext, SkillState> for UseTask {
    fn state(&self) -> SkillState {
        SkillState::Use
    }

    fn on_enter(&mut self, ctx: &mut ActorContext) {
        let duration = ctx
            .skills
            .get(self.skill)
            .map(Skill::use_time)
            .unwrap_or_default();
        self.timer = Timer::new(duration);
    }

    fn main(&mut self, ctx: &mut ActorContext) -> TaskStatus {
        let status = wait(&mut self.timer, &mut self.fresh, ctx.delta());
        if status.is_complete() {
            self.resolve(ctx);
        }
        status
    }

    fn on_exit(&mut self, ctx: &mut ActorContext) -> Option<Job<ActorContext, SkillState>> {
        if let Some(skill) = ctx.skills.get_mut(self.skill) {
            skill.start_cooldown();
        }
        ctx.visuals.hide_loading(ctx.body.id);
        Some(idle(SkillState::Idle))
    }
}

struct CancelTask {
    skill: SkillId,
    timer: Timer,
    fresh: bool,
}

impl Task<ActorContext, SkillState> for CancelTask {
    fn state(&self) -> SkillState {
        SkillState::Cancel
    }

    fn on_enter(&mut self, ctx: &mut ActorContext) {
        let duration = ctx.config.cancel_fade();
        self.timer = Timer::new(duration);
        ctx.visuals.fade(ctx.body.id, self.skill, duration);
        tracing::debug!(actor = %ctx.body.id, skill = %self.skill, "skill cancelled");
    }

    fn main(&mut self, ctx: &mut ActorContext) -> TaskStatus {
        wait(&mut self.timer, &mut self.fresh, ctx.delta())
    }

    fn on_exit(&mut self, ctx: &mut ActorContext) -> Option<Job<ActorContext, SkillState>> {
        ctx.visuals.hide_loading(ctx.body.id);
        Some(idle(SkillState::Idle))
    }
}

/// Sequences skill loading, use and cancellation for one actor.
pub struct SkillController {
    machine: StateMachine<ActorContext, SkillState>,
    active: Option<SkillId>,
}

impl SkillController {
    pub fn new() -> Self {
        Self {
            machine: StateMachine::new("skill", || idle(SkillState::Idle)),
            active: None,
        }
    }

    pub fn state(&self) -> SkillState {
        self.machine.current_state()
    }

    pub fn is_busy(&self) -> bool {
        self.machine.is_busy()
    }

    pub fn machine(&self) -> &StateMachine<ActorContext, SkillState> {
        &self.machine
    }

    /// Skill of the running job, if any.
    pub fn active_skill(&self) -> Option<SkillId> {
        self.active.filter(|_| self.machine.is_busy())
    }

    /// Fails if `skill` is not learned, is cooling down, or another skill is
    /// in progress.
    pub fn check(&self, ctx: &ActorContext, skill: SkillId) -> Result<(), SkillError> {
        let learned = ctx.skills.get(skill).ok_or(SkillError::Unknown(skill))?;
        if learned.is_on_cooldown() {
            return Err(SkillError::OnCooldown {
                id: skill,
                remaining: learned.cooldown_remaining(),
            });
        }
        if self.machine.is_busy() {
            return Err(SkillError::Busy);
        }
        Ok(())
    }

    /// Starts loading `skill`; it is used automatically once loaded.
    pub fn use_skill(&mut self, ctx: &mut ActorContext, skill: SkillId) -> Result<(), SkillError> {
        self.begin(ctx, skill, None)
    }

    pub(crate) fn begin(
        &mut self,
        ctx: &mut ActorContext,
        skill: SkillId,
        target: Option<HarvestTarget>,
    ) -> Result<(), SkillError> {
        self.check(ctx, skill)?;
        self.active = Some(skill);
        self.machine
            .set_state(ctx, Job::new(LoadTask::new(skill, target)));
        Ok(())
    }

    /// Aborts the running skill and plays the cancel fade.
    ///
    /// Returns `false` when there is nothing to cancel.
    pub fn cancel(&mut self, ctx: &mut ActorContext) -> bool {
        let Some(skill) = self.active_skill() else {
            return false;
        };
        if self.machine.current_state() == SkillState::Cancel {
            return false;
        }

        self.machine.interrupt();
        self.machine.set_state(
            ctx,
            Job::new(CancelTask {
                skill,
                timer: Timer::default(),
                fresh: true,
            }),
        );
        true
    }

    pub fn tick(&mut self, ctx: &mut ActorContext) -> Option<TaskStatus> {
        self.machine.tick(ctx)
    }

    /// Hard cancel: no exit hook runs, so no cooldown starts.
    pub fn interrupt(&mut self) -> bool {
        self.machine.interrupt()
    }

    pub fn reset(&mut self, ctx: &mut ActorContext) {
        self.machine.reset(ctx);
    }
}

impl Default for SkillController {
    fn default() -> Self {
        Self::new()
    }
}
