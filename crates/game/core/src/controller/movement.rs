use state_machine::{Job, StateMachine, Task, TaskStatus, idle};

use super::context::ActorContext;
use super::error::MovementError;
use crate::types::Vector2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum MovementState {
    Idle,
    Move,
}

/// Follows the navigator's path until it is used up.
struct MoveTask {
    destination: Vector2,
    previous: Vector2,
}

impl MoveTask {
    fn new(destination: Vector2) -> Self {
        Self {
            destination,
            previous: destination,
        }
    }
}

impl Task<ActorContext, MovementState> for MoveTask {
    fn state(&self) -> MovementState {
        MovementState::Move
    }

    fn on_enter(&mut self, ctx: &mut ActorContext) {
        // The backend may have moved the goal onto its own grid.
        if let Some(destination) = ctx.navigator.destination() {
            self.destination = destination;
        }
        self.previous = ctx.body.position;
        ctx.set_moving(true);
    }

    fn main(&mut self, ctx: &mut ActorContext) -> TaskStatus {
        let position = ctx.navigator.position();
        let step = position - self.previous;
        if step.length() > f32::EPSILON {
            ctx.body.facing = step.normalized();
            ctx.visuals.set_direction(ctx.body.id, step);
        }
        ctx.body.position = position;
        self.previous = position;

        TaskStatus::running_while(ctx.navigator.has_path())
    }

    fn on_exit(&mut self, ctx: &mut ActorContext) -> Option<Job<ActorContext, MovementState>> {
        if ctx.navigator.path_status().is_complete() {
            // Incremental steps may stop just short of the target.
            ctx.body.position = self.destination;
            ctx.navigator.warp(self.destination);
            tracing::debug!(actor = %ctx.body.id, destination = %self.destination, "arrived");
        } else {
            tracing::debug!(
                actor = %ctx.body.id,
                position = %ctx.body.position,
                "path dropped by navigator"
            );
        }
        ctx.set_moving(false);
        Some(idle(MovementState::Idle))
    }
}

/// Turns path requests into a running [`MovementState::Move`].
pub struct MovementController {
    machine: StateMachine<ActorContext, MovementState>,
}

impl MovementController {
    pub fn new() -> Self {
        Self {
            machine: StateMachine::new("movement", || idle(MovementState::Idle)),
        }
    }

    pub fn state(&self) -> MovementState {
        self.machine.current_state()
    }

    pub fn is_busy(&self) -> bool {
        self.machine.is_busy()
    }

    pub fn machine(&self) -> &StateMachine<ActorContext, MovementState> {
        &self.machine
    }

    /// Requests a path and starts walking it.
    ///
    /// Anything but a complete path is refused: the path is reset, any walk
    /// in progress is stopped, and the machine is left idle. A request while
    /// already walking retargets the walk.
    pub fn path_to_position(
        &mut self,
        ctx: &mut ActorContext,
        destination: Vector2,
    ) -> Result<(), MovementError> {
        let from = ctx.navigator.position();
        let status = ctx.navigator.request_path(from, destination);
        if !status.is_complete() {
            tracing::debug!(actor = %ctx.body.id, %destination, %status, "path refused");
            self.stop(ctx);
            return Err(MovementError::PathIncomplete {
                destination,
                status,
            });
        }

        if self.machine.is_busy() {
            self.machine.reset(ctx);
        }
        self.machine.set_state(ctx, Job::new(MoveTask::new(destination)));
        Ok(())
    }

    pub fn tick(&mut self, ctx: &mut ActorContext) -> Option<TaskStatus> {
        self.machine.tick(ctx)
    }

    /// Hard cancel; see [`stop`](Self::stop) for the compensating variant.
    pub fn interrupt(&mut self) -> bool {
        self.machine.interrupt()
    }

    pub fn reset(&mut self, ctx: &mut ActorContext) {
        self.machine.reset(ctx);
    }

    /// Resets the machine and settles what the skipped exit would have: the
    /// path is dropped and the moving flag cleared. The actor stays where it is.
    pub fn stop(&mut self, ctx: &mut ActorContext) {
        self.machine.reset(ctx);
        ctx.navigator.reset_path();
        if ctx.body.is_moving {
            ctx.set_moving(false);
        }
    }
}

impl Default for MovementController {
    fn default() -> Self {
        Self::new()
    }
}
