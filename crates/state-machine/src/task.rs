//! Task lifecycle trait and the job wrapper that carries callbacks.
//!
//! This module defines the [`Task`] trait, the fundamental abstraction for
//! every state a [`StateMachine`](crate::StateMachine) can run. The trait is
//! generic over a context type `C` (the blackboard the task reads and writes)
//! and a state label `S` (what the machine reports as its current state).

use crate::status::{Phase, TaskStatus};

/// Callback fired after one of the lifecycle hooks.
pub type Hook<C> = Box<dyn FnMut(&mut C)>;

/// A resumable unit of state-machine work.
///
/// Hooks run in strict order on one machine:
/// 1. [`on_enter`](Task::on_enter) once, synchronously
/// 2. [`main`](Task::main) once per tick until it returns `Complete`
/// 3. [`on_exit`](Task::on_exit) once, synchronously
///
/// `on_exit` is skipped entirely when the machine is interrupted.
pub trait Task<C, S> {
    /// The logical state this task represents.
    fn state(&self) -> S;

    /// Synchronous setup.
    fn on_enter(&mut self, _ctx: &mut C) {}

    /// One step of the body.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context. The task reads elapsed
    ///   time and collaborators from it and writes its side effects back.
    ///
    /// # Returns
    ///
    /// - `TaskStatus::Running` to yield until the next tick
    /// - `TaskStatus::Complete` once the exit condition holds
    fn main(&mut self, ctx: &mut C) -> TaskStatus;

    /// Synchronous teardown.
    ///
    /// Returning a job chains it: the machine admits it right after this task
    /// has been cleared.
    fn on_exit(&mut self, _ctx: &mut C) -> Option<Job<C, S>> {
        None
    }
}

/// A task together with its optional cross-cutting callbacks.
pub struct Job<C, S> {
    task: Box<dyn Task<C, S>>,
    phase: Phase,
    enter_action: Option<Hook<C>>,
    main_action: Option<Hook<C>>,
    exit_action: Option<Hook<C>>,
}

impl<C, S> Job<C, S> {
    /// Wraps a task with no callbacks.
    pub fn new(task: impl Task<C, S> + 'static) -> Self {
        Self::from_boxed(Box::new(task))
    }

    pub fn from_boxed(task: Box<dyn Task<C, S>>) -> Self {
        Self {
            task,
            phase: Phase::NotStarted,
            enter_action: None,
            main_action: None,
            exit_action: None,
        }
    }

    /// Fires right after `on_enter`.
    #[must_use]
    pub fn with_enter_action(mut self, action: impl FnMut(&mut C) + 'static) -> Self {
        self.enter_action = Some(Box::new(action));
        self
    }

    /// Fires right after `main` completes.
    #[must_use]
    pub fn with_main_action(mut self, action: impl FnMut(&mut C) + 'static) -> Self {
        self.main_action = Some(Box::new(action));
        self
    }

    /// Fires right after `on_exit`. Never fires for an interrupted job.
    #[must_use]
    pub fn with_exit_action(mut self, action: impl FnMut(&mut C) + 'static) -> Self {
        self.exit_action = Some(Box::new(action));
        self
    }

    pub fn state(&self) -> S {
        self.task.state()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn enter(&mut self, ctx: &mut C) {
        self.task.on_enter(ctx);
        if let Some(action) = self.enter_action.as_mut() {
            action(ctx);
        }
        self.phase = Phase::Running;
    }

    pub(crate) fn step(&mut self, ctx: &mut C) -> TaskStatus {
        let status = self.task.main(ctx);
        if status.is_complete()
            && let Some(action) = self.main_action.as_mut()
        {
            action(ctx);
        }
        status
    }

    pub(crate) fn exit(&mut self, ctx: &mut C) -> Option<Job<C, S>> {
        let next = self.task.on_exit(ctx);
        if let Some(action) = self.exit_action.as_mut() {
            action(ctx);
        }
        self.phase = Phase::Completed;
        next
    }
}

impl<C, S: core::fmt::Debug> core::fmt::Debug for Job<C, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Job")
            .field("state", &self.task.state())
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
