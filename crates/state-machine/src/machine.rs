//! The state machine that admits, steps, chains and interrupts jobs.

use core::fmt::Debug;

use crate::status::TaskStatus;
use crate::task::Job;

/// Holds the current logical state and at most one running job.
///
/// # Invariants
///
/// - `current_task.is_some()` iff the machine is busy
/// - [`set_state`](Self::set_state) is rejected while busy
/// - Jobs on one machine never interleave: a chained job is admitted only
///   after its predecessor has been cleared
pub struct StateMachine<C, S> {
    name: &'static str,
    default_state: fn() -> Job<C, S>,
    current_state: S,
    current_task: Option<Job<C, S>>,
}

impl<C, S> StateMachine<C, S>
where
    S: Copy + PartialEq + Debug,
{
    /// Creates an idle machine.
    ///
    /// `default_state` builds the job that [`reset`](Self::reset) admits; its
    /// state label is also the machine's initial logical state.
    pub fn new(name: &'static str, default_state: fn() -> Job<C, S>) -> Self {
        let current_state = default_state().state();
        Self {
            name,
            default_state,
            current_state,
            current_task: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The state recorded by the most recently entered job.
    pub fn current_state(&self) -> S {
        self.current_state
    }

    pub fn current_task(&self) -> Option<&Job<C, S>> {
        self.current_task.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.current_task.is_some()
    }

    /// Starts `job` unless another job is running.
    ///
    /// The job's `on_enter` and the first step of its `main` run before this
    /// returns, so a job that completes immediately leaves the machine free
    /// (or running whatever it chained).
    ///
    /// Returns `false` and leaves the running job untouched when busy.
    pub fn set_state(&mut self, ctx: &mut C, job: Job<C, S>) -> bool {
        if let Some(running) = &self.current_task {
            tracing::debug!(
                machine = self.name,
                running = ?running.state(),
                requested = ?job.state(),
                "set_state rejected: machine busy"
            );
            return false;
        }

        self.start(ctx, job);
        true
    }

    /// Resumes the running job once. Returns `None` when idle.
    pub fn tick(&mut self, ctx: &mut C) -> Option<TaskStatus> {
        let job = self.current_task.as_mut()?;
        let status = job.step(ctx);
        if status.is_complete() {
            self.finish(ctx);
        }
        Some(status)
    }

    /// Drops the running job without running `on_exit` or its exit action.
    ///
    /// Returns `true` if a job was running. Any cleanup the exit hook would
    /// have done is the caller's responsibility.
    pub fn interrupt(&mut self) -> bool {
        match self.current_task.take() {
            Some(job) => {
                tracing::debug!(machine = self.name, state = ?job.state(), "interrupted");
                true
            }
            None => false,
        }
    }

    /// [`interrupt`](Self::interrupt) followed by admitting the default state.
    pub fn reset(&mut self, ctx: &mut C) {
        self.interrupt();
        let job = (self.default_state)();
        self.set_state(ctx, job);
    }

    fn start(&mut self, ctx: &mut C, mut job: Job<C, S>) {
        tracing::trace!(machine = self.name, state = ?job.state(), "enter");
        self.current_state = job.state();
        job.enter(ctx);
        self.current_task = Some(job);
        self.tick(ctx);
    }

    fn finish(&mut self, ctx: &mut C) {
        let Some(mut job) = self.current_task.take() else {
            return;
        };
        tracing::trace!(machine = self.name, state = ?job.state(), "exit");

        if let Some(next) = job.exit(ctx) {
            self.set_state(ctx, next);
        }
    }
}

impl<C, S: Debug> Debug for StateMachine<C, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StateMachine")
            .field("name", &self.name)
            .field("current_state", &self.current_state)
            .field("current_task", &self.current_task)
            .finish()
    }
}
