//! Builder utilities for ergonomic job construction.
//!
//! Instead of writing `Job::new(MyTask { .. })` and a dedicated no-op task for
//! every machine's resting state, controllers can use [`job`] and [`idle`].

use crate::{Job, Task, TaskStatus};

/// A resting state whose body completes on its first step.
///
/// Admitting it records `state` as the machine's logical state and leaves the
/// machine free immediately afterwards.
pub struct Idle<S> {
    state: S,
}

impl<S> Idle<S> {
    pub const fn new(state: S) -> Self {
        Self { state }
    }
}

impl<C, S: Copy> Task<C, S> for Idle<S> {
    fn state(&self) -> S {
        self.state
    }

    fn main(&mut self, _ctx: &mut C) -> TaskStatus {
        TaskStatus::Complete
    }
}

/// Creates a job around a task.
///
/// Shorthand for `Job::new(task)`.
#[inline]
pub fn job<C, S, T>(task: T) -> Job<C, S>
where
    T: Task<C, S> + 'static,
{
    Job::new(task)
}

/// Creates a resting job labelled `state`.
///
/// Shorthand for `Job::new(Idle::new(state))`.
#[inline]
pub fn idle<C: 'static, S: Copy + 'static>(state: S) -> Job<C, S> {
    Job::new(Idle::new(state))
}
