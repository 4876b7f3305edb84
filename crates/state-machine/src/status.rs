//! Status values reported by tasks and jobs.

/// The result of stepping a task's main body once.
///
/// # Real-time Semantics
///
/// Unlike a turn-based node, a task may need many frames to finish:
/// - `Running` means the body yielded and wants to be resumed next tick
/// - `Complete` means the exit condition holds and the exit hook may run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    /// The body yielded; resume it on a later tick.
    Running,

    /// The body finished.
    Complete,
}

impl TaskStatus {
    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, TaskStatus::Running)
    }

    /// Returns `true` if this status is `Complete`.
    #[inline]
    pub fn is_complete(self) -> bool {
        matches!(self, TaskStatus::Complete)
    }

    /// Maps a loop condition to a status: `true` keeps the task running.
    #[inline]
    pub fn running_while(condition: bool) -> Self {
        if condition {
            TaskStatus::Running
        } else {
            TaskStatus::Complete
        }
    }
}

/// Lifecycle phase of a [`Job`](crate::Job).
///
/// A job moves strictly forward: `NotStarted -> Running -> Completed`.
/// An interrupted job never reaches `Completed`; it is dropped while `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    Running,
    Completed,
}
