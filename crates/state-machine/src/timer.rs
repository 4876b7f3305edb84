//! The "wait N seconds" suspension primitive.

use core::time::Duration;

/// Counts elapsed frame time against a fixed duration.
///
/// Tasks own a timer and feed it the frame delta from inside `main`; the task
/// keeps yielding until [`tick`](Timer::tick) reports that the wait is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timer {
    duration: Duration,
    elapsed: Duration,
}

impl Timer {
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Advances the timer and returns `true` once the duration has elapsed.
    ///
    /// A zero-length timer is finished on its first tick.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }

    /// Progress in `[0.0, 1.0]`; a zero-length timer reports `1.0`.
    pub fn fraction(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        self.elapsed.as_secs_f32() / self.duration.as_secs_f32()
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
