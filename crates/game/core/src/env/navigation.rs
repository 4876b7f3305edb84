use std::time::Duration;

use crate::types::Vector2;

/// Result of the most recent path request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathStatus {
    /// No path has been requested, or the last one was reset.
    #[default]
    None,
    /// The backend is still computing.
    Pending,
    /// A path reaching the destination exists.
    Complete,
    /// Only part of the way can be walked.
    Partial,
    /// The destination cannot be reached at all.
    Invalid,
}

impl PathStatus {
    pub fn is_complete(self) -> bool {
        matches!(self, PathStatus::Complete)
    }
}

/// Navigation backend polled by the movement controller.
///
/// The backend owns the agent's incremental position: the scheduler calls
/// [`update`](Self::update) once per frame and the move task copies
/// [`position`](Self::position) into the actor every tick.
pub trait NavigationBackend {
    /// Computes a path from `from` to `destination` and returns its status.
    fn request_path(&mut self, from: Vector2, destination: Vector2) -> PathStatus;

    fn path_status(&self) -> PathStatus;

    /// Returns `true` while part of the path is still unwalked.
    fn has_path(&self) -> bool;

    /// Advances the agent along its path by one frame.
    fn update(&mut self, delta: Duration);

    /// The agent's current incremental position.
    fn position(&self) -> Vector2;

    /// Destination of the current path, if any.
    fn destination(&self) -> Option<Vector2>;

    /// Drops the current path; the agent stays where it is.
    fn reset_path(&mut self);

    /// Teleports the agent without pathing.
    fn warp(&mut self, position: Vector2);
}
