use crate::env::PathStatus;
use crate::error::{ErrorSeverity, GameError};
use crate::skill::SkillError;
use crate::types::Vector2;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MovementError {
    #[error("path to {destination} is {status}")]
    PathIncomplete {
        destination: Vector2,
        status: PathStatus,
    },
}

impl GameError for MovementError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PathIncomplete { .. } => "MOVE_PATH_INCOMPLETE",
        }
    }
}

/// Errors from composite actor commands.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ActorError {
    #[error(transparent)]
    Movement(#[from] MovementError),

    #[error(transparent)]
    Skill(#[from] SkillError),
}

impl GameError for ActorError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Movement(error) => error.severity(),
            Self::Skill(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Movement(error) => error.error_code(),
            Self::Skill(error) => error.error_code(),
        }
    }
}
