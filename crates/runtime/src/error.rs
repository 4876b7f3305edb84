use game_core::{ActorError, ActorId, BagError, ErrorSeverity, GameError, SkillError};

/// Runtime errors
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Content could not be loaded or cross-checked.
    #[error(transparent)]
    Content(#[from] anyhow::Error),

    /// The configured default bag kind has no layout.
    #[error("bag layout '{0}' is not defined")]
    MissingBag(String),

    #[error("no actor {0} in the session")]
    UnknownActor(ActorId),

    #[error("no resource node #{0} on the map")]
    UnknownResource(usize),

    #[error("resource node #{0} is depleted")]
    ResourceDepleted(usize),

    #[error(transparent)]
    Actor(#[from] ActorError),

    #[error(transparent)]
    Bag(#[from] BagError),

    #[error(transparent)]
    Skill(#[from] SkillError),
}

impl RuntimeError {
    /// Severity of the underlying failure; loading problems are fatal.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Content(_) | Self::MissingBag(_) => ErrorSeverity::Fatal,
            Self::UnknownActor(_) | Self::UnknownResource(_) => ErrorSeverity::Validation,
            Self::ResourceDepleted(_) => ErrorSeverity::Recoverable,
            Self::Actor(error) => error.severity(),
            Self::Bag(error) => error.severity(),
            Self::Skill(error) => error.severity(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
