//! Actor controllers built on [`state_machine::StateMachine`].
//!
//! Every controller runs its tasks against one owned [`ActorContext`]:
//!
//! - [`MovementController`]: `Idle` / `Move`, bound to the navigation backend
//! - [`SkillController`]: `Load` → `Use` → `Idle`, or `Cancel` → `Idle`
//! - [`ActorController`]: owns the context and both controllers, sequences
//!   composite plans (walk then harvest) and compensates for hard interrupts
mod actor;
mod context;
mod error;
mod movement;
mod skill;

pub use actor::ActorController;
pub use context::{ActorBody, ActorContext};
pub use error::{ActorError, MovementError};
pub use movement::{MovementController, MovementState};
pub use skill::{SkillController, SkillState};
