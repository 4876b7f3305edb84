//! Cooperative task state machine for real-time actors.
//!
//! A [`StateMachine`] runs at most one [`Task`] at a time. Tasks are resumable
//! units of work with an enter / main / exit lifecycle; their `main` body is
//! stepped once per scheduler tick until it reports completion.
//!
//! - **Single-threaded**: the frame loop is the only driver, nothing blocks
//! - **Admission control**: [`StateMachine::set_state`] refuses a second task
//! - **Hard cancellation**: [`StateMachine::interrupt`] drops the running task
//!   without running its exit hook
//!
//! # Architecture
//!
//! - [`Task`]: lifecycle hooks implemented by concrete states
//! - [`Job`]: a task plus optional enter/main/exit callbacks
//! - [`StateMachine`]: admission, stepping, chaining, interruption
//! - [`Timer`]: the "wait N seconds" suspension primitive

pub mod builder;
pub mod machine;
pub mod status;
pub mod task;
pub mod timer;

pub use builder::{Idle, idle, job};
pub use machine::StateMachine;
pub use status::{Phase, TaskStatus};
pub use task::{Hook, Job, Task};
pub use timer::Timer;
