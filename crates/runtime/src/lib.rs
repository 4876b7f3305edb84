//! Headless session runtime for the gathering game.
//!
//! This crate hosts everything `game-core` leaves to its collaborators: a
//! tile-grid navigation backend, mob wander AI, and a [`Session`] that owns
//! the player's bag and the actors, settles skill outcomes and publishes
//! what changed on a topic-based [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the world and its per-frame step
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`navigation`] and [`wander`] implement movement for players and mobs
//! - [`config`] reads frame loop and setup knobs from the environment
pub mod config;
pub mod error;
pub mod events;
pub mod navigation;
pub mod session;
pub mod wander;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use events::{
    Event, EventBus, InventoryEvent, MovementEvent, SkillEvent, StatsEvent, Topic,
};
pub use navigation::{GridNavigator, TilePath, find_path};
pub use session::{Mob, Session};
pub use wander::WanderBrain;
