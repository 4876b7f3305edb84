//! Topic-based event bus for session events.
//!
//! Events are published to topics, and consumers subscribe only to the
//! topics they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{InventoryEvent, MovementEvent, SkillEvent, StatsEvent};
