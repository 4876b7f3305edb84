//! Topic-based event bus implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use tokio::sync::broadcast;

use super::types::{InventoryEvent, MovementEvent, SkillEvent, StatsEvent};

/// Topics for event routing
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
pub enum Topic {
    /// Bag contents
    Inventory,
    /// Skill outcomes and progression
    Skill,
    /// Stat pool changes
    Stats,
    /// Walk start, arrival and refusal
    Movement,
}

impl Topic {
    const fn index(self) -> usize {
        self as usize
    }
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Inventory(InventoryEvent),
    Skill(SkillEvent),
    Stats(StatsEvent),
    Movement(MovementEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Inventory(_) => Topic::Inventory,
            Event::Skill(_) => Topic::Skill,
            Event::Stats(_) => Topic::Stats,
            Event::Movement(_) => Topic::Movement,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks; slow receivers see
/// `Lagged` and skip ahead.
#[derive(Debug, Clone)]
pub struct EventBus {
    channels: Arc<[broadcast::Sender<Event>; Topic::COUNT]>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(std::array::from_fn(|_| broadcast::channel(capacity).0)),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels[topic.index()].send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels[topic.index()].subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }

    /// One receiver per topic.
    pub fn subscribe_all(&self) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        Topic::iter().map(|topic| (topic, self.subscribe(topic))).collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
