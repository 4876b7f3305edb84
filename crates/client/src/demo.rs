//! Scripted gathering run.

use std::collections::VecDeque;
use std::time::Duration;

use game_core::{ActorError, ItemHandle, SkillError, Vector2};
use runtime::{Event, InventoryEvent, MovementEvent, RuntimeError, Session, SkillEvent, Topic};
use tokio::sync::broadcast::{self, error::TryRecvError};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Step {
    /// Harvest a node until it is depleted.
    Harvest(usize),
    Walk(Vector2),
}

/// Visits every resource node on the map, harvesting each dry, then walks
/// back to spawn. Trained skills are ranked up as soon as they are ready.
pub struct Demo {
    script: VecDeque<Step>,
    receivers: Vec<(Topic, broadcast::Receiver<Event>)>,
}

impl Demo {
    pub fn new(session: &Session) -> Self {
        let map = session.map();
        let mut script: VecDeque<Step> = (0..map.resources.len()).map(Step::Harvest).collect();
        script.push_back(Step::Walk(map.spawn));

        Self {
            script,
            receivers: session.bus().subscribe_all(),
        }
    }

    pub fn is_finished(&self, session: &Session) -> bool {
        self.script.is_empty() && session.player_idle()
    }

    /// Issues the next command if the player is free, advances one frame and
    /// reacts to what happened.
    pub fn step(&mut self, session: &mut Session, frame: Duration) {
        self.command(session);
        session.tick(frame);
        for event in self.drain() {
            log_event(session, &event);
            if let Event::Skill(SkillEvent::Trained {
                skill, ready: true, ..
            }) = event
            {
                match session.rank_up(skill) {
                    Ok(rank) => tracing::info!(%skill, %rank, "ranked up"),
                    Err(error) => tracing::info!(%skill, %error, "rank up postponed"),
                }
            }
        }
    }

    fn command(&mut self, session: &mut Session) {
        if !session.player_idle() {
            return;
        }
        let Some(step) = self.script.front().copied() else {
            return;
        };

        match step {
            Step::Harvest(node) => match session.harvest(node) {
                Ok(()) => {}
                // Standing at the node; try again once the skill cools down.
                Err(RuntimeError::Actor(ActorError::Skill(SkillError::OnCooldown { .. }))) => {}
                Err(RuntimeError::ResourceDepleted(_)) => {
                    self.script.pop_front();
                }
                Err(error) => {
                    tracing::warn!(node, %error, "skipping resource");
                    self.script.pop_front();
                }
            },
            Step::Walk(destination) => {
                if let Err(error) = session.move_player(destination) {
                    tracing::warn!(%destination, %error, "walk refused");
                }
                self.script.pop_front();
            }
        }
    }

    fn drain(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        for (topic, rx) in &mut self.receivers {
            loop {
                match rx.try_recv() {
                    Ok(event) => events.push(event),
                    Err(TryRecvError::Lagged(skipped)) => {
                        tracing::warn!(%topic, skipped, "event receiver lagged");
                    }
                    Err(TryRecvError::Empty | TryRecvError::Closed) => break,
                }
            }
        }
        events
    }
}

fn log_event(session: &Session, event: &Event) {
    let item_name = |handle: ItemHandle| {
        session
            .content()
            .item(handle)
            .map_or_else(|| handle.to_string(), |item| item.name.clone())
    };

    match event {
        Event::Inventory(InventoryEvent::ItemsGained {
            item,
            placed,
            dropped,
            ..
        }) => {
            tracing::info!(item = %item_name(*item), placed, dropped, "loot");
        }
        Event::Inventory(other) => tracing::debug!(?other, "inventory"),
        Event::Skill(SkillEvent::Resolved {
            actor,
            skill,
            success,
            ..
        }) => {
            tracing::info!(%actor, %skill, success, "skill used");
        }
        Event::Skill(SkillEvent::NodeDepleted { node }) => {
            tracing::info!(node, "resource exhausted");
        }
        Event::Skill(other) => tracing::debug!(?other, "skill"),
        Event::Movement(MovementEvent::Arrived { actor, position }) if actor.is_player() => {
            tracing::info!(%position, "player arrived");
        }
        Event::Movement(other) => tracing::trace!(?other, "movement"),
        Event::Stats(stats) => {
            tracing::debug!(actor = %stats.actor, changes = ?stats.changes, "stats");
        }
    }
}
