//! Single-threaded game session.
//!
//! A [`Session`] owns the player's bag, the player and mob actors and the
//! resource node charges. Each [`tick`](Session::tick) advances every actor
//! by one frame, then settles skill outcomes (training, loot into the bag,
//! node depletion) and publishes what changed on the [`EventBus`].

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use game_content::{Content, ContentFactory, MapDefinition, ResourceNode};
use game_core::{
    ActorContext, ActorController, ActorError, ActorId, ActorStats, GridBag, HarvestTarget,
    ItemHandle, OutcomeLog, PcgRng, Rank, SkillBook, SkillId, SkillOutcome, Slot, StatBlock,
    Vector2,
};
use tokio::sync::broadcast;

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::events::{
    Event, EventBus, InventoryEvent, MovementEvent, SkillEvent, StatsEvent, Topic,
};
use crate::navigation::GridNavigator;
use crate::wander::WanderBrain;

/// A wandering mob.
#[derive(Debug)]
pub struct Mob {
    name: String,
    actor: ActorController,
    brain: WanderBrain,
    was_moving: bool,
}

impl Mob {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actor(&self) -> &ActorController {
        &self.actor
    }

    pub fn brain(&self) -> &WanderBrain {
        &self.brain
    }
}

pub struct Session {
    content: Content,
    map: Arc<MapDefinition>,
    bag: GridBag,
    player: ActorController,
    player_was_moving: bool,
    mobs: Vec<Mob>,
    charges: Vec<u32>,
    outcomes: OutcomeLog,
    bus: EventBus,
    frame: u64,
}

impl Session {
    /// Loads `config.map` from `config.content_dir` and builds the session.
    pub fn load(config: &RuntimeConfig) -> Result<Self> {
        let content = ContentFactory::new(&config.content_dir)
            .load_all(&config.map)
            .with_context(|| format!("loading content from {}", config.content_dir.display()))?;
        Self::new(content, config)
    }

    /// Builds the world described by `content`: the default bag, the player
    /// at the map spawn with every skill learned, and one mob per spawn.
    pub fn new(content: Content, config: &RuntimeConfig) -> Result<Self> {
        let game = content.config().clone();
        let layout = content
            .bag_layout(&game.default_bag)
            .ok_or_else(|| RuntimeError::MissingBag(game.default_bag.clone()))?;
        let bag = GridBag::new(layout);
        let map = Arc::new(content.map().clone());

        let mut skills = SkillBook::new(game.starting_ability_points);
        for definition in content.skills() {
            skills.learn(Arc::clone(definition))?;
        }

        let outcomes = OutcomeLog::new();
        let navigator =
            GridNavigator::new(Arc::clone(&map), map.spawn).with_speed(config.walk_speed);
        let player = ActorController::new(
            ActorContext::new(ActorId::PLAYER, map.spawn, navigator)
                .with_stats(ActorStats::new(&game.starting_stats))
                .with_skills(skills)
                .with_results(outcomes.clone())
                .with_config(game.clone())
                .with_rng(PcgRng, config.seed),
        );

        let mobs = map
            .mobs
            .iter()
            .zip(1u32..)
            .map(|(spawn, id)| {
                let navigator = GridNavigator::new(Arc::clone(&map), spawn.position)
                    .with_speed(config.walk_speed * 0.5);
                let ctx = ActorContext::new(ActorId(id), spawn.position, navigator)
                    .with_stats(ActorStats::new(&StatBlock::default()))
                    .with_config(game.clone())
                    .with_rng(PcgRng, config.seed);
                let brain_seed = config.seed ^ u64::from(id).wrapping_mul(0x9e3779b97f4a7c15);
                Mob {
                    name: spawn.name.clone(),
                    actor: ActorController::new(ctx),
                    brain: WanderBrain::new(spawn.position, spawn.wander_radius, brain_seed),
                    was_moving: false,
                }
            })
            .collect();

        let charges = map.resources.iter().map(|node| node.charges).collect();

        tracing::info!(
            map = %map.name,
            bag = %bag.kind(),
            mobs = map.mobs.len(),
            resources = map.resources.len(),
            seed = config.seed,
            "session started"
        );

        Ok(Self {
            content,
            map,
            bag,
            player,
            player_was_moving: false,
            mobs,
            charges,
            outcomes,
            bus: EventBus::with_capacity(config.event_buffer_size),
            frame: 0,
        })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn map(&self) -> &MapDefinition {
        &self.map
    }

    pub fn bag(&self) -> &GridBag {
        &self.bag
    }

    pub fn player(&self) -> &ActorController {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut ActorController {
        &mut self.player
    }

    pub fn mobs(&self) -> &[Mob] {
        &self.mobs
    }

    /// Any actor by id.
    pub fn actor(&self, id: ActorId) -> Result<&ActorController> {
        if id == self.player.id() {
            return Ok(&self.player);
        }
        self.mobs
            .iter()
            .map(|mob| &mob.actor)
            .find(|actor| actor.id() == id)
            .ok_or(RuntimeError::UnknownActor(id))
    }

    pub fn resource(&self, node: usize) -> Result<&ResourceNode> {
        self.map
            .resources
            .get(node)
            .ok_or(RuntimeError::UnknownResource(node))
    }

    /// Harvests left on a resource node.
    pub fn charges(&self, node: usize) -> Result<u32> {
        self.charges
            .get(node)
            .copied()
            .ok_or(RuntimeError::UnknownResource(node))
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    /// Frames simulated so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    // ========================================================================
    // Player commands
    // ========================================================================

    pub fn move_player(&mut self, destination: Vector2) -> Result<()> {
        match self.player.move_to(destination) {
            Ok(()) => {
                self.publish_walk_start(destination);
                Ok(())
            }
            Err(error) => {
                self.publish_refusal(destination);
                Err(error.into())
            }
        }
    }

    /// Walks to resource node `node` and gathers from it with the node's skill.
    pub fn harvest(&mut self, node: usize) -> Result<()> {
        let resource = self.resource(node)?.clone();
        if self.charges(node)? == 0 {
            return Err(RuntimeError::ResourceDepleted(node));
        }

        let target = HarvestTarget::new(resource.position, resource.item, resource.quantity);
        if let Err(error) = self.player.harvest(resource.skill, target) {
            if matches!(error, ActorError::Movement(_)) {
                self.publish_refusal(resource.position);
            }
            return Err(error.into());
        }

        if self.player.movement().is_busy() {
            self.publish_walk_start(resource.position);
        }
        Ok(())
    }

    pub fn use_skill(&mut self, skill: SkillId) -> Result<()> {
        self.player.use_skill(skill)?;
        Ok(())
    }

    pub fn cancel_skill(&mut self) -> bool {
        self.player.cancel_skill()
    }

    /// Stops whatever the player is doing.
    pub fn interrupt(&mut self) {
        self.player.interrupt();
        self.player_was_moving = false;
    }

    /// Spends ability points to advance a trained skill.
    pub fn rank_up(&mut self, skill: SkillId) -> Result<Rank> {
        let skills = &mut self.player.context_mut().skills;
        let rank = skills.rank_up(skill)?;
        let ability_points = skills.ability_points();
        self.bus.publish(Event::Skill(SkillEvent::RankedUp {
            actor: self.player.id(),
            skill,
            rank,
            ability_points,
        }));
        Ok(rank)
    }

    /// Consumes `quantity` units of `item` across stacks.
    pub fn remove_items(&mut self, item: ItemHandle, quantity: u32) -> Result<()> {
        self.bag.remove_item(item, quantity)?;
        self.bus.publish(Event::Inventory(InventoryEvent::ItemsRemoved {
            item,
            quantity,
            revision: self.bag.revision(),
        }));
        Ok(())
    }

    pub fn shift_item(&mut self, from: Slot, to: Slot) -> Result<()> {
        self.bag.shift_item(from, to)?;
        self.bus.publish(Event::Inventory(InventoryEvent::ItemShifted {
            from,
            to,
            revision: self.bag.revision(),
        }));
        Ok(())
    }

    // ========================================================================
    // Frame
    // ========================================================================

    /// Advances the world by one frame.
    pub fn tick(&mut self, delta: Duration) {
        self.frame += 1;

        self.player.tick(delta);
        for mob in &mut self.mobs {
            mob.brain.think(&mut mob.actor, &self.map, delta);
            mob.actor.tick(delta);
        }

        self.publish_arrivals();
        for outcome in self.outcomes.drain() {
            self.settle(outcome);
        }
        self.publish_stat_changes();
    }

    /// True once the player has nothing running or planned.
    pub fn player_idle(&self) -> bool {
        !self.player.is_busy()
    }

    fn publish_walk_start(&mut self, destination: Vector2) {
        self.player_was_moving = true;
        self.bus.publish(Event::Movement(MovementEvent::Started {
            actor: self.player.id(),
            destination,
        }));
    }

    /// A refused path also ends any walk in progress, without an arrival.
    fn publish_refusal(&mut self, destination: Vector2) {
        self.player_was_moving = false;
        self.bus.publish(Event::Movement(MovementEvent::Refused {
            actor: self.player.id(),
            destination,
        }));
    }

    fn publish_arrivals(&mut self) {
        let moving = self.player.context().body.is_moving;
        if self.player_was_moving && !moving {
            self.bus.publish(Event::Movement(MovementEvent::Arrived {
                actor: self.player.id(),
                position: self.player.position(),
            }));
        }
        self.player_was_moving = moving;

        for mob in &mut self.mobs {
            let moving = mob.actor.context().body.is_moving;
            if mob.was_moving && !moving {
                self.bus.publish(Event::Movement(MovementEvent::Arrived {
                    actor: mob.actor.id(),
                    position: mob.actor.position(),
                }));
            }
            mob.was_moving = moving;
        }
    }

    fn publish_stat_changes(&mut self) {
        let actors = std::iter::once(&mut self.player)
            .chain(self.mobs.iter_mut().map(|mob| &mut mob.actor));
        for actor in actors {
            let changes = actor.context_mut().stats.take_changes();
            if !changes.is_empty() {
                self.bus.publish(Event::Stats(StatsEvent {
                    actor: actor.id(),
                    changes,
                }));
            }
        }
    }

    /// Applies one resolved skill use: experience on success, then loot.
    fn settle(&mut self, outcome: SkillOutcome) {
        self.bus.publish(Event::Skill(SkillEvent::Resolved {
            actor: outcome.actor,
            skill: outcome.skill,
            success: outcome.success,
            gained: outcome.gained,
        }));

        if outcome.success {
            self.train(outcome.skill);
        }
        if let (Some((item, quantity)), Some(target)) = (outcome.gained, outcome.target) {
            self.spend_charge(target);
            self.loot(item, quantity);
        }
    }

    fn train(&mut self, skill: SkillId) {
        let skills = &mut self.player.context_mut().skills;
        let Some(learned) = skills.get(skill) else {
            return;
        };
        let amount = learned.profile().exp_per_use;
        match skills.train(skill, amount) {
            Ok(ready) => {
                let exp = skills.get(skill).map_or(0, |learned| learned.exp());
                self.bus.publish(Event::Skill(SkillEvent::Trained {
                    actor: self.player.id(),
                    skill,
                    exp,
                    ready,
                }));
            }
            Err(error) => tracing::debug!(%skill, %error, "training skipped"),
        }
    }

    fn spend_charge(&mut self, target: HarvestTarget) {
        let node = self.map.resources.iter().position(|node| {
            node.item == target.item && node.position.distance(target.position) < 0.01
        });
        let Some(node) = node else {
            return;
        };
        if let Some(charges) = self.charges.get_mut(node) {
            *charges = charges.saturating_sub(1);
            if *charges == 0 {
                tracing::info!(node, "resource depleted");
                self.bus.publish(Event::Skill(SkillEvent::NodeDepleted { node }));
            }
        }
    }

    fn loot(&mut self, item: ItemHandle, quantity: u16) {
        let Some(definition) = self.content.item(item) else {
            tracing::warn!(%item, quantity, "loot of unknown item dropped");
            return;
        };
        let placed = self.bag.add_item(definition, quantity);
        let dropped = quantity - placed;
        if dropped > 0 {
            tracing::warn!(%item, placed, dropped, "bag full, loot dropped");
        }
        self.bus.publish(Event::Inventory(InventoryEvent::ItemsGained {
            item,
            placed,
            dropped,
            revision: self.bag.revision(),
        }));
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("map", &self.map.name)
            .field("frame", &self.frame)
            .field("player", &self.player.position())
            .field("mobs", &self.mobs.len())
            .field("charges", &self.charges)
            .finish_non_exhaustive()
    }
}
