//! Small hand-built worlds for session tests.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use game_content::{Content, MapDefinition, MobSpawn, ResourceNode};
use game_core::{
    BagLayout, GameConfig, ItemCategory, ItemDefinition, ItemHandle, RankProfile, SkillDefinition,
    SkillId, Vector2,
};
use runtime::{Event, RuntimeConfig, Session};
use tokio::sync::broadcast;

pub const FRAME: Duration = Duration::from_millis(50);
pub const ORE: ItemHandle = ItemHandle(1);
pub const MINING: SkillId = SkillId(1);

/// 1 second of frames.
pub const SECOND: u32 = 20;

pub fn mining() -> Arc<SkillDefinition> {
    let novice = RankProfile {
        load_ms: 200,
        use_ms: 100,
        cooldown_ms: 500,
        exp_threshold: 10,
        ap_cost: 2,
        success_rate: 100,
        exp_per_use: 10,
    };
    let f = RankProfile {
        exp_threshold: 30,
        ..novice
    };
    Arc::new(SkillDefinition::new(MINING, "Mining", vec![novice, f]))
}

/// 8x6 field with a wall column at x=4 (gap at y=5), an ore node at (6, 1)
/// and a fox wandering at (1, 4).
pub fn map(charges: u32, quantity: u16) -> MapDefinition {
    let walls: HashSet<(i32, i32)> = (0..5).map(|y| (4, y)).collect();
    MapDefinition {
        name: "yard".into(),
        width: 8,
        height: 6,
        walls,
        spawn: Vector2::new(1.0, 1.0),
        resources: vec![ResourceNode {
            position: Vector2::new(6.0, 1.0),
            item: ORE,
            quantity,
            skill: MINING,
            charges,
        }],
        mobs: vec![MobSpawn {
            name: "Fox".into(),
            position: Vector2::new(1.0, 4.0),
            wander_radius: 1.5,
        }],
    }
}

pub fn content_with(bag: BagLayout, max_stack: u16, map: MapDefinition) -> Content {
    let config = GameConfig {
        default_bag: bag.kind.clone(),
        starting_ability_points: 3,
        ..GameConfig::default()
    };
    let items = vec![ItemDefinition::new(
        ORE,
        "Copper Ore",
        ItemCategory::Material,
        1,
        1,
        max_stack,
    )];
    Content::new(config, items, vec![bag], vec![mining()], map).unwrap()
}

pub fn content() -> Content {
    content_with(BagLayout::rectangle("satchel", 3, 3), 20, map(2, 2))
}

pub fn runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        seed: 42,
        walk_speed: 5.0,
        ..RuntimeConfig::default()
    }
}

pub fn session() -> Session {
    Session::new(content(), &runtime_config()).unwrap()
}

/// Ticks until the player has nothing left to do. Returns frames used.
pub fn run_until_idle(session: &mut Session, limit: u32) -> u32 {
    for frame in 1..=limit {
        session.tick(FRAME);
        if session.player_idle() {
            return frame;
        }
    }
    panic!("player still busy after {limit} frames");
}

pub fn run(session: &mut Session, frames: u32) {
    for _ in 0..frames {
        session.tick(FRAME);
    }
}

pub fn drain(rx: &mut broadcast::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
