mod common;

use common::*;
use game_content::MapDefinition;
use game_core::{
    ActorError, ActorId, BagLayout, Rank, SkillError, Slot, StatChanges, StatKind, Vector2,
};
use runtime::{
    Event, InventoryEvent, MovementEvent, RuntimeError, Session, SkillEvent, StatsEvent, Topic,
};

#[test]
fn harvest_walks_gathers_and_trains() {
    let mut session = session();
    let mut movement = session.subscribe(Topic::Movement);
    let mut skill = session.subscribe(Topic::Skill);
    let mut inventory = session.subscribe(Topic::Inventory);

    session.harvest(0).unwrap();
    assert!(session.player().movement().is_busy());
    run_until_idle(&mut session, 20 * SECOND);

    assert_eq!(session.player().position(), Vector2::new(6.0, 1.0));
    assert_eq!(session.bag().count_of(ORE), 2);
    assert_eq!(session.charges(0).unwrap(), 1);

    let moves = drain(&mut movement);
    assert!(matches!(
        moves.first(),
        Some(Event::Movement(MovementEvent::Started { .. }))
    ));
    assert!(moves.contains(&Event::Movement(MovementEvent::Arrived {
        actor: ActorId::PLAYER,
        position: Vector2::new(6.0, 1.0),
    })));

    let skills = drain(&mut skill);
    assert_eq!(
        skills,
        vec![
            Event::Skill(SkillEvent::Resolved {
                actor: ActorId::PLAYER,
                skill: MINING,
                success: true,
                gained: Some((ORE, 2)),
            }),
            Event::Skill(SkillEvent::Trained {
                actor: ActorId::PLAYER,
                skill: MINING,
                exp: 10,
                ready: true,
            }),
        ]
    );

    assert_eq!(
        drain(&mut inventory),
        vec![Event::Inventory(InventoryEvent::ItemsGained {
            item: ORE,
            placed: 2,
            dropped: 0,
            revision: session.bag().revision(),
        })]
    );
}

#[test]
fn node_depletes_after_its_charges() {
    let mut session = session();
    let mut skill = session.subscribe(Topic::Skill);

    session.harvest(0).unwrap();
    run_until_idle(&mut session, 20 * SECOND);

    // Standing on the node with the skill cooling down.
    assert!(matches!(
        session.harvest(0),
        Err(RuntimeError::Actor(ActorError::Skill(SkillError::OnCooldown { .. })))
    ));
    run(&mut session, SECOND);

    session.harvest(0).unwrap();
    assert!(!session.player().movement().is_busy());
    run_until_idle(&mut session, 5 * SECOND);

    assert_eq!(session.charges(0).unwrap(), 0);
    assert_eq!(session.bag().count_of(ORE), 4);
    assert!(drain(&mut skill).contains(&Event::Skill(SkillEvent::NodeDepleted { node: 0 })));

    run(&mut session, SECOND);
    assert!(matches!(
        session.harvest(0),
        Err(RuntimeError::ResourceDepleted(0))
    ));
    assert!(matches!(
        session.harvest(7),
        Err(RuntimeError::UnknownResource(7))
    ));
}

#[test]
fn overflow_is_dropped_when_the_bag_is_full() {
    let content = content_with(BagLayout::rectangle("tiny", 1, 1), 1, map(1, 3));
    let mut session = Session::new(content, &runtime_config()).unwrap();
    let mut inventory = session.subscribe(Topic::Inventory);

    session.harvest(0).unwrap();
    run_until_idle(&mut session, 20 * SECOND);

    assert_eq!(session.bag().count_of(ORE), 1);
    assert!(matches!(
        drain(&mut inventory).as_slice(),
        [Event::Inventory(InventoryEvent::ItemsGained {
            placed: 1,
            dropped: 2,
            ..
        })]
    ));
}

#[test]
fn unreachable_destination_is_refused() {
    let mut session = session();
    let mut movement = session.subscribe(Topic::Movement);
    let wall = Vector2::new(4.0, 2.0);

    assert!(session.move_player(wall).is_err());
    assert!(session.player_idle());
    assert_eq!(session.player().position(), Vector2::new(1.0, 1.0));
    assert_eq!(
        drain(&mut movement),
        vec![Event::Movement(MovementEvent::Refused {
            actor: ActorId::PLAYER,
            destination: wall,
        })]
    );
}

#[test]
fn interrupted_harvest_gathers_nothing() {
    let mut session = session();
    session.harvest(0).unwrap();
    run(&mut session, 5);

    session.interrupt();
    assert!(session.player_idle());
    run(&mut session, 5 * SECOND);

    assert!(session.bag().is_empty());
    assert_eq!(session.charges(0).unwrap(), 2);
    assert!(!session.player().context().body.is_moving);
}

#[test]
fn rank_up_spends_ability_points() {
    let mut session = session();
    let mut skill = session.subscribe(Topic::Skill);

    assert!(matches!(
        session.rank_up(MINING),
        Err(RuntimeError::Skill(SkillError::NotEnoughExp { .. }))
    ));

    session.harvest(0).unwrap();
    run_until_idle(&mut session, 20 * SECOND);
    drain(&mut skill);

    assert_eq!(session.rank_up(MINING).unwrap(), Rank::F);
    assert_eq!(session.player().context().skills.ability_points(), 1);
    assert_eq!(
        drain(&mut skill),
        vec![Event::Skill(SkillEvent::RankedUp {
            actor: ActorId::PLAYER,
            skill: MINING,
            rank: Rank::F,
            ability_points: 1,
        })]
    );
}

#[test]
fn stat_changes_are_published_once() {
    let mut session = session();
    let mut stats = session.subscribe(Topic::Stats);

    session
        .player_mut()
        .context_mut()
        .stats
        .adjust(StatKind::Hp, -5.0);
    session.tick(FRAME);
    session.tick(FRAME);

    assert_eq!(
        drain(&mut stats),
        vec![Event::Stats(StatsEvent {
            actor: ActorId::PLAYER,
            changes: StatChanges::HP,
        })]
    );
}

#[test]
fn bag_commands_publish_revisions() {
    let mut session = session();
    session.harvest(0).unwrap();
    run_until_idle(&mut session, 20 * SECOND);
    let mut inventory = session.subscribe(Topic::Inventory);

    let anchor = session.bag().stacks().next().map(|(anchor, _)| anchor).unwrap();
    session.shift_item(anchor, Slot::new(2, 2)).unwrap();
    session.remove_items(ORE, 1).unwrap();
    assert!(session.remove_items(ORE, 5).is_err());

    assert_eq!(session.bag().count_of(ORE), 1);
    assert_eq!(drain(&mut inventory).len(), 2);
}

#[test]
fn mobs_wander_on_floor_tiles() {
    let mut session = session();
    let mut movement = session.subscribe(Topic::Movement);
    let fox = session.mobs()[0].actor().id();

    for _ in 0..30 * SECOND {
        session.tick(FRAME);
        let position = session.mobs()[0].actor().position();
        let (x, y) = MapDefinition::tile_of(position);
        assert!(session.map().is_walkable(x, y));
    }

    let arrivals = drain(&mut movement)
        .into_iter()
        .filter(|event| matches!(event, Event::Movement(m) if m.actor() == fox))
        .count();
    assert!(arrivals > 0);
    assert!(session.actor(fox).is_ok());
    assert!(session.actor(ActorId(99)).is_err());
}
