//! The demo level built from JSON tuning.

use glam::Vec2;
use rstest::rstest;
use skulk::entity::BehaviourState;
use skulk::{
    spawn_world, Effects, EnemyState, InputSnapshot, Silent, Simulation, SimulationConfig,
    ROOT_NAME,
};

fn tick(sim: &mut Simulation, input: InputSnapshot) {
    let mut audio = Silent;
    let mut animation = Silent;
    let mut fx = Effects::new(&mut audio, &mut animation);
    sim.tick(0.1, &input, &mut fx);
}

fn enemy_state(sim: &Simulation) -> Option<EnemyState> {
    let enemy = sim.find("Enemy-1")?;
    sim.entity(enemy).ok()?.as_enemy().map(skulk::EnemyController::state)
}

#[rstest]
fn default_level_starts_calm() {
    let (mut sim, _) = spawn_world(SimulationConfig::default()).expect("demo world");
    for _ in 0..10 {
        tick(&mut sim, InputSnapshot::default());
    }
    assert_eq!(enemy_state(&sim), Some(EnemyState::Idle));
    assert_eq!(sim.graph().len(), 5);
    assert_eq!(
        sim.graph().node(sim.root()).map(|node| node.name()),
        Ok(ROOT_NAME)
    );
}

#[rstest]
fn configured_player_name_is_tracked() {
    let config = SimulationConfig::from_json_str(
        r#"{ "player_name": "Hero", "enemy": { "sight_range": 400.0 } }"#,
    )
    .expect("valid config");
    let (mut sim, animator) = spawn_world(config).expect("demo world");

    let hero = sim.find("Hero").expect("hero");
    assert!(sim.find("Player").is_none());
    assert!(animator.sprite(hero).is_some());

    tick(&mut sim, InputSnapshot::default());
    assert_eq!(enemy_state(&sim), Some(EnemyState::Pursuing));
    let enemy = sim.find("Enemy-1").expect("enemy");
    let position = sim.entity(enemy).expect("enemy").body().position();
    assert!(position.x < 300.0, "enemy should close in, got {position}");
}

#[rstest]
fn snapshot_serialises_every_entity() {
    let (sim, _) = spawn_world(SimulationConfig::default()).expect("demo world");
    let snapshot = sim.snapshot();
    let names: Vec<_> = snapshot.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["Player", "Enemy-1", "Crate-1", "Crate-2"]);
    assert_eq!(
        snapshot.first().map(|entry| entry.state),
        Some(BehaviourState::Player(skulk::PlayerState::Idle))
    );

    let json = serde_json::to_value(&snapshot).expect("serialisable");
    assert_eq!(json[1]["state"], serde_json::json!({ "kind": "enemy", "state": "idle" }));
    assert_eq!(json[0]["position"], serde_json::json!([0.0, 0.0]));
}

#[rstest]
fn renderables_flip_into_screen_space() {
    let (sim, _) = spawn_world(SimulationConfig::default()).expect("demo world");
    let items = sim.renderables(600.0);
    let crate_one = items
        .iter()
        .find(|item| item.name == "Crate-1")
        .expect("crate render item");
    assert_eq!(crate_one.screen_origin, Vec2::new(200.0, 368.0));
}

#[rstest]
fn malformed_config_is_rejected() {
    let err = SimulationConfig::from_json_str(r#"{ "enemy": { "sight_range": "far" } }"#)
        .expect_err("string sight range");
    assert!(err.to_string().starts_with("invalid simulation config"));
}
