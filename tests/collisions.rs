//! Collision response between the player, enemies and scenery.

use glam::Vec2;
use rstest::{fixture, rstest};
use skulk::entity::EntityFlags;
use skulk::simulation::Contact;
use skulk::PlayerState;
use test_utils::{assert_vec2_near, press, TestWorld};

const LOW: EntityFlags = EntityFlags {
    high: false,
    elevated: false,
    fixed: true,
    interactive: false,
};

const RAISED: EntityFlags = EntityFlags {
    high: true,
    elevated: true,
    fixed: true,
    interactive: false,
};

const WALL: EntityFlags = EntityFlags {
    high: true,
    elevated: false,
    fixed: true,
    interactive: false,
};

#[fixture]
fn world() -> TestWorld {
    TestWorld::with_player_at(Vec2::ZERO)
}

#[rstest]
fn walking_into_a_wall_is_pushed_back(mut world: TestWorld) {
    let wall = world.spawn_prop("Wall", Vec2::new(12.0, 0.0), WALL);
    for _ in 0..3 {
        let report = world.tick(press(|i| i.right = true));
        assert_eq!(
            report.contacts,
            vec![Contact {
                first: world.player,
                second: wall
            }]
        );
    }
    assert_eq!(world.player_state(), PlayerState::Walking);
    assert_eq!(world.position(world.player), Vec2::ZERO);
    assert_eq!(world.position(wall), Vec2::new(12.0, 0.0));
}

#[rstest]
fn crouching_slips_under_raised_scenery(mut world: TestWorld) {
    let shelf = world.spawn_prop("Shelf", Vec2::new(5.0, 0.0), RAISED);
    world.tick(press(|i| i.crouch = true));
    for _ in 0..2 {
        world.tick(press(|i| {
            i.crouch = true;
            i.right = true;
        }));
    }

    assert_vec2_near(world.position(world.player), Vec2::new(2.0, 0.0));
    let under = world
        .sim
        .entity(world.player)
        .ok()
        .and_then(|e| e.as_player())
        .and_then(|p| p.object_under());
    assert_eq!(under, Some(shelf));
}

#[rstest]
fn sheltered_player_stays_crouched_after_release(mut world: TestWorld) {
    world.spawn_prop("Shelf", Vec2::new(5.0, 0.0), RAISED);
    world.tick(press(|i| i.crouch = true));
    world.tick(press(|_| {}));
    assert_eq!(world.player_state(), PlayerState::Crouching);
}

#[rstest]
fn standing_player_cannot_enter_raised_scenery(mut world: TestWorld) {
    world.spawn_prop("Shelf", Vec2::new(11.0, 0.0), RAISED);
    world.tick(press(|i| i.right = true));
    assert_eq!(world.position(world.player), Vec2::ZERO);
}

#[rstest]
fn jumping_clears_low_scenery(mut world: TestWorld) {
    world.spawn_prop("Crate", Vec2::new(5.0, 0.0), LOW);
    world.tick(press(|i| i.jump = true));
    world.tick(press(|i| {
        i.jump = true;
        i.right = true;
    }));
    assert_eq!(world.player_state(), PlayerState::Jumping);
    assert_vec2_near(world.position(world.player), Vec2::new(1.4, 0.0));
}

#[rstest]
fn jumping_does_not_clear_high_scenery(mut world: TestWorld) {
    world.spawn_prop("Wall", Vec2::new(11.0, 0.0), WALL);
    world.tick(press(|i| i.jump = true));
    world.tick(press(|i| {
        i.jump = true;
        i.right = true;
    }));
    assert_eq!(world.position(world.player), Vec2::ZERO);
}

#[rstest]
fn pursuing_enemy_is_stopped_by_the_player(mut world: TestWorld) {
    let enemy = world.spawn_enemy(Vec2::new(13.0, 0.0));
    let report = world.tick(press(|_| {}));
    assert_eq!(report.contacts.len(), 1);
    assert_eq!(world.position(enemy), Vec2::new(13.0, 0.0));
}

#[rstest]
fn separated_entities_report_no_contacts(mut world: TestWorld) {
    world.spawn_prop("Far", Vec2::new(100.0, 100.0), WALL);
    let report = world.tick(press(|i| i.up = true));
    assert!(report.contacts.is_empty());
    assert_eq!(report.updated, 2);
}
