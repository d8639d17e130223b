//! Builds the demo level: one player, one enemy and two crates.

use glam::Vec2;
use log::info;

use crate::animation::{AnimatedSprite, Animator, FrameSet};
use crate::config::SimulationConfig;
use crate::entity::{EntityFlags, WorldEntity};
use crate::error::SetupError;
use crate::simulation::Simulation;

/// Cell size of the player sprite sheet.
pub const PLAYER_CELL: Vec2 = Vec2::new(32.0, 64.0);
/// Footprint of the enemy.
pub const ENEMY_SIZE: Vec2 = Vec2::new(32.0, 64.0);
/// Footprint of a crate.
pub const CRATE_SIZE: Vec2 = Vec2::new(32.0, 32.0);
/// Walking speed of the demo player.
pub const DEMO_PLAYER_WALK_SPEED: f32 = 100.0;

/// Animations available on the player sprite sheet. `idle` comes first so a
/// freshly spawned player shows it.
fn player_sprite() -> Result<AnimatedSprite, SetupError> {
    Ok(AnimatedSprite::new(
        PLAYER_CELL,
        [
            ("idle", FrameSet::new(vec![0], false)),
            ("walk", FrameSet::new(vec![0], false)),
            ("crouch", FrameSet::new(vec![1], false)),
            ("jump", FrameSet::new(vec![2], false)),
            ("interact", FrameSet::new(vec![2], false)),
        ],
    )?)
}

/// Builds the demo world.
///
/// The player walks at [`DEMO_PLAYER_WALK_SPEED`] and is registered under
/// `config.player_name`; every other setting comes from `config`.
///
/// # Errors
/// Returns [`SetupError`] if a node or sprite cannot be created.
pub fn spawn_world(mut config: SimulationConfig) -> Result<(Simulation, Animator), SetupError> {
    config.player.walk_speed = DEMO_PLAYER_WALK_SPEED;
    let mut sim = Simulation::new(config);
    let mut animator = Animator::new();

    let player = sim.spawn_player(Vec2::ZERO, PLAYER_CELL)?;
    animator.insert(player, player_sprite()?);

    sim.spawn_enemy("Enemy-1", Vec2::new(300.0, 20.0), ENEMY_SIZE)?;

    sim.spawn(
        "Crate-1",
        WorldEntity::prop(Vec2::new(200.0, 200.0), CRATE_SIZE).with_flags(EntityFlags {
            elevated: true,
            ..EntityFlags::default()
        }),
    )?;
    sim.spawn(
        "Crate-2",
        WorldEntity::prop(Vec2::new(400.0, 400.0), CRATE_SIZE).with_flags(EntityFlags {
            interactive: true,
            ..EntityFlags::default()
        }),
    )?;

    info!("demo world ready with {} nodes", sim.graph().len());
    Ok((sim, animator))
}
