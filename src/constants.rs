//! Gameplay constants shared across behaviours.
//!
//! These are the default tuning values. [`crate::config::SimulationConfig`]
//! starts from them and lets a JSON document override any subset.

/// Default player walking speed in world units per second.
pub const PLAYER_WALK_SPEED: f32 = 20.0;
/// Speed multiplier applied while the player runs.
pub const PLAYER_RUN_MULTIPLIER: f32 = 2.0;
/// Speed factor applied to walking speed while crouching.
pub const CROUCH_SPEED_FACTOR: f32 = 0.5;
/// Speed factor applied to walking speed while jumping.
pub const JUMP_SPEED_FACTOR: f32 = 0.7;
/// Radius within which the player may interact with an entity.
pub const INTERACTION_RADIUS: f32 = 50.0;

/// Default enemy walking speed in world units per second.
pub const ENEMY_WALK_SPEED: f32 = 20.0;
/// Speed multiplier applied while an enemy pursues its target.
pub const ENEMY_PURSUIT_MULTIPLIER: f32 = 2.0;
/// Distance below which an enemy sees its target.
pub const SIGHT_RANGE: f32 = 100.0;
/// Distance below which an enemy can hear a noisy target.
pub const HEARING_RANGE: f32 = 200.0;
/// Noise level a target must exceed to be heard.
pub const AUDIBLE_NOISE: f32 = 0.3;

/// Noise emitted while standing still.
pub const NOISE_SILENT: f32 = 0.0;
/// Noise emitted while walking.
pub const NOISE_WALKING: f32 = 0.4;
/// Noise emitted while running.
pub const NOISE_RUNNING: f32 = 0.6;
/// Noise emitted while moving in a crouch.
pub const NOISE_CROUCHING: f32 = 0.3;
/// Noise emitted while jumping on the spot.
pub const NOISE_JUMP_STATIONARY: f32 = 0.5;
/// Noise emitted while jumping and moving.
pub const NOISE_JUMP_MOVING: f32 = 0.6;

/// Largest frame delta accepted by a single tick.
pub const MAX_ELAPSED_SECONDS: f32 = 0.25;

/// Name under which the player is registered in the scene graph.
pub const PLAYER_NAME: &str = "Player";
/// Name of the scene graph root created by the demo world.
pub const ROOT_NAME: &str = "_root_";

/// One-shot sound played when the player leaves the ground.
pub const JUMP_SOUND: &str = "jump";
