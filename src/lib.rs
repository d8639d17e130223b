#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the core of the Skulk stealth game.
//!
//! Entities live in a [`scene::SceneGraph`] and are advanced by a
//! [`Simulation`]: each tick runs the player and enemy state machines, then
//! resolves overlaps pairwise. Audio and animation are reached only through
//! the sinks in [`effects`], so the core runs headless.
pub mod aabb;
pub mod animation;
pub mod config;
pub mod constants;
pub mod effects;
pub mod enemy;
pub mod entity;
pub mod error;
pub mod input;
pub mod logging;
pub mod player;
pub mod plugin;
pub mod presentation;
pub mod scene;
pub mod simulation;
pub mod spawn_world;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use aabb::Aabb;
pub use animation::{AnimatedSprite, Animator, FrameSet};
pub use config::SimulationConfig;
pub use effects::{AnimationSink, AudioSink, Effects, Silent, SoundHandle};
pub use enemy::{EnemyController, EnemyState};
pub use entity::{Behaviour, Body, EntityFlags, WorldEntity};
pub use error::{AnimationError, ConfigError, SceneError, SetupError};
pub use input::InputSnapshot;
pub use logging::init as init_logging;
pub use player::{PlayerController, PlayerState};
pub use plugin::{ActionInput, SimulationPlugin, SimulationResource};
pub use presentation::EffectLog;
pub use scene::{NodeId, SceneGraph};
pub use simulation::{Simulation, TickReport};
pub use spawn_world::spawn_world;
pub use vector_math::vec_normalize;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use skulk::prelude::*;
    //! ```

    pub use crate::Aabb;
    pub use crate::Effects;
    pub use crate::InputSnapshot;
    pub use crate::NodeId;
    pub use crate::Simulation;
    pub use crate::SimulationConfig;
    pub use crate::WorldEntity;
    pub use glam::Vec2;
}
