//! Enemy controller.
//!
//! An enemy tracks one target by name. The name is resolved lazily by the
//! simulation and the resulting [`NodeId`] cached here; until it resolves the
//! enemy simply waits.

mod state;

pub use state::{EnemyState, Perception};

use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{
    AUDIBLE_NOISE, ENEMY_PURSUIT_MULTIPLIER, ENEMY_WALK_SPEED, HEARING_RANGE, PLAYER_NAME,
    SIGHT_RANGE,
};
use crate::entity::Body;
use crate::scene::NodeId;
use crate::vector_math::vec_normalize;

/// Speeds and senses of an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Seeking speed in world units per second.
    pub walk_speed: f32,
    /// Multiplier applied to `walk_speed` while pursuing.
    pub pursuit_multiplier: f32,
    /// Distance below which the target is seen.
    pub sight_range: f32,
    /// Distance below which a loud enough target is heard.
    pub hearing_range: f32,
    /// Noise a target must exceed to be heard.
    pub audible_noise: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            walk_speed: ENEMY_WALK_SPEED,
            pursuit_multiplier: ENEMY_PURSUIT_MULTIPLIER,
            sight_range: SIGHT_RANGE,
            hearing_range: HEARING_RANGE,
            audible_noise: AUDIBLE_NOISE,
        }
    }
}

impl EnemyTuning {
    /// What a target `distance` away emitting `noise` looks and sounds like.
    ///
    /// # Examples
    ///
    /// ```
    /// use skulk::enemy::EnemyTuning;
    /// let tuning = EnemyTuning::default();
    /// assert!(tuning.perceive(50.0, 0.0).can_see);
    /// assert!(tuning.perceive(150.0, 0.5).can_hear);
    /// assert!(!tuning.perceive(150.0, 0.3).can_hear);
    /// ```
    #[must_use]
    pub fn perceive(&self, distance: f32, noise: f32) -> Perception {
        Perception {
            can_see: distance < self.sight_range,
            can_hear: noise > self.audible_noise && distance < self.hearing_range,
        }
    }

    /// Speed in `state`.
    #[must_use]
    pub fn speed(&self, state: EnemyState) -> f32 {
        match state {
            EnemyState::Idle => 0.0,
            EnemyState::Seeking => self.walk_speed,
            EnemyState::Pursuing => self.walk_speed * self.pursuit_multiplier,
        }
    }
}

/// Snapshot of the target taken before the enemy updates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetReading {
    /// Node of the target.
    pub id: NodeId,
    /// Target position at the start of the tick.
    pub position: Vec2,
    /// Noise the target emitted on its last update.
    pub noise: f32,
}

/// What an enemy perceives at the start of an update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnemySenses {
    /// The target, when it could be found.
    pub target: Option<TargetReading>,
}

/// State machine driving an enemy entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyController {
    state: EnemyState,
    tuning: EnemyTuning,
    target_name: String,
    target: Option<NodeId>,
}

impl Default for EnemyController {
    fn default() -> Self {
        Self::new(EnemyTuning::default(), PLAYER_NAME)
    }
}

impl EnemyController {
    /// Creates an idle enemy tracking the node named `target_name`.
    #[must_use]
    pub fn new(tuning: EnemyTuning, target_name: impl Into<String>) -> Self {
        Self {
            state: EnemyState::Idle,
            tuning,
            target_name: target_name.into(),
            target: None,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> EnemyState {
        self.state
    }

    /// Tuning in effect.
    #[must_use]
    pub const fn tuning(&self) -> &EnemyTuning {
        &self.tuning
    }

    /// Cached target handle, once resolved.
    #[must_use]
    pub const fn target(&self) -> Option<NodeId> {
        self.target
    }

    /// Name of the node this enemy tracks.
    #[must_use]
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// Advances the controller by `elapsed` seconds.
    pub fn update(&mut self, node: NodeId, body: &mut Body, senses: &EnemySenses, elapsed: f32) {
        let Some(reading) = senses.target else {
            debug!("{node} waiting for target `{}`", self.target_name);
            return;
        };
        self.target.get_or_insert(reading.id);

        let offset = reading.position - body.position();
        let perception = self.tuning.perceive(offset.length(), reading.noise);
        if let Some(next) = self.state.next(perception) {
            debug!("{node} enemy {:?} -> {next:?}", self.state);
            self.state = next;
        }

        let speed = self.tuning.speed(self.state);
        if speed > 0.0 {
            body.adjust(vec_normalize(offset) * speed * elapsed);
        }
    }
}
