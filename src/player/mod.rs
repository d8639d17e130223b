//! Player controller.
//!
//! The controller owns the player's [`PlayerState`], its tuning and the
//! per-tick noise level. Each update evaluates the transition table once,
//! moves the body in the resulting state and re-checks any object the player
//! is crouched beneath.

mod state;

pub use state::{PlayerState, TransitionInputs};

use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::aabb::Aabb;
use crate::constants::{
    CROUCH_SPEED_FACTOR, INTERACTION_RADIUS, JUMP_SOUND, JUMP_SPEED_FACTOR, NOISE_CROUCHING,
    NOISE_JUMP_MOVING, NOISE_JUMP_STATIONARY, NOISE_RUNNING, NOISE_SILENT, NOISE_WALKING,
    PLAYER_RUN_MULTIPLIER, PLAYER_WALK_SPEED,
};
use crate::effects::{Effects, SoundHandle};
use crate::entity::{Body, Collider};
use crate::input::InputSnapshot;
use crate::scene::NodeId;

/// Speeds and reach of a player.
///
/// Every field is optional in serialised form and falls back to the values
/// in [`crate::constants`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Walking speed in world units per second.
    pub walk_speed: f32,
    /// Multiplier applied to `walk_speed` while running.
    pub run_multiplier: f32,
    /// Multiplier applied to `walk_speed` while crouching.
    pub crouch_factor: f32,
    /// Multiplier applied to `walk_speed` while jumping.
    pub jump_factor: f32,
    /// Distance within which interactive entities can be used.
    pub interaction_radius: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            walk_speed: PLAYER_WALK_SPEED,
            run_multiplier: PLAYER_RUN_MULTIPLIER,
            crouch_factor: CROUCH_SPEED_FACTOR,
            jump_factor: JUMP_SPEED_FACTOR,
            interaction_radius: INTERACTION_RADIUS,
        }
    }
}

/// Movement rule for one state.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Gait {
    speed: f32,
    moving_noise: f32,
    still_noise: f32,
}

impl PlayerTuning {
    /// Speed while running.
    #[must_use]
    pub fn run_speed(&self) -> f32 {
        self.walk_speed * self.run_multiplier
    }

    /// Speed in `state`. Zero for states that do not move the player.
    #[must_use]
    pub fn speed(&self, state: PlayerState) -> f32 {
        self.gait(state).speed
    }

    fn gait(&self, state: PlayerState) -> Gait {
        let (speed, moving_noise, still_noise) = match state {
            PlayerState::Idle | PlayerState::Interacting => (0.0, NOISE_SILENT, NOISE_SILENT),
            PlayerState::Walking => (self.walk_speed, NOISE_WALKING, NOISE_SILENT),
            PlayerState::Running => (self.run_speed(), NOISE_RUNNING, NOISE_SILENT),
            PlayerState::Crouching => (
                self.walk_speed * self.crouch_factor,
                NOISE_CROUCHING,
                NOISE_SILENT,
            ),
            PlayerState::Jumping => (
                self.walk_speed * self.jump_factor,
                NOISE_JUMP_MOVING,
                NOISE_JUMP_STATIONARY,
            ),
        };
        Gait {
            speed,
            moving_noise,
            still_noise,
        }
    }
}

/// What the player perceives at the start of an update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerSenses {
    /// Actions held this frame.
    pub input: InputSnapshot,
    /// Nearest interactive entity within reach.
    pub interaction_target: Option<NodeId>,
    /// Current bounding box of the object the player is crouched beneath.
    pub object_under_box: Option<Aabb>,
}

impl PlayerSenses {
    /// Senses carrying only `input`.
    #[must_use]
    pub const fn from_input(input: InputSnapshot) -> Self {
        Self {
            input,
            interaction_target: None,
            object_under_box: None,
        }
    }

    /// Returns `true` when an interactive entity is within reach.
    #[must_use]
    pub const fn can_interact(&self) -> bool {
        self.interaction_target.is_some()
    }
}

/// State machine driving the player-controlled entity.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerController {
    state: PlayerState,
    tuning: PlayerTuning,
    noise_level: f32,
    object_under: Option<NodeId>,
    active_loop: Option<SoundHandle>,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(PlayerTuning::default())
    }
}

impl PlayerController {
    /// Creates an idle, silent controller.
    #[must_use]
    pub const fn new(tuning: PlayerTuning) -> Self {
        Self {
            state: PlayerState::Idle,
            tuning,
            noise_level: NOISE_SILENT,
            object_under: None,
            active_loop: None,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> PlayerState {
        self.state
    }

    /// Noise emitted during the last update.
    #[must_use]
    pub const fn noise_level(&self) -> f32 {
        self.noise_level
    }

    /// Elevated object the player is crouched beneath.
    #[must_use]
    pub const fn object_under(&self) -> Option<NodeId> {
        self.object_under
    }

    /// Tuning in effect.
    #[must_use]
    pub const fn tuning(&self) -> &PlayerTuning {
        &self.tuning
    }

    /// Walking speed in world units per second.
    #[must_use]
    pub const fn walk_speed(&self) -> f32 {
        self.tuning.walk_speed
    }

    /// Running speed in world units per second.
    #[must_use]
    pub fn run_speed(&self) -> f32 {
        self.tuning.run_speed()
    }

    /// Handle of the looping sound for the current state.
    #[must_use]
    pub const fn active_loop(&self) -> Option<SoundHandle> {
        self.active_loop
    }

    /// Advances the controller by `elapsed` seconds.
    ///
    /// Returns the entity the player started interacting with this tick.
    pub fn update(
        &mut self,
        node: NodeId,
        body: &mut Body,
        senses: &PlayerSenses,
        elapsed: f32,
        fx: &mut Effects<'_>,
    ) -> Option<NodeId> {
        let input = &senses.input;
        let inputs = TransitionInputs {
            movement: input.movement_requested(),
            run: input.run_requested(),
            crouch: input.crouch_requested(),
            jump: input.jump_requested(),
            interact: input.interact_requested(),
            can_interact: senses.can_interact(),
            sheltered: self.object_under.is_some(),
        };

        let mut interacted = None;
        if let Some(next) = self.state.next(&inputs) {
            self.transition_to(node, next, fx);
            if next == PlayerState::Interacting {
                interacted = senses.interaction_target;
            }
        }

        let gait = self.tuning.gait(self.state);
        let direction = input.direction();
        let moving = gait.speed > 0.0 && direction != Vec2::ZERO;
        if moving {
            body.adjust(direction * gait.speed * elapsed);
        }
        self.noise_level = if moving {
            gait.moving_noise
        } else {
            gait.still_noise
        };

        if self.state == PlayerState::Crouching && self.object_under.is_some() {
            let still_under = senses
                .object_under_box
                .is_some_and(|under| body.bounding_box().overlaps(&under));
            if !still_under {
                debug!("{node} left cover");
                self.object_under = None;
            }
        }

        interacted
    }

    fn transition_to(&mut self, node: NodeId, next: PlayerState, fx: &mut Effects<'_>) {
        debug!("{node} player {:?} -> {next:?}", self.state);
        if let Some(handle) = self.active_loop.take() {
            fx.audio.stop(handle);
        }
        self.state = next;
        fx.animation.set_active_animation(node, next.animation());
        if next == PlayerState::Jumping {
            fx.audio.play_one_shot(JUMP_SOUND);
        }
        if let Some(sound) = next.looping_sound() {
            self.active_loop = Some(fx.audio.play_looping(sound));
        }
    }

    /// Responds to an overlap with `other`.
    ///
    /// Crouching beneath an elevated object and jumping over a low one are
    /// allowed; anything else pushes the player back.
    pub fn process_collision(&mut self, body: &mut Body, other: &Collider) {
        match self.state {
            PlayerState::Crouching if other.flags.elevated => {
                self.object_under = Some(other.node);
            }
            PlayerState::Jumping if !other.flags.high => {
                self.object_under = None;
            }
            _ => {
                self.object_under = None;
                body.revert_displacement();
            }
        }
    }
}
