//! Player action input captured once per frame.
//!
//! Device polling lives outside the core. Frontends translate whatever they
//! poll into an [`InputSnapshot`] before ticking the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::vector_math::axis_direction;

/// Pressed state of every action the player controller reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "This struct represents the pressed state of eight independent actions."
)]
pub struct InputSnapshot {
    /// Whether the "up" direction is held.
    pub up: bool,
    /// Whether the "down" direction is held.
    pub down: bool,
    /// Whether the "left" direction is held.
    pub left: bool,
    /// Whether the "right" direction is held.
    pub right: bool,
    /// Whether the run modifier is held.
    pub run: bool,
    /// Whether the crouch action is held.
    pub crouch: bool,
    /// Whether the jump action is held.
    pub jump: bool,
    /// Whether the interact action is held.
    pub interact: bool,
}

impl InputSnapshot {
    /// Returns `true` when any directional key is held.
    #[must_use]
    pub const fn movement_requested(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Returns `true` when the run modifier is held.
    #[must_use]
    pub const fn run_requested(&self) -> bool {
        self.run
    }

    /// Returns `true` when the crouch action is held.
    #[must_use]
    pub const fn crouch_requested(&self) -> bool {
        self.crouch
    }

    /// Returns `true` when the jump action is held.
    #[must_use]
    pub const fn jump_requested(&self) -> bool {
        self.jump
    }

    /// Returns `true` when the interact action is held.
    #[must_use]
    pub const fn interact_requested(&self) -> bool {
        self.interact
    }

    /// Normalised movement direction for the held directional keys.
    ///
    /// Returns [`Vec2::ZERO`] when no keys are held or opposing keys cancel.
    #[must_use]
    pub fn direction(&self) -> Vec2 {
        axis_direction(self.up, self.down, self.left, self.right)
    }
}
