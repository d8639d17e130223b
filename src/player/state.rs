//! Player states and the transition table between them.

use serde::{Deserialize, Serialize};

/// States the player can assume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerState {
    /// Standing still.
    #[default]
    Idle,
    /// Moving at walking speed.
    Walking,
    /// Moving at running speed.
    Running,
    /// Crouched, possibly beneath an elevated object.
    Crouching,
    /// In the air.
    Jumping,
    /// Using a nearby interactive object.
    Interacting,
}

/// Everything the transition table reads in one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Each field is an independent condition of the transition table."
)]
pub struct TransitionInputs {
    /// A directional key is held.
    pub movement: bool,
    /// The run modifier is held.
    pub run: bool,
    /// The crouch action is held.
    pub crouch: bool,
    /// The jump action is held.
    pub jump: bool,
    /// The interact action is held.
    pub interact: bool,
    /// An interactive entity is within reach.
    pub can_interact: bool,
    /// The player is crouched beneath an elevated object.
    pub sheltered: bool,
}

impl PlayerState {
    /// Evaluates the transition table once from `self`.
    ///
    /// Conditions are checked in table order and the first match wins.
    /// Returns `None` when the player stays in the current state.
    ///
    /// # Examples
    ///
    /// ```
    /// use skulk::player::{PlayerState, TransitionInputs};
    /// let inputs = TransitionInputs { movement: true, ..Default::default() };
    /// assert_eq!(PlayerState::Idle.next(&inputs), Some(PlayerState::Walking));
    /// assert_eq!(PlayerState::Walking.next(&inputs), None);
    /// ```
    #[must_use]
    pub const fn next(self, inputs: &TransitionInputs) -> Option<Self> {
        match self {
            Self::Idle => {
                if inputs.movement {
                    Some(Self::gait(inputs.run))
                } else if inputs.crouch {
                    Some(Self::Crouching)
                } else if inputs.jump {
                    Some(Self::Jumping)
                } else if inputs.interact && inputs.can_interact {
                    Some(Self::Interacting)
                } else {
                    None
                }
            }
            Self::Walking => {
                if !inputs.movement {
                    Some(Self::Idle)
                } else if inputs.run {
                    Some(Self::Running)
                } else if inputs.crouch {
                    Some(Self::Crouching)
                } else if inputs.jump {
                    Some(Self::Jumping)
                } else if inputs.interact && inputs.can_interact {
                    Some(Self::Interacting)
                } else {
                    None
                }
            }
            Self::Running => {
                if !inputs.movement {
                    Some(Self::Idle)
                } else if !inputs.run {
                    Some(Self::Walking)
                } else if inputs.crouch {
                    Some(Self::Crouching)
                } else if inputs.jump {
                    Some(Self::Jumping)
                } else {
                    None
                }
            }
            Self::Crouching if !inputs.crouch && !inputs.sheltered => Some(Self::settle(inputs)),
            Self::Jumping if !inputs.jump => Some(Self::settle(inputs)),
            Self::Interacting if !inputs.interact => Some(Self::settle(inputs)),
            Self::Crouching | Self::Jumping | Self::Interacting => None,
        }
    }

    /// Animation shown while in this state.
    #[must_use]
    pub const fn animation(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walking | Self::Running => "walk",
            Self::Crouching => "crouch",
            Self::Jumping => "jump",
            Self::Interacting => "interact",
        }
    }

    /// Sound looped for as long as this state is held.
    #[must_use]
    pub const fn looping_sound(self) -> Option<&'static str> {
        match self {
            Self::Walking => Some("walk"),
            Self::Running => Some("run"),
            Self::Crouching => Some("crouch"),
            Self::Idle | Self::Jumping | Self::Interacting => None,
        }
    }

    /// State entered when leaving a held action.
    const fn settle(inputs: &TransitionInputs) -> Self {
        if inputs.movement {
            Self::gait(inputs.run)
        } else {
            Self::Idle
        }
    }

    /// Walking or running depending on the run modifier.
    const fn gait(run: bool) -> Self {
        if run {
            Self::Running
        } else {
            Self::Walking
        }
    }
}
