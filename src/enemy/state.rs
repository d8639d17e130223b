//! Enemy awareness states.

use serde::{Deserialize, Serialize};

/// What an enemy can currently perceive of its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Perception {
    /// The target is within sight range.
    pub can_see: bool,
    /// The target is within hearing range and loud enough.
    pub can_hear: bool,
}

/// Awareness level of an enemy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyState {
    /// Unaware of the target.
    #[default]
    Idle,
    /// Heard the target and is closing in.
    Seeking,
    /// Sees the target and is chasing at full speed.
    Pursuing,
}

impl EnemyState {
    /// Evaluates the transition table once from `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skulk::enemy::{EnemyState, Perception};
    /// let heard = Perception { can_see: false, can_hear: true };
    /// assert_eq!(EnemyState::Idle.next(heard), Some(EnemyState::Seeking));
    /// assert_eq!(EnemyState::Seeking.next(heard), None);
    /// ```
    #[must_use]
    pub const fn next(self, perception: Perception) -> Option<Self> {
        let Perception { can_see, can_hear } = perception;
        match self {
            Self::Idle | Self::Seeking if can_see => Some(Self::Pursuing),
            Self::Idle if can_hear => Some(Self::Seeking),
            Self::Seeking if !can_hear => Some(Self::Idle),
            Self::Pursuing if !can_see && can_hear => Some(Self::Seeking),
            Self::Pursuing if !can_see => Some(Self::Idle),
            Self::Idle | Self::Seeking | Self::Pursuing => None,
        }
    }
}
