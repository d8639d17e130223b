//! Simulation tuning loaded from JSON.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_ELAPSED_SECONDS, PLAYER_NAME};
use crate::enemy::EnemyTuning;
use crate::error::ConfigError;
use crate::player::PlayerTuning;

/// Tunable parameters of a [`crate::simulation::Simulation`].
///
/// Every field may be omitted from a JSON document, in which case the
/// defaults from [`crate::constants`] apply.
///
/// # Examples
///
/// ```
/// use skulk::config::SimulationConfig;
///
/// let config = SimulationConfig::from_json_str(r#"{ "enemy": { "sight_range": 80.0 } }"#)
///     .expect("valid config");
/// assert_eq!(config.enemy.sight_range, 80.0);
/// assert_eq!(config.player_name, "Player");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Default tuning for players.
    pub player: PlayerTuning,
    /// Default tuning for enemies.
    pub enemy: EnemyTuning,
    /// Largest frame delta accepted by one tick, in seconds.
    pub max_elapsed_seconds: f32,
    /// Name of the node enemies track.
    pub player_name: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            player: PlayerTuning::default(),
            enemy: EnemyTuning::default(),
            max_elapsed_seconds: MAX_ELAPSED_SECONDS,
            player_name: PLAYER_NAME.to_owned(),
        }
    }
}

impl SimulationConfig {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] when the document is not valid.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a configuration from a JSON reader.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] when the document is not valid.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Clamps a frame delta into `0..=max_elapsed_seconds`.
    ///
    /// Non-finite and negative deltas become zero.
    #[must_use]
    pub fn clamp_elapsed(&self, elapsed: f32) -> f32 {
        if elapsed.is_finite() && elapsed > 0.0 {
            elapsed.min(self.max_elapsed_seconds)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SimulationConfig::from_json_str("{}").expect("valid config");
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = SimulationConfig::from_json_str("{ \"player\": 3 }").expect_err("invalid");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn reader_accepts_partial_overrides() {
        let json = br#"{ "player": { "run_multiplier": 3.0 }, "player_name": "Hero" }"#;
        let config = SimulationConfig::from_json_reader(&json[..]).expect("valid config");
        assert!((config.player.run_multiplier - 3.0).abs() < f32::EPSILON);
        assert!((config.player.walk_speed - crate::constants::PLAYER_WALK_SPEED).abs() < f32::EPSILON);
        assert_eq!(config.player_name, "Hero");
    }

    #[rstest]
    #[case(0.1, 0.1)]
    #[case(1.0, MAX_ELAPSED_SECONDS)]
    #[case(-0.5, 0.0)]
    #[case(f32::NAN, 0.0)]
    #[case(f32::INFINITY, 0.0)]
    fn elapsed_is_clamped(#[case] input: f32, #[case] expected: f32) {
        let config = SimulationConfig::default();
        assert!((config.clamp_elapsed(input) - expected).abs() < f32::EPSILON);
    }
}
