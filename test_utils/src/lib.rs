//! Utility helpers for Skulk tests.
//!
//! `world` builds small scenes around a single player and ticks them with
//! silent sinks; `assertions` holds float-tolerant checks for vectors.

pub mod assertions;
pub mod world;

pub use assertions::assert_vec2_near;
pub use world::{press, TestWorld, STEP};
