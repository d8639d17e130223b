//! Float-tolerant assertions.

use approx::relative_eq;
use glam::Vec2;

/// Tolerance used by [`assert_vec2_near`].
pub const EPSILON: f32 = 1e-4;

/// Assert that `actual` is within [`EPSILON`] of `expected` on both axes.
///
/// # Panics
/// Panics with both vectors in the message when either axis differs.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use test_utils::assert_vec2_near;
/// assert_vec2_near(Vec2::new(0.1 + 0.2, 1.0), Vec2::new(0.3, 1.0));
/// ```
#[track_caller]
pub fn assert_vec2_near(actual: Vec2, expected: Vec2) {
    let close = relative_eq!(actual.x, expected.x, epsilon = EPSILON)
        && relative_eq!(actual.y, expected.y, epsilon = EPSILON);
    assert!(close, "expected {expected:?}, got {actual:?}");
}
