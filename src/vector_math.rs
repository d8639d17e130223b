//! Small helpers for building movement directions and normalised vectors.
use glam::Vec2;

/// Returns the unit vector in the direction of `vector`.
///
/// Non-finite input and the zero vector both yield [`Vec2::ZERO`], so callers
/// never divide by a zero length.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use skulk::vec_normalize;
/// let unit = vec_normalize(Vec2::new(3.0, 4.0));
/// assert!((unit.x - 0.6).abs() < 1e-6);
/// assert!((unit.y - 0.8).abs() < 1e-6);
///
/// assert_eq!(vec_normalize(Vec2::ZERO), Vec2::ZERO);
/// ```
#[must_use]
pub fn vec_normalize(vector: Vec2) -> Vec2 {
    if !vector.is_finite() {
        return Vec2::ZERO;
    }
    vector.try_normalize().unwrap_or(Vec2::ZERO)
}

/// Builds a normalised direction from four directional key states.
///
/// Up is `+y`, down is `-y`, left is `-x` and right is `+x`. Opposing keys
/// cancel out. Diagonals are normalised so they are not faster than a single
/// axis.
///
/// # Examples
///
/// ```
/// use skulk::vector_math::axis_direction;
/// let diagonal = axis_direction(true, false, false, true);
/// assert!((diagonal.length() - 1.0).abs() < 1e-6);
/// assert_eq!(axis_direction(true, true, false, false), glam::Vec2::ZERO);
/// ```
#[must_use]
pub fn axis_direction(up: bool, down: bool, left: bool, right: bool) -> Vec2 {
    /// Maps a negative/positive key pair to an axis value.
    const fn axis(neg: bool, pos: bool) -> f32 {
        match (neg, pos) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    vec_normalize(Vec2::new(axis(left, right), axis(down, up)))
}
