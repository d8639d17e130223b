//! Axis-aligned bounding boxes used for overlap tests.

use glam::Vec2;
use serde::Serialize;

/// Axis-aligned box described by its centre and half extents.
///
/// Half widths are never negative; [`Aabb::new`] clamps them at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Aabb {
    centre: Vec2,
    half_widths: Vec2,
}

impl Aabb {
    /// Creates a box, clamping negative half widths to zero.
    #[must_use]
    pub fn new(centre: Vec2, half_widths: Vec2) -> Self {
        Self {
            centre,
            half_widths: half_widths.max(Vec2::ZERO),
        }
    }

    /// Creates the box covering a `size` footprint whose bottom-left corner
    /// sits at `origin`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::Vec2;
    /// use skulk::Aabb;
    /// let aabb = Aabb::from_footprint(Vec2::new(10.0, 20.0), Vec2::new(32.0, 64.0));
    /// assert_eq!(aabb.centre(), Vec2::new(26.0, 52.0));
    /// assert_eq!(aabb.half_widths(), Vec2::new(16.0, 32.0));
    /// ```
    #[must_use]
    pub fn from_footprint(origin: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self::new(origin + half, half)
    }

    /// Centre of the box.
    #[must_use]
    pub const fn centre(&self) -> Vec2 {
        self.centre
    }

    /// Half extents of the box along each axis.
    #[must_use]
    pub const fn half_widths(&self) -> Vec2 {
        self.half_widths
    }

    /// Moves the box without changing its extents.
    pub fn set_centre(&mut self, centre: Vec2) {
        self.centre = centre;
    }

    /// Replaces the half extents, clamping negatives to zero.
    pub fn set_half_widths(&mut self, half_widths: Vec2) {
        self.half_widths = half_widths.max(Vec2::ZERO);
    }

    /// Returns `true` when the boxes touch or overlap on both axes.
    ///
    /// Touching edges count as an overlap. The test is symmetric and does not
    /// exclude a box from overlapping itself.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let gap = (self.centre - other.centre).abs();
        let reach = self.half_widths + other.half_widths;
        gap.x <= reach.x && gap.y <= reach.y
    }
}
