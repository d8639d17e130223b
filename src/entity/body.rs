//! Position, footprint and displacement tracking for world entities.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::aabb::Aabb;
use crate::scene::NodeId;

/// Classification flags driving collision responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Each flag is an independent classification used by collision policy."
)]
pub struct EntityFlags {
    /// Too tall to jump over; can be stood behind as cover.
    pub high: bool,
    /// Raised off the ground; can be crouched under.
    pub elevated: bool,
    /// Does not get pushed by collision response.
    pub fixed: bool,
    /// The player may interact with it.
    pub interactive: bool,
}

impl Default for EntityFlags {
    fn default() -> Self {
        Self {
            high: true,
            elevated: false,
            fixed: true,
            interactive: false,
        }
    }
}

/// Spatial state shared by every world entity.
///
/// `position` is the bottom-left corner of the visual footprint. The bounding
/// box is re-centred on every position change, so it never lags behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    position: Vec2,
    size: Vec2,
    bounding_box: Aabb,
    previous_position: Vec2,
    previous_bounding_box: Aabb,
    flags: EntityFlags,
    last_interactor: Option<NodeId>,
}

impl Body {
    /// Creates a body at `position` with a `size` footprint.
    #[must_use]
    pub fn new(position: Vec2, size: Vec2) -> Self {
        let bounding_box = Aabb::from_footprint(position, size);
        Self {
            position,
            size,
            bounding_box,
            previous_position: position,
            previous_bounding_box: bounding_box,
            flags: EntityFlags::default(),
            last_interactor: None,
        }
    }

    /// Bottom-left corner of the footprint in world space.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Moves the body and re-centres its bounding box.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.bounding_box.set_centre(self.centre());
    }

    /// Moves the body by `delta`.
    pub fn adjust(&mut self, delta: Vec2) {
        self.set_position(self.position + delta);
    }

    /// Width and height of the visual footprint.
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        self.size
    }

    /// Resizes the footprint, keeping the bottom-left corner in place.
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
        self.bounding_box = Aabb::from_footprint(self.position, size);
    }

    /// Centre of the visual footprint.
    #[must_use]
    pub fn centre(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Current collision volume.
    #[must_use]
    pub const fn bounding_box(&self) -> Aabb {
        self.bounding_box
    }

    /// Position captured at the start of the current update.
    #[must_use]
    pub const fn previous_position(&self) -> Vec2 {
        self.previous_position
    }

    /// Bounding box captured at the start of the current update.
    #[must_use]
    pub const fn previous_bounding_box(&self) -> Aabb {
        self.previous_bounding_box
    }

    /// Movement since the start of the current update.
    #[must_use]
    pub fn displacement(&self) -> Vec2 {
        self.position - self.previous_position
    }

    /// Records the pre-movement snapshot. Runs before any behaviour moves the
    /// body.
    pub fn begin_update(&mut self) {
        self.previous_position = self.position;
        self.previous_bounding_box = self.bounding_box;
    }

    /// Undoes this tick's movement.
    pub fn revert_displacement(&mut self) {
        self.set_position(self.previous_position);
    }

    /// Classification flags.
    #[must_use]
    pub const fn flags(&self) -> &EntityFlags {
        &self.flags
    }

    /// Mutable classification flags.
    pub fn flags_mut(&mut self) -> &mut EntityFlags {
        &mut self.flags
    }

    /// Last node that interacted with this body.
    #[must_use]
    pub const fn last_interactor(&self) -> Option<NodeId> {
        self.last_interactor
    }

    pub(crate) fn record_interaction(&mut self, actor: NodeId) {
        self.last_interactor = Some(actor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn setting_position_recentres_bounding_box() {
        let mut body = Body::new(Vec2::ZERO, Vec2::new(32.0, 64.0));
        body.set_position(Vec2::new(10.0, -5.0));
        assert_eq!(body.bounding_box().centre(), Vec2::new(26.0, 27.0));
        assert_eq!(body.bounding_box().half_widths(), Vec2::new(16.0, 32.0));
    }

    #[test]
    fn displacement_tracks_movement_since_snapshot() {
        let mut body = Body::new(Vec2::new(1.0, 1.0), Vec2::ONE);
        body.adjust(Vec2::new(3.0, 0.0));
        body.begin_update();
        body.adjust(Vec2::new(0.5, -2.0));
        assert_relative_eq!(body.displacement().x, 0.5);
        assert_relative_eq!(body.displacement().y, -2.0);
        assert_eq!(body.previous_position(), Vec2::new(4.0, 1.0));
    }

    #[test]
    fn revert_returns_to_snapshot() {
        let mut body = Body::new(Vec2::ZERO, Vec2::splat(10.0));
        body.begin_update();
        body.adjust(Vec2::new(7.0, 7.0));
        body.revert_displacement();
        assert_eq!(body.position(), body.previous_position());
        assert_eq!(body.bounding_box(), body.previous_bounding_box());
    }

    #[test]
    fn resizing_keeps_origin() {
        let mut body = Body::new(Vec2::new(2.0, 2.0), Vec2::splat(2.0));
        body.set_size(Vec2::new(4.0, 8.0));
        assert_eq!(body.position(), Vec2::new(2.0, 2.0));
        assert_eq!(body.bounding_box().centre(), Vec2::new(4.0, 6.0));
    }

    #[test]
    fn default_flags_match_scenery() {
        let flags = EntityFlags::default();
        assert!(flags.high && flags.fixed);
        assert!(!flags.elevated && !flags.interactive);
    }
}
