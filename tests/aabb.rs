//! Overlap properties of axis-aligned bounding boxes.

use glam::Vec2;
use rstest::rstest;
use skulk::Aabb;

fn unit_at(x: f32, y: f32) -> Aabb {
    Aabb::new(Vec2::new(x, y), Vec2::ONE)
}

#[rstest]
#[case::coincident(unit_at(0.0, 0.0), true)]
#[case::partial(unit_at(1.5, 0.5), true)]
#[case::touching_right_edge(unit_at(2.0, 0.0), true)]
#[case::touching_corner(unit_at(2.0, -2.0), true)]
#[case::apart_on_x(unit_at(2.01, 0.0), false)]
#[case::apart_on_y(unit_at(0.0, -3.0), false)]
#[case::apart_on_diagonal(unit_at(2.5, 2.5), false)]
fn overlap_against_unit_box(#[case] other: Aabb, #[case] expected: bool) {
    let origin = unit_at(0.0, 0.0);
    assert_eq!(origin.overlaps(&other), expected);
    assert_eq!(other.overlaps(&origin), expected, "overlap must be symmetric");
}

#[rstest]
fn a_box_overlaps_itself() {
    let aabb = Aabb::from_footprint(Vec2::new(3.0, 4.0), Vec2::new(10.0, 2.0));
    assert!(aabb.overlaps(&aabb));
}

#[rstest]
fn degenerate_boxes_still_touch() {
    let point = Aabb::new(Vec2::new(1.0, 1.0), Vec2::ZERO);
    assert!(point.overlaps(&unit_at(0.0, 0.0)));
    assert!(!point.overlaps(&unit_at(3.0, 3.0)));
}

#[rstest]
#[case(Vec2::new(-1.0, 2.0), Vec2::new(0.0, 2.0))]
#[case(Vec2::new(-3.0, -3.0), Vec2::ZERO)]
fn negative_half_widths_clamp_to_zero(#[case] requested: Vec2, #[case] expected: Vec2) {
    assert_eq!(Aabb::new(Vec2::ZERO, requested).half_widths(), expected);
    let mut aabb = unit_at(0.0, 0.0);
    aabb.set_half_widths(requested);
    assert_eq!(aabb.half_widths(), expected);
}

#[rstest]
fn moving_the_centre_keeps_extents() {
    let mut aabb = Aabb::from_footprint(Vec2::ZERO, Vec2::new(32.0, 64.0));
    aabb.set_centre(Vec2::new(100.0, 100.0));
    assert_eq!(aabb.centre(), Vec2::new(100.0, 100.0));
    assert_eq!(aabb.half_widths(), Vec2::new(16.0, 32.0));
}
