//! Integration tests for clearance subtraction on outline sides.
//!
//! Each case places pads against a plain 10 x 4 mm rectangle and checks what
//! survives on the affected side, independently of any drawing surface.

use sfm10_footprint_mcp::geometry::{
    Interval, IntervalSet, OutlineBuilder, Pad, PadRotation, PadSpec, Point, Rect, Side,
};

const EPSILON: f64 = 1e-9;

fn rect() -> Rect {
    Rect {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 10.0,
        max_y: 4.0,
    }
}

/// A pad whose copper spans `width` along X and 1 mm along Y.
fn pad_at(x: f64, y: f64, width: f64) -> Pad {
    Pad {
        position: Point::new(x, y),
        spec: PadSpec::smd(1.0, width, 0.0, PadRotation::Deg0),
        designator: 1,
    }
}

fn bounds(set: &IntervalSet) -> Vec<(f64, f64)> {
    set.iter().map(|i| (i.start, i.end)).collect()
}

fn assert_bounds(actual: &[(f64, f64)], expected: &[(f64, f64)]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for ((a0, a1), (e0, e1)) in actual.iter().zip(expected) {
        assert!((a0 - e0).abs() < EPSILON && (a1 - e1).abs() < EPSILON, "{actual:?}");
    }
}

// =============================================================================
// Interval Sets
// =============================================================================

#[test]
fn interior_cut_splits() {
    let mut set = IntervalSet::single(Interval::new(0.0, 10.0));
    set.subtract(Interval::new(3.0, 6.0));
    assert_bounds(&bounds(&set), &[(0.0, 3.0), (6.0, 10.0)]);
    assert!((set.total_length() - 7.0).abs() < EPSILON);
}

#[test]
fn overlapping_cuts_merge_their_gap() {
    let mut set = IntervalSet::single(Interval::new(0.0, 10.0));
    set.subtract(Interval::new(2.0, 5.0));
    set.subtract(Interval::new(4.0, 7.0));
    set.subtract(Interval::new(9.0, 12.0));
    assert_bounds(&bounds(&set), &[(0.0, 2.0), (7.0, 9.0)]);
}

#[test]
fn touching_cut_leaves_interval_alone() {
    let mut set = IntervalSet::single(Interval::new(0.0, 10.0));
    set.subtract(Interval::new(10.0, 12.0));
    assert_bounds(&bounds(&set), &[(0.0, 10.0)]);
}

#[test]
fn covering_cut_empties_set() {
    let mut set = IntervalSet::single(Interval::new(0.0, 10.0));
    set.subtract(Interval::new(-1.0, 11.0));
    assert!(set.is_empty());
}

// =============================================================================
// Outline Sides
// =============================================================================

#[test]
fn pad_inside_side_leaves_two_segments() {
    // Zone along X is [3.5, 6.5]; both ends are at least 1 mm long
    let pads = [pad_at(5.0, 0.0, 2.0)];
    let top = OutlineBuilder::new(0.5, 1.0).side_intervals(&rect(), Side::Top, &pads);
    assert_bounds(&bounds(&top), &[(0.0, 3.5), (6.5, 10.0)]);
}

#[test]
fn short_leading_fragment_is_suppressed() {
    // Zone along X is [0.5, 3.5]; the [0, 0.5] stub is below 1 mm
    let pads = [pad_at(2.0, 0.0, 2.0)];
    let top = OutlineBuilder::new(0.5, 1.0).side_intervals(&rect(), Side::Top, &pads);
    assert_bounds(&bounds(&top), &[(3.5, 10.0)]);
}

#[test]
fn both_fragments_suppressed_when_too_short() {
    let pads = [pad_at(5.0, 0.0, 2.0)];
    let top = OutlineBuilder::new(0.5, 4.0).side_intervals(&rect(), Side::Top, &pads);
    assert!(top.is_empty());
}

#[test]
fn pad_covering_side_removes_it() {
    let pads = [pad_at(5.0, 0.0, 12.0)];
    let builder = OutlineBuilder::new(0.5, 0.2);
    assert!(builder.side_intervals(&rect(), Side::Top, &pads).is_empty());

    let segments = builder.build(&rect(), &pads);
    assert!(segments.iter().all(|s| s.side != Side::Top));
}

#[test]
fn pad_clear_of_every_side_keeps_outline_whole() {
    let pads = [pad_at(5.0, 2.0, 2.0)];
    let segments = OutlineBuilder::new(0.5, 0.2).build(&rect(), &pads);

    assert_eq!(segments.len(), 4);
    let sides: Vec<Side> = segments.iter().map(|s| s.side).collect();
    assert_eq!(sides, Side::ALL);
}

#[test]
fn zone_touching_line_does_not_cut() {
    // Zone along Y is [3.0, 4.0]; its edge sits exactly on the bottom line
    let pads = [pad_at(5.0, 3.5, 2.0)];
    let bottom = OutlineBuilder::new(0.0, 0.2).side_intervals(&rect(), Side::Bottom, &pads);
    assert_bounds(&bounds(&bottom), &[(0.0, 10.0)]);
}

#[test]
fn zero_width_pad_without_clearance_leaves_side_whole() {
    let pads = [pad_at(5.0, 0.0, 0.0)];
    let segments = OutlineBuilder::new(0.0, 0.0).build(&rect(), &pads);
    assert_eq!(segments.len(), 4);

    let top = OutlineBuilder::new(0.0, 0.0).side_intervals(&rect(), Side::Top, &pads);
    assert_bounds(&bounds(&top), &[(0.0, 10.0)]);
}

#[test]
fn abutting_zones_leave_no_sliver() {
    // Zones of 1.1 mm at a 1.1 mm pitch touch end to end
    let pads: Vec<Pad> = (0..5)
        .map(|i| pad_at(2.0 + 1.1 * f64::from(i), 0.0, 0.7))
        .collect();
    let top = OutlineBuilder::new(0.2, 0.0).side_intervals(&rect(), Side::Top, &pads);
    assert_eq!(top.len(), 2, "{:?}", bounds(&top));
    assert!((top.as_slice()[0].end - 1.45).abs() < EPSILON);
    assert!((top.as_slice()[1].start - 6.95).abs() < EPSILON);
}

#[test]
fn vertical_sides_use_y_projection() {
    let pad = Pad {
        position: Point::new(10.0, 2.0),
        spec: PadSpec::smd(1.0, 0.5, 0.0, PadRotation::Deg90),
        designator: 1,
    };
    // Rotated: 1 mm along X, 0.5 mm along Y; zone along Y is [1.55, 2.45]
    let right = OutlineBuilder::new(0.2, 0.2).side_intervals(&rect(), Side::Right, &[pad]);
    assert_bounds(&bounds(&right), &[(0.0, 1.55), (2.45, 4.0)]);
}
