//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_base_epsilon_is_positive() {
    assert!(BASE_EPSILON > 0.0, "BASE_EPSILON must be positive");
}

#[test]
fn test_degenerate_threshold_value() {
    // Boundary cleanup collapses points closer than 0.1 world units
    assert_eq!(DEGENERATE_POINT_FACTOR * BASE_EPSILON, 0.1);
}

// =============================================================================
// REGION TESTS
// =============================================================================

#[test]
fn test_circular_hole_segment_count() {
    assert_eq!(CIRCULAR_HOLE_SEGMENTS, 200);
}

#[test]
fn test_steiner_radius_divisor() {
    assert_eq!(STEINER_RADIUS_DIVISOR, 8.0);
}

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_level() {
    assert_eq!(DEFAULT_LEVEL, 1);
}

#[test]
fn test_default_height() {
    assert_eq!(DEFAULT_HEIGHT, 1.0);
}

#[test]
fn test_default_hole_radius_disables_hole() {
    assert_eq!(DEFAULT_HOLE_RADIUS, 0.0);
}

#[test]
fn test_default_steiner_points() {
    assert_eq!(DEFAULT_STEINER_POINTS, 0);
}

// =============================================================================
// SMOOTHING TESTS
// =============================================================================

#[test]
fn test_axis_aligned_threshold_range() {
    assert!(AXIS_ALIGNED_THRESHOLD > 0.0 && AXIS_ALIGNED_THRESHOLD < 1.0);
}

#[test]
fn test_smoothing_groups_are_distinct_bits() {
    // Group ids double as bit flags for downstream normal sharing
    assert_eq!(SMOOTHING_GROUP_BOTTOM, 1);
    assert_eq!(SMOOTHING_GROUP_TOP, 2);
    assert_eq!(SMOOTHING_GROUP_SIDE, 4);
    assert_eq!(
        SMOOTHING_GROUP_BOTTOM & SMOOTHING_GROUP_TOP & SMOOTHING_GROUP_SIDE,
        0
    );
}
