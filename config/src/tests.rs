//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_parallel_tolerance_larger_than_epsilon() {
    assert!(
        PARALLEL_TOLERANCE >= EPSILON,
        "PARALLEL_TOLERANCE should be >= EPSILON"
    );
}

#[test]
fn test_radius_tolerance_is_small() {
    assert!(RADIUS_TOLERANCE > 0.0);
    assert!(RADIUS_TOLERANCE <= 1e-3);
}

// =============================================================================
// DISC DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_radius_is_unit() {
    assert_eq!(DEFAULT_DISC_RADIUS, 1.0);
}

#[test]
fn test_default_normal_is_plus_z() {
    assert_eq!(DEFAULT_DISC_NORMAL, [0.0, 0.0, 1.0]);
}

#[test]
fn test_min_segments_at_least_three() {
    // A fan needs at least 3 boundary points to form a polygon
    assert!(MIN_DISC_SEGMENTS >= 3);
}

#[test]
fn test_default_segments_within_bounds() {
    assert!(DEFAULT_DISC_SEGMENTS >= MIN_DISC_SEGMENTS);
    assert!(DEFAULT_DISC_SEGMENTS <= MAX_DISC_SEGMENTS);
}

#[test]
fn test_basis_seeds_are_not_parallel() {
    let [ax, ay, az] = PRIMARY_BASIS_SEED;
    let [bx, by, bz] = FALLBACK_BASIS_SEED;
    let cross = [ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx];
    assert!(cross.iter().any(|c| c.abs() > PARALLEL_TOLERANCE));
}

#[test]
fn test_color_channel_max_is_byte_max() {
    assert_eq!(COLOR_CHANNEL_MAX, u8::MAX as f32);
}

// =============================================================================
// LAYOUT TESTS
// =============================================================================

#[test]
fn test_floats_per_triangle() {
    assert_eq!(FLOATS_PER_VERTEX, 3);
    assert_eq!(FLOATS_PER_TRIANGLE, 9);
}

// =============================================================================
// APPROX_ZERO TESTS
// =============================================================================

#[test]
fn test_approx_zero_exact_zero() {
    assert!(approx_zero(0.0));
}

#[test]
fn test_approx_zero_within_epsilon() {
    let small = EPSILON / 2.0;
    assert!(approx_zero(small));
    assert!(approx_zero(-small));
}

#[test]
fn test_approx_zero_outside_epsilon() {
    let large = EPSILON * 2.0;
    assert!(!approx_zero(large));
    assert!(!approx_zero(-large));
}
