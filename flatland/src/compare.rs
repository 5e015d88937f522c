//! Helpers for comparing floating point numbers in unit tests.
#![allow(dead_code)]

use crate::consts::MAX_ABSOLUTE_DIFFERENCE;

use glam::DVec2;

/// Compare two `f64`s with respect to the crate-wide tolerance.
pub fn compare_f64s(f1: f64, f2: f64) -> bool {
	(f1 - f2).abs() < MAX_ABSOLUTE_DIFFERENCE
}

/// Compare the components of two points with respect to the crate-wide tolerance.
pub fn compare_points(p1: DVec2, p2: DVec2) -> bool {
	p1.abs_diff_eq(p2, MAX_ABSOLUTE_DIFFERENCE)
}

/// Compare two lists of points pairwise with a provided max absolute value difference.
pub fn compare_vec_of_points(vec1: Vec<DVec2>, vec2: Vec<DVec2>, max_absolute_difference: f64) -> bool {
	vec1.len() == vec2.len() && vec1.into_iter().zip(vec2).all(|(p1, p2)| p1.abs_diff_eq(p2, max_absolute_difference))
}
