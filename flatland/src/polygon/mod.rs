mod core;
mod solvers;
mod transform;

use glam::DVec2;

use std::fmt::{self, Debug, Formatter};
use std::ops::Index;

/// Structure used to represent a simple polygon by its boundary vertices, stored in drawing order.
///
/// The vertex buffer is owned exclusively by the polygon: cloning deep-copies the boundary, and moving
/// transfers it. The area centroid is computed once at construction and maintained through every
/// transformation, so reading it never triggers a recomputation.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
	vertices: Vec<DVec2>,
	center: DVec2,
}

/// Iteration structure for iterating across each boundary edge of a `Polygon`, including the closing edge back to the first vertex.
pub struct PolygonEdgeIter<'a> {
	index: usize,
	polygon: &'a Polygon,
}

impl Index<usize> for Polygon {
	type Output = DVec2;

	fn index(&self, index: usize) -> &Self::Output {
		assert!(index < self.len(), "Index out of bounds in trait Index of Polygon.");
		&self.vertices[index]
	}
}

impl Iterator for PolygonEdgeIter<'_> {
	type Item = [DVec2; 2];

	// Returns each edge as a pair of adjacent vertices, wrapping around to close the boundary.
	fn next(&mut self) -> Option<Self::Item> {
		if self.index >= self.polygon.len() {
			return None;
		}
		let start_index = self.index;
		let end_index = (self.index + 1) % self.polygon.len();
		self.index += 1;

		Some([self.polygon[start_index], self.polygon[end_index]])
	}
}

impl Debug for Polygon {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Polygon").field("vertices", &self.vertices).field("center", &self.center).finish()
	}
}
