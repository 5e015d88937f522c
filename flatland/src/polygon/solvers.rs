use super::*;
use crate::FrameRect;

/// Functionality relating to the geometric queries a `Polygon` answers.
impl Polygon {
	/// The signed area of the boundary by the shoelace formula. The sign encodes the winding
	/// direction: positive for counter-clockwise vertex order, negative for clockwise.
	pub fn signed_area(&self) -> f64 {
		0.5 * self.edges().map(|[start, end]| start.perp_dot(end)).sum::<f64>()
	}

	/// The enclosed surface area, independent of winding direction.
	pub fn area(&self) -> f64 {
		self.signed_area().abs()
	}

	/// The minimal axis-aligned frame covering every vertex. Its position is the box center,
	/// which in general differs from the polygon's centroid.
	pub fn frame_rect(&self) -> FrameRect {
		let bounds = self.vertices.iter().fold([self.vertices[0], self.vertices[0]], |[min, max], &vertex| [min.min(vertex), max.max(vertex)]);
		FrameRect::from_box(bounds)
	}

	/// The area centroid: the average of the edge midpoints weighted by each edge's cross term,
	/// normalized by six times the signed area.
	pub(crate) fn centroid(&self) -> DVec2 {
		self.edges().map(|[start, end]| (start + end) * start.perp_dot(end)).sum::<DVec2>() / (6. * self.signed_area())
	}
}
