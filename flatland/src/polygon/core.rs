use super::*;
use crate::ShapeError;

/// Functionality relating to core `Polygon` operations, such as constructors and accessors.
impl Polygon {
	/// Create a new `Polygon` from its boundary vertices, given in drawing order.
	///
	/// At least three vertices are required, and the boundary must enclose a nonzero area:
	/// a fully collinear vertex list has no centroid to position the polygon by.
	pub fn new(vertices: Vec<DVec2>) -> Result<Polygon, ShapeError> {
		if vertices.len() < 3 {
			return Err(ShapeError::NotEnoughVertices(vertices.len()));
		}
		let mut polygon = Polygon { vertices, center: DVec2::ZERO };
		if polygon.signed_area() == 0. {
			return Err(ShapeError::DegeneratePolygon);
		}
		polygon.center = polygon.centroid();
		Ok(polygon)
	}

	/// The boundary vertices in drawing order.
	pub fn vertices(&self) -> &[DVec2] {
		&self.vertices
	}

	/// Whether there are no boundary vertices at all. Always `false`, since construction requires at least three.
	pub fn is_empty(&self) -> bool {
		self.vertices.is_empty()
	}

	/// The number of boundary vertices. Always at least three.
	pub fn len(&self) -> usize {
		self.vertices.len()
	}

	/// The area centroid, cached at construction and carried along by every transformation.
	pub fn center(&self) -> DVec2 {
		self.center
	}

	/// Create an iterator over the boundary edges, each one a `[start, end]` vertex pair.
	pub fn edges(&self) -> PolygonEdgeIter<'_> {
		PolygonEdgeIter { index: 0, polygon: self }
	}
}
