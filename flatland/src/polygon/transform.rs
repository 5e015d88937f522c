use super::*;

/// Functionality that transforms Polygons, such as translating and scaling.
impl Polygon {
	/// Move the polygon so its centroid lands on `position`.
	pub fn move_to(&mut self, position: DVec2) {
		self.translate(position - self.center);
	}

	/// Shift every vertex, and the cached centroid with them, by `delta`.
	pub fn translate(&mut self, delta: DVec2) {
		for vertex in &mut self.vertices {
			*vertex += delta;
		}
		self.center += delta;
	}

	/// Scale the polygon uniformly about its centroid. The centroid is the fixed point of the
	/// operation, so the cached value stays valid without an update.
	pub fn scale(&mut self, factor: f64) {
		let center = self.center;
		for vertex in &mut self.vertices {
			*vertex = center + (*vertex - center) * factor;
		}
	}
}
