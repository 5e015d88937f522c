use crate::{Bubble, FrameRect, Polygon, Rectangle};

use glam::DVec2;

/// The closed set of shapes the crate can measure and transform through one interface.
///
/// Every operation dispatches with an exhaustive match, so teaching the crate a new shape
/// means the compiler points at every place that still needs to handle it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
	Rectangle(Rectangle),
	Polygon(Polygon),
	Bubble(Bubble),
}

impl Shape {
	/// The surface area enclosed by the shape. Never negative.
	pub fn area(&self) -> f64 {
		match self {
			Shape::Rectangle(rectangle) => rectangle.area(),
			Shape::Polygon(polygon) => polygon.area(),
			Shape::Bubble(bubble) => bubble.area(),
		}
	}

	/// The minimal axis-aligned frame enclosing the shape, positioned by the frame's center.
	pub fn frame_rect(&self) -> FrameRect {
		match self {
			Shape::Rectangle(rectangle) => rectangle.frame_rect(),
			Shape::Polygon(polygon) => polygon.frame_rect(),
			Shape::Bubble(bubble) => bubble.frame_rect(),
		}
	}

	/// Move the shape so its reference point lands on `position`. The reference point is the
	/// center for a rectangle, the centroid for a polygon, and the anchor for a bubble.
	pub fn move_to(&mut self, position: DVec2) {
		match self {
			Shape::Rectangle(rectangle) => rectangle.move_to(position),
			Shape::Polygon(polygon) => polygon.move_to(position),
			Shape::Bubble(bubble) => bubble.move_to(position),
		}
	}

	/// Shift the shape by `delta` without changing its size.
	pub fn translate(&mut self, delta: DVec2) {
		match self {
			Shape::Rectangle(rectangle) => rectangle.translate(delta),
			Shape::Polygon(polygon) => polygon.translate(delta),
			Shape::Bubble(bubble) => bubble.translate(delta),
		}
	}

	/// Scale the shape uniformly about its own pivot point, which is the same reference
	/// point [`Self::move_to`] positions by.
	pub fn scale(&mut self, factor: f64) {
		match self {
			Shape::Rectangle(rectangle) => rectangle.scale(factor),
			Shape::Polygon(polygon) => polygon.scale(factor),
			Shape::Bubble(bubble) => bubble.scale(factor),
		}
	}
}

impl From<Rectangle> for Shape {
	fn from(rectangle: Rectangle) -> Self {
		Shape::Rectangle(rectangle)
	}
}

impl From<Polygon> for Shape {
	fn from(polygon: Polygon) -> Self {
		Shape::Polygon(polygon)
	}
}

impl From<Bubble> for Shape {
	fn from(bubble: Bubble) -> Self {
		Shape::Bubble(bubble)
	}
}
