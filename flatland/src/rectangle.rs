use crate::{FrameRect, ShapeError};

use glam::DVec2;

/// An axis-aligned rectangle positioned by its center, with strictly positive side lengths.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
	size: DVec2,
	center: DVec2,
}

impl Rectangle {
	/// Create a rectangle from its two side lengths and its center position.
	/// Fails if either side length is zero or below.
	pub fn new(width: f64, height: f64, center: DVec2) -> Result<Rectangle, ShapeError> {
		if width <= 0. || height <= 0. {
			return Err(ShapeError::NonPositiveSides { width, height });
		}
		Ok(Rectangle {
			size: DVec2::new(width, height),
			center,
		})
	}

	/// The horizontal side length.
	pub fn width(&self) -> f64 {
		self.size.x
	}

	/// The vertical side length.
	pub fn height(&self) -> f64 {
		self.size.y
	}

	/// The position of the rectangle's center.
	pub fn center(&self) -> DVec2 {
		self.center
	}

	/// The surface area covered by the rectangle.
	pub fn area(&self) -> f64 {
		self.size.x * self.size.y
	}

	/// The minimal axis-aligned frame around the rectangle, which coincides with the rectangle itself.
	pub fn frame_rect(&self) -> FrameRect {
		FrameRect::new(self.size.x, self.size.y, self.center)
	}

	/// Move the rectangle so its center lands on `position`.
	pub fn move_to(&mut self, position: DVec2) {
		self.center = position;
	}

	/// Shift the rectangle by `delta` without changing its size.
	pub fn translate(&mut self, delta: DVec2) {
		self.center += delta;
	}

	/// Multiply both side lengths by `factor`, keeping the center in place.
	pub fn scale(&mut self, factor: f64) {
		self.size *= factor;
	}
}
