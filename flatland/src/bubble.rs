use crate::{FrameRect, ShapeError};

use glam::DVec2;
use std::f64::consts::PI;

/// A circle positioned by an interior anchor point that is distinct from its center.
///
/// Translation carries the anchor and the center together. Scaling pivots on the anchor instead,
/// so the center drifts along the anchor-center axis while the radius grows or shrinks.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bubble {
	radius: f64,
	center: DVec2,
	anchor: DVec2,
}

impl Bubble {
	/// Create a new `Bubble` from its radius, center, and anchor point.
	///
	/// The checks run in a fixed order so overlapping violations always report the same cause:
	/// the anchor must lie inside the circle, the anchor must not coincide with the center, and
	/// the radius must be strictly positive.
	pub fn new(radius: f64, center: DVec2, anchor: DVec2) -> Result<Bubble, ShapeError> {
		if center.distance_squared(anchor) > radius * radius {
			return Err(ShapeError::AnchorOutsideCircle);
		}
		if center == anchor {
			return Err(ShapeError::AnchorAtCenter);
		}
		if radius <= 0. {
			return Err(ShapeError::NonPositiveRadius(radius));
		}
		Ok(Bubble { radius, center, anchor })
	}

	/// The circle's radius.
	pub fn radius(&self) -> f64 {
		self.radius
	}

	/// The position of the circle's center.
	pub fn center(&self) -> DVec2 {
		self.center
	}

	/// The anchor point the bubble is moved and scaled by.
	pub fn anchor(&self) -> DVec2 {
		self.anchor
	}

	/// The area of the full disc.
	pub fn area(&self) -> f64 {
		PI * self.radius * self.radius
	}

	/// The square of side `2 * radius` around the circle's center. The anchor plays no part in the frame.
	pub fn frame_rect(&self) -> FrameRect {
		FrameRect::new(2. * self.radius, 2. * self.radius, self.center)
	}

	/// Move the bubble so its anchor lands on `position`, carrying the center along with it.
	pub fn move_to(&mut self, position: DVec2) {
		self.translate(position - self.anchor);
	}

	/// Shift the anchor and the center together by `delta`.
	pub fn translate(&mut self, delta: DVec2) {
		self.center += delta;
		self.anchor += delta;
	}

	/// Scale the bubble uniformly about its anchor: the radius is multiplied by `factor` and the
	/// center moves along the anchor-center axis by the same proportion.
	pub fn scale(&mut self, factor: f64) {
		self.radius *= factor;
		self.center = self.anchor + (self.center - self.anchor) * factor;
	}
}
