use glam::DVec2;

/// An axis-aligned bounding rectangle, described by its size and the position of its center.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameRect {
	pub width: f64,
	pub height: f64,
	pub center: DVec2,
}

impl FrameRect {
	/// Construct a frame from its width, height, and center position.
	pub fn new(width: f64, height: f64, center: DVec2) -> Self {
		FrameRect { width, height, center }
	}

	/// Convert a box defined by two corner points to a frame.
	pub fn from_box(bbox: [DVec2; 2]) -> Self {
		let size = bbox[1] - bbox[0];
		FrameRect {
			width: size.x,
			height: size.y,
			center: (bbox[0] + bbox[1]) / 2.,
		}
	}

	/// The corner of the frame with the smallest coordinates.
	pub fn min(&self) -> DVec2 {
		self.center - DVec2::new(self.width, self.height) / 2.
	}

	/// The corner of the frame with the largest coordinates.
	pub fn max(&self) -> DVec2 {
		self.center + DVec2::new(self.width, self.height) / 2.
	}

	/// The smallest frame covering both `self` and `other`.
	#[must_use]
	pub fn union(self, other: Self) -> Self {
		FrameRect::from_box([self.min().min(other.min()), self.max().max(other.max())])
	}
}
