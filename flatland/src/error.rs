use thiserror::Error;

/// The error type used for every invalid-argument condition in the crate.
///
/// Each rejected input has its own variant so callers can tell the causes apart
/// without inspecting message strings.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ShapeError {
	#[error("Rectangle sides must be positive, but got {width} by {height}")]
	NonPositiveSides { width: f64, height: f64 },

	#[error("A polygon requires at least three vertices, but got {0}")]
	NotEnoughVertices(usize),

	#[error("The polygon vertices enclose no area")]
	DegeneratePolygon,

	#[error("The anchor must lie inside the circle")]
	AnchorOutsideCircle,

	#[error("The anchor must not coincide with the center")]
	AnchorAtCenter,

	#[error("The radius must be positive, but got {0}")]
	NonPositiveRadius(f64),

	#[error("The scale factor must be positive, but got {0}")]
	NonPositiveScaleFactor(f64),

	#[error("An empty collection has no total frame rectangle")]
	EmptyCollection,
}
