use crate::{FrameRect, Shape, ShapeError};

use glam::DVec2;

/// The smallest frame covering every shape in `shapes`.
///
/// Fails on an empty collection, since no frame covers nothing at all.
pub fn total_frame_rect(shapes: &[Shape]) -> Result<FrameRect, ShapeError> {
	shapes.iter().map(Shape::frame_rect).reduce(FrameRect::union).ok_or(ShapeError::EmptyCollection)
}

/// Scale every shape in `shapes` by `factor` as if `pivot` were the common center of scaling.
///
/// Each shape is moved so its own reference point lands on the pivot, the displacement of its
/// frame center is measured, and the shape is pushed back by `factor` times that displacement
/// before scaling in place. The net effect maps every point of every shape from `x` to
/// `pivot + factor * (x - pivot)`, whichever reference point convention the shape follows.
///
/// A factor of zero or below is rejected before any shape is touched, as is `NaN`, so a failed
/// call leaves the collection exactly as it was.
pub fn scale_about_point(shapes: &mut [Shape], factor: f64, pivot: DVec2) -> Result<(), ShapeError> {
	if factor.is_nan() || factor <= 0. {
		return Err(ShapeError::NonPositiveScaleFactor(factor));
	}
	for shape in shapes.iter_mut() {
		let position = shape.frame_rect().center;
		shape.move_to(pivot);
		let moved_position = shape.frame_rect().center;
		shape.translate((position - moved_position) * factor);
		shape.scale(factor);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::{compare_f64s, compare_points};
	use crate::{Bubble, Polygon, Rectangle};

	fn set_up_shapes() -> Vec<Shape> {
		vec![
			Rectangle::new(5., 6., DVec2::new(1., 2.)).unwrap().into(),
			Rectangle::new(10., 2., DVec2::new(-10., 3.)).unwrap().into(),
			Polygon::new(vec![DVec2::new(0., 0.), DVec2::new(1., 0.), DVec2::new(1., 1.), DVec2::new(0., 1.)]).unwrap().into(),
			Bubble::new(10., DVec2::new(0., 0.), DVec2::new(2., 2.)).unwrap().into(),
		]
	}

	#[test]
	fn total_frame_covers_two_rectangles_exactly() {
		let shapes: Vec<Shape> = vec![
			Rectangle::new(5., 6., DVec2::new(1., 2.)).unwrap().into(),
			Rectangle::new(10., 2., DVec2::new(-10., 3.)).unwrap().into(),
		];
		let total = total_frame_rect(&shapes).unwrap();
		assert!(compare_f64s(total.width, 18.5));
		assert!(compare_f64s(total.height, 6.));
		assert!(compare_points(total.center, DVec2::new(-5.75, 2.)));
	}

	#[test]
	fn total_frame_of_a_single_shape_is_its_own_frame() {
		let shapes: Vec<Shape> = vec![Bubble::new(10., DVec2::new(0., 0.), DVec2::new(2., 2.)).unwrap().into()];
		assert_eq!(total_frame_rect(&shapes).unwrap(), shapes[0].frame_rect());
	}

	#[test]
	fn total_frame_of_an_empty_collection_is_an_error() {
		assert_eq!(total_frame_rect(&[]), Err(ShapeError::EmptyCollection));
	}

	#[test]
	fn total_frame_covers_a_mixed_collection() {
		let total = total_frame_rect(&set_up_shapes()).unwrap();
		assert!(compare_points(total.min(), DVec2::new(-15., -10.)));
		assert!(compare_points(total.max(), DVec2::new(10., 10.)));
	}

	#[test]
	fn scaling_about_a_point_maps_every_frame_center_through_the_pivot() {
		let mut shapes = set_up_shapes();
		let centers: Vec<DVec2> = shapes.iter().map(|shape| shape.frame_rect().center).collect();
		let areas: Vec<f64> = shapes.iter().map(Shape::area).collect();
		let pivot = DVec2::new(2., 1.);
		let factor = 3.;

		scale_about_point(&mut shapes, factor, pivot).unwrap();

		for ((shape, center), area) in shapes.iter().zip(centers).zip(areas) {
			assert!(compare_points(shape.frame_rect().center, pivot + (center - pivot) * factor));
			assert!(compare_f64s(shape.area(), area * factor * factor));
		}
	}

	#[test]
	fn scaling_by_one_is_the_identity() {
		let mut shapes = set_up_shapes();
		let before = shapes.clone();
		scale_about_point(&mut shapes, 1., DVec2::new(-4., 9.)).unwrap();
		for (shape, original) in shapes.iter().zip(&before) {
			assert!(compare_points(shape.frame_rect().center, original.frame_rect().center));
			assert!(compare_f64s(shape.area(), original.area()));
		}
	}

	#[test]
	fn a_rejected_factor_leaves_the_collection_untouched() {
		let mut shapes = set_up_shapes();
		let before = shapes.clone();
		assert_eq!(scale_about_point(&mut shapes, 0., DVec2::ZERO), Err(ShapeError::NonPositiveScaleFactor(0.)));
		assert_eq!(scale_about_point(&mut shapes, -2., DVec2::ZERO), Err(ShapeError::NonPositiveScaleFactor(-2.)));
		assert_eq!(shapes, before);
	}

	#[test]
	fn a_nan_factor_is_rejected() {
		let mut shapes = set_up_shapes();
		let before = shapes.clone();
		let result = scale_about_point(&mut shapes, f64::NAN, DVec2::ZERO);
		assert!(matches!(result, Err(ShapeError::NonPositiveScaleFactor(factor)) if factor.is_nan()));
		assert_eq!(shapes, before);
	}
}
