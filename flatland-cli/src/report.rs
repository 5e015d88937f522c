use flatland::{Shape, ShapeError, total_frame_rect};

use std::fmt::Write;

/// Render the collection report: one block per named shape, a blank line after each, then the
/// total area and the total frame rectangle across the whole collection.
///
/// `names` and `shapes` are parallel slices carrying one name per shape.
pub fn render_report(names: &[&str], shapes: &[Shape]) -> Result<String, ShapeError> {
	debug_assert_eq!(names.len(), shapes.len());
	let total = total_frame_rect(shapes)?;
	let total_area: f64 = shapes.iter().map(Shape::area).sum();
	let mut out = String::new();
	for (name, shape) in names.iter().zip(shapes) {
		write_shape_entry(&mut out, name, shape);
		let _ = writeln!(out);
	}
	let _ = writeln!(out, "Total area: {total_area}");
	let _ = writeln!(out, "Total frame rectangle:");
	let _ = writeln!(out, "  width: {}", total.width);
	let _ = writeln!(out, "  height: {}", total.height);
	let _ = writeln!(out, "  position: ({}; {})", total.center.x, total.center.y);
	Ok(out)
}

fn write_shape_entry(out: &mut String, name: &str, shape: &Shape) {
	let frame = shape.frame_rect();
	let _ = writeln!(out, "{name}:");
	let _ = writeln!(out, "  area: {}", shape.area());
	let _ = writeln!(out, "  frame rectangle:");
	let _ = writeln!(out, "    width: {}", frame.width);
	let _ = writeln!(out, "    height: {}", frame.height);
	let _ = writeln!(out, "    position: ({}; {})", frame.center.x, frame.center.y);
}
