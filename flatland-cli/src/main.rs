//! Interactive console driver around a fixed collection of shapes.
//!
//! The driver prints a report of every shape, then repeatedly reads `(x, y, k)` triples from
//! stdin and scales the whole collection by `k` about the point `(x, y)`, reprinting the report
//! after each request. Reading stops on the first invalid request or at the end of input.

use std::io::{self, Write};
use std::process::exit;

mod input;
use input::RequestReader;

mod report;
use report::render_report;

use flatland::{Bubble, Polygon, Rectangle, Shape, ShapeError, scale_about_point};
use glam::DVec2;

const SHAPE_NAMES: [&str; 5] = ["Rectangle 1", "Rectangle 2", "Polygon 1", "Polygon 2", "Bubble"];

fn main() {
	env_logger::init();

	let mut shapes = match build_shapes() {
		Ok(shapes) => shapes,
		Err(error) => {
			eprintln!("{error}");
			exit(1);
		}
	};
	log::debug!("built {} shapes", shapes.len());

	print_report(&SHAPE_NAMES, &shapes);

	let stdin = io::stdin();
	let mut reader = RequestReader::new(stdin.lock());
	loop {
		prompt();
		let request = match reader.next_request() {
			Ok(Some(request)) => request,
			// Clean end of input between triples.
			Ok(None) => break,
			Err(error) => {
				eprintln!("{error}");
				exit(1);
			}
		};

		match scale_about_point(&mut shapes, request.factor, request.pivot) {
			Ok(()) => log::debug!("scaled by {} about ({}; {})", request.factor, request.pivot.x, request.pivot.y),
			Err(ShapeError::NonPositiveScaleFactor(_)) => {
				eprintln!("k cannot be less than or equal to zero");
				exit(1);
			}
			Err(error) => {
				eprintln!("{error}");
				exit(1);
			}
		}

		print!("\n\n");
		print_report(&SHAPE_NAMES, &shapes);
	}
}

fn build_shapes() -> Result<Vec<Shape>, ShapeError> {
	Ok(vec![
		Rectangle::new(5., 6., DVec2::new(1., 2.))?.into(),
		Rectangle::new(10., 2., DVec2::new(-10., 3.))?.into(),
		Polygon::new(vec![DVec2::new(0., 0.), DVec2::new(1., 0.), DVec2::new(1., 1.), DVec2::new(0., 1.)])?.into(),
		Polygon::new(vec![
			DVec2::new(0., 0.),
			DVec2::new(4., 1.),
			DVec2::new(5., 4.),
			DVec2::new(5., 8.),
			DVec2::new(4., 10.),
			DVec2::new(3., 8.),
			DVec2::new(2., 5.),
			DVec2::new(-1., 1.),
		])?
		.into(),
		Bubble::new(10., DVec2::new(0., 0.), DVec2::new(2., 2.))?.into(),
	])
}

fn print_report(names: &[&str], shapes: &[Shape]) {
	match render_report(names, shapes) {
		Ok(report) => print!("{report}"),
		Err(error) => {
			eprintln!("{error}");
			exit(1);
		}
	}
}

fn prompt() {
	print!("\n\nEnter x, y and k: ");
	let _ = io::stdout().flush();
}
