use glam::DVec2;
use thiserror::Error;

use std::collections::VecDeque;
use std::io::BufRead;

/// One scale request read from the input stream: a pivot point and a scale factor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleRequest {
	pub pivot: DVec2,
	pub factor: f64,
}

/// The ways reading a scale request can fail.
#[derive(Debug, Error)]
pub enum InputError {
	#[error("bad input")]
	Malformed,

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Reads whitespace-separated numeric tokens from a stream and groups them into `(x, y, k)` triples.
/// Tokens may be spread across lines however the user likes.
pub struct RequestReader<R> {
	source: R,
	pending: VecDeque<String>,
}

impl<R: BufRead> RequestReader<R> {
	pub fn new(source: R) -> Self {
		RequestReader { source, pending: VecDeque::new() }
	}

	/// The next `(x, y, k)` triple, or `None` on a clean end of input.
	///
	/// The end of input only counts as clean between triples. A token that fails to parse as a
	/// finite number, or a stream that runs dry partway through a triple, is [`InputError::Malformed`].
	pub fn next_request(&mut self) -> Result<Option<ScaleRequest>, InputError> {
		let Some(x) = self.next_number()? else { return Ok(None) };
		let y = self.next_number()?.ok_or(InputError::Malformed)?;
		let k = self.next_number()?.ok_or(InputError::Malformed)?;
		Ok(Some(ScaleRequest {
			pivot: DVec2::new(x, y),
			factor: k,
		}))
	}

	fn next_number(&mut self) -> Result<Option<f64>, InputError> {
		match self.next_token()? {
			// The standard float parser accepts tokens like "nan" and "1e999", which no well-formed request contains.
			Some(token) => token.parse::<f64>().ok().filter(|number| number.is_finite()).map(Some).ok_or(InputError::Malformed),
			None => Ok(None),
		}
	}

	fn next_token(&mut self) -> Result<Option<String>, InputError> {
		while self.pending.is_empty() {
			let mut line = String::new();
			if self.source.read_line(&mut line)? == 0 {
				return Ok(None);
			}
			self.pending.extend(line.split_whitespace().map(str::to_owned));
		}
		Ok(self.pending.pop_front())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	fn set_up_reader(input: &str) -> RequestReader<Cursor<&str>> {
		RequestReader::new(Cursor::new(input))
	}

	#[test]
	fn a_triple_on_one_line_is_one_request() {
		let mut reader = set_up_reader("1 2 3\n");
		let request = reader.next_request().unwrap().unwrap();
		assert_eq!(request, ScaleRequest { pivot: DVec2::new(1., 2.), factor: 3. });
		assert!(reader.next_request().unwrap().is_none());
	}

	#[test]
	fn triples_may_span_lines() {
		let mut reader = set_up_reader("0.5\n-2\n\n  4\n1 1 1");
		assert_eq!(reader.next_request().unwrap(), Some(ScaleRequest { pivot: DVec2::new(0.5, -2.), factor: 4. }));
		assert_eq!(reader.next_request().unwrap(), Some(ScaleRequest { pivot: DVec2::new(1., 1.), factor: 1. }));
		assert!(reader.next_request().unwrap().is_none());
	}

	#[test]
	fn empty_input_is_a_clean_end() {
		let mut reader = set_up_reader("");
		assert!(reader.next_request().unwrap().is_none());

		let mut blank_lines = set_up_reader("\n   \n\t\n");
		assert!(blank_lines.next_request().unwrap().is_none());
	}

	#[test]
	fn a_non_numeric_token_is_malformed() {
		let mut reader = set_up_reader("1 2 three\n");
		assert!(matches!(reader.next_request(), Err(InputError::Malformed)));
	}

	#[test]
	fn a_non_finite_token_is_malformed() {
		let mut reader = set_up_reader("0 0 nan\n");
		assert!(matches!(reader.next_request(), Err(InputError::Malformed)));

		let mut infinite = set_up_reader("inf 0 2\n");
		assert!(matches!(infinite.next_request(), Err(InputError::Malformed)));

		let mut overflowing = set_up_reader("1 1 1e999\n");
		assert!(matches!(overflowing.next_request(), Err(InputError::Malformed)));
	}

	#[test]
	fn input_ending_inside_a_triple_is_malformed() {
		let mut reader = set_up_reader("1 2\n");
		assert!(matches!(reader.next_request(), Err(InputError::Malformed)));

		let mut trailing = set_up_reader("1 2 3 4\n");
		assert!(trailing.next_request().unwrap().is_some());
		assert!(matches!(trailing.next_request(), Err(InputError::Malformed)));
	}
}
