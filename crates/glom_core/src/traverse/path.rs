/// Reserved segment that stops the walk and returns the current value.
pub const WILDCARD_STOP: &str = "*";

/// One parsed segment of a dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
	/// Select a named child: mapping key, decimal sequence index, or record field.
	Select(String),
	/// Stop descending and return the current value.
	Stop,
}

/// Parsed dotted path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DottedPath {
	/// Ordered segments, walked left to right.
	pub segments: Vec<PathSegment>,
}

impl DottedPath {
	/// Split `input` on literal `.`.
	///
	/// The empty string parses to zero segments, so walking it returns the
	/// root unchanged. Selectors containing a literal `.` cannot be
	/// expressed; there is no escaping mechanism.
	pub fn parse(input: &str) -> Self {
		if input.is_empty() {
			return Self { segments: Vec::new() };
		}

		let segments = input
			.split('.')
			.map(|segment| {
				if segment == WILDCARD_STOP {
					PathSegment::Stop
				} else {
					PathSegment::Select(segment.to_owned())
				}
			})
			.collect();

		Self { segments }
	}
}
