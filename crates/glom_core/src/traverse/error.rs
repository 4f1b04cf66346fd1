use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, GlomError>;

/// Errors produced while walking values and narrowing results.
///
/// Every failure is returned as a value and carries enough structured
/// context to render a diagnostic without re-walking; callers needing the
/// raw pieces read the fields instead of parsing the message.
#[derive(Debug, Error)]
pub enum GlomError {
	/// Requested segment is not among the current value's legal selectors.
	#[error("failed moving to '{segment}' from path of '{path_taken}', options are {} ({})", list_options(.options), .options.len())]
	SelectorNotFound {
		/// Segment that failed to resolve.
		segment: String,
		/// Successfully consumed path prefix, `.`-joined (empty on the first hop).
		path_taken: String,
		/// Full legal-selector set at the failure point.
		options: Vec<String>,
	},
	/// Sequence selector was not a non-negative decimal integer.
	#[error("invalid sequence index '{segment}'")]
	InvalidIndex {
		/// Offending selector text.
		segment: String,
	},
	/// Record selector named a field that is not present.
	#[error("no field '{field}' on record {type_name}")]
	NoSuchField {
		/// Requested field name.
		field: String,
		/// Record type name.
		type_name: String,
	},
	/// Current value's shape supports no traversal at all.
	#[error("cannot descend into {kind} value")]
	Unsupported {
		/// Kind label of the value reached mid-path.
		kind: &'static str,
	},
	/// Typed accessor applied to a value that still has child selectors.
	#[error("can't convert multiple values to {target}")]
	NotScalar {
		/// Requested target type label.
		target: &'static str,
		/// Number of child selectors the value still offers.
		option_count: usize,
	},
	/// Typed accessor found a scalar of the wrong concrete type.
	#[error("type mismatch: expected {expected}, got {got}")]
	TypeMismatch {
		/// Requested target type label.
		expected: &'static str,
		/// Kind label of the actual value.
		got: &'static str,
	},
}

/// Render each option single-quoted, comma-space separated.
fn list_options(options: &[String]) -> String {
	let quoted: Vec<String> = options.iter().map(|option| format!("'{option}'")).collect();
	quoted.join(", ")
}

#[cfg(test)]
mod tests {
	use crate::traverse::GlomError;

	#[test]
	fn selector_not_found_renders_quoted_options_and_count() {
		let err = GlomError::SelectorNotFound {
			segment: "hates".to_owned(),
			path_taken: "Animals.Dog".to_owned(),
			options: vec!["food".to_owned(), "name".to_owned(), "sounds".to_owned()],
		};

		assert_eq!(
			err.to_string(),
			"failed moving to 'hates' from path of 'Animals.Dog', options are 'food', 'name', 'sounds' (3)"
		);
	}

	#[test]
	fn selector_not_found_with_no_options_renders_zero_count() {
		let err = GlomError::SelectorNotFound {
			segment: "x".to_owned(),
			path_taken: String::new(),
			options: Vec::new(),
		};

		assert_eq!(err.to_string(), "failed moving to 'x' from path of '', options are  (0)");
	}
}
