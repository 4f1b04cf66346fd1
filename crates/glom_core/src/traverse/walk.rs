use crate::traverse::{DottedPath, GlomError, PathSegment, Result, Value, descend, possible_selectors};

/// Walk `path` from `root`, one segment per hop, and borrow the final value.
///
/// Each segment is validated against the current value's legal selectors
/// before descending; the first failing segment ends the walk with a
/// diagnostic naming the segment, the path consumed so far, and the full
/// option set at the failure point. The reserved `*` segment returns the
/// current value immediately without inspecting the rest of the path. An
/// empty `path` is the identity walk and returns `root`.
pub fn walk<'a>(root: &'a Value, path: &str) -> Result<&'a Value> {
	walk_path(root, &DottedPath::parse(path))
}

/// Walk a pre-parsed path from `root`.
pub fn walk_path<'a>(root: &'a Value, path: &DottedPath) -> Result<&'a Value> {
	let mut current = root;
	let mut path_taken: Vec<&str> = Vec::new();

	for segment in &path.segments {
		let selector = match segment {
			PathSegment::Stop => return Ok(current),
			PathSegment::Select(selector) => selector,
		};

		let possible = possible_selectors(current);
		if !possible.iter().any(|option| option == selector) {
			return Err(GlomError::SelectorNotFound {
				segment: selector.clone(),
				path_taken: path_taken.join("."),
				options: possible,
			});
		}

		current = descend(current, selector)?;
		path_taken.push(selector);
	}

	Ok(current)
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use crate::traverse::{GlomError, Value, walk};

	fn menagerie() -> Value {
		let cat = BTreeMap::from([("name".to_owned(), Value::from("Cat")), ("sounds".to_owned(), Value::from("Meow"))]);
		let animals = BTreeMap::from([("Cat".to_owned(), Value::from(cat))]);
		Value::from(BTreeMap::from([("Animals".to_owned(), Value::from(animals))]))
	}

	#[test]
	fn descends_nested_mappings() {
		let root = menagerie();
		assert_eq!(walk(&root, "Animals.Cat.sounds").expect("path resolves"), &Value::from("Meow"));
	}

	#[test]
	fn first_failing_segment_carries_path_taken_and_options() {
		let root = menagerie();
		let err = walk(&root, "Animals.Dog.hates").expect_err("Dog is absent");

		let GlomError::SelectorNotFound { segment, path_taken, options } = err else {
			panic!("expected SelectorNotFound");
		};
		assert_eq!(segment, "Dog");
		assert_eq!(path_taken, "Animals");
		assert_eq!(options, vec!["Cat"]);
	}

	#[test]
	fn empty_path_returns_root_unchanged() {
		let root = menagerie();
		assert_eq!(walk(&root, "").expect("identity walk"), &root);
	}

	#[test]
	fn scalar_reached_mid_path_reports_no_options() {
		let root = menagerie();
		let err = walk(&root, "Animals.Cat.sounds.loud").expect_err("sounds is a scalar");

		let GlomError::SelectorNotFound { segment, path_taken, options } = err else {
			panic!("expected SelectorNotFound");
		};
		assert_eq!(segment, "loud");
		assert_eq!(path_taken, "Animals.Cat.sounds");
		assert!(options.is_empty());
	}
}
