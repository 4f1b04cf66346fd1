use crate::traverse::{GlomError, Result, Value, possible_selectors};

/// Resolve one selector against `value`, yielding a borrow of the child.
///
/// The walker validates `selector` against [`possible_selectors`] before
/// calling this; the per-shape error paths below only fire when that
/// precondition was skipped by a direct caller. Purely functional, no
/// mutation of the traversed graph.
pub fn descend<'a>(value: &'a Value, selector: &str) -> Result<&'a Value> {
	match value {
		Value::Mapping(entries) => entries.get(selector).ok_or_else(|| GlomError::SelectorNotFound {
			segment: selector.to_owned(),
			path_taken: String::new(),
			options: possible_selectors(value),
		}),
		Value::Sequence(items) => {
			let index = selector.parse::<usize>().map_err(|_| GlomError::InvalidIndex {
				segment: selector.to_owned(),
			})?;
			items.get(index).ok_or_else(|| GlomError::SelectorNotFound {
				segment: selector.to_owned(),
				path_taken: String::new(),
				options: possible_selectors(value),
			})
		}
		Value::Record(record) => record.field(selector).ok_or_else(|| GlomError::NoSuchField {
			field: selector.to_owned(),
			type_name: record.type_name.to_string(),
		}),
		other => Err(GlomError::Unsupported { kind: other.kind_name() }),
	}
}
