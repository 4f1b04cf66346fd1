use crate::traverse::Value;

/// Enumerate the legal next selectors for `value`.
///
/// Mapping keys follow map iteration order, sequence indices are ascending
/// decimal strings, record fields keep declaration order. Scalars yield an
/// empty set; absence of structure is not an error.
pub fn possible_selectors(value: &Value) -> Vec<String> {
	match value {
		Value::Mapping(entries) => entries.keys().cloned().collect(),
		Value::Sequence(items) => (0..items.len()).map(|idx| idx.to_string()).collect(),
		Value::Record(record) => record.fields.iter().map(|field| field.name.to_string()).collect(),
		_ => Vec::new(),
	}
}
