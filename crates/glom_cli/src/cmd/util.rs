use std::path::Path;

use glom::traverse::Value;

/// Load and adapt a JSON document into the traversal value model.
pub(crate) fn load_document(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
	let text = std::fs::read_to_string(path)?;
	let doc: serde_json::Value = serde_json::from_str(&text)?;
	Ok(Value::from(doc))
}

/// Render a traversal value back to JSON for machine-readable output.
pub(crate) fn value_to_json(value: &Value) -> serde_json::Value {
	use serde_json::{Map, Value as JsonValue};

	match value {
		Value::Null => JsonValue::Null,
		Value::Bool(v) => serde_json::json!(v),
		Value::I64(v) => serde_json::json!(v),
		Value::F64(v) => serde_json::json!(v),
		Value::String(v) => serde_json::json!(v),
		Value::Sequence(items) => {
			let values: Vec<JsonValue> = items.iter().map(value_to_json).collect();
			JsonValue::Array(values)
		}
		Value::Mapping(entries) => {
			let fields: Map<String, JsonValue> = entries.iter().map(|(key, item)| (key.clone(), value_to_json(item))).collect();
			JsonValue::Object(fields)
		}
		Value::Record(record) => {
			let fields: Map<String, JsonValue> = record
				.fields
				.iter()
				.map(|field| (field.name.to_string(), value_to_json(&field.value)))
				.collect();

			let mut out = Map::new();
			out.insert("type".to_owned(), serde_json::json!(record.type_name.as_ref()));
			out.insert("fields".to_owned(), JsonValue::Object(fields));
			JsonValue::Object(out)
		}
	}
}
