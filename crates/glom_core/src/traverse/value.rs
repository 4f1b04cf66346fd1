use std::collections::BTreeMap;
use std::fmt;

/// Dynamically shaped datum the engine traverses.
///
/// Callers adapt their native structures into this closed set of variants
/// once, at the boundary, via the `From` impls below. Everything that is not
/// a mapping, sequence, or record is a scalar traversal terminus.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Null,
	Bool(bool),
	I64(i64),
	F64(f64),
	String(Box<str>),
	Sequence(Vec<Value>),
	Mapping(BTreeMap<String, Value>),
	Record(RecordValue),
}

/// Named-field composite with a fixed field set in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
	pub type_name: Box<str>,
	pub fields: Vec<FieldValue>,
}

/// One named field inside a [`RecordValue`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	pub name: Box<str>,
	pub value: Value,
}

/// Structural classification of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
	Mapping,
	Sequence,
	Record,
	Scalar,
}

impl Value {
	/// Structural kind used to pick traversal behavior.
	pub fn kind(&self) -> ValueKind {
		match self {
			Value::Mapping(_) => ValueKind::Mapping,
			Value::Sequence(_) => ValueKind::Sequence,
			Value::Record(_) => ValueKind::Record,
			_ => ValueKind::Scalar,
		}
	}

	/// Concrete display label used in diagnostics.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::I64(_) => "integer",
			Value::F64(_) => "float",
			Value::String(_) => "string",
			Value::Sequence(_) => "sequence",
			Value::Mapping(_) => "mapping",
			Value::Record(_) => "record",
		}
	}
}

impl RecordValue {
	/// Start an empty record with the given type name.
	pub fn new(type_name: impl Into<Box<str>>) -> Self {
		Self {
			type_name: type_name.into(),
			fields: Vec::new(),
		}
	}

	/// Append one field, preserving declaration order.
	pub fn with_field(mut self, name: impl Into<Box<str>>, value: impl Into<Value>) -> Self {
		self.fields.push(FieldValue {
			name: name.into(),
			value: value.into(),
		});
		self
	}

	/// Exact, case-sensitive field lookup.
	pub fn field(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => write!(f, "null"),
			Value::Bool(v) => write!(f, "{v}"),
			Value::I64(v) => write!(f, "{v}"),
			Value::F64(v) => write!(f, "{v}"),
			Value::String(v) => write!(f, "{v}"),
			Value::Sequence(items) => {
				write!(f, "[")?;
				for (idx, item) in items.iter().enumerate() {
					if idx > 0 {
						write!(f, ", ")?;
					}
					write!(f, "{item}")?;
				}
				write!(f, "]")
			}
			Value::Mapping(entries) => {
				write!(f, "{{")?;
				for (idx, (key, item)) in entries.iter().enumerate() {
					if idx > 0 {
						write!(f, ", ")?;
					}
					write!(f, "{key}: {item}")?;
				}
				write!(f, "}}")
			}
			Value::Record(record) => {
				write!(f, "{} {{", record.type_name)?;
				for (idx, field) in record.fields.iter().enumerate() {
					if idx > 0 {
						write!(f, ", ")?;
					}
					write!(f, "{}: {}", field.name, field.value)?;
				}
				write!(f, "}}")
			}
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::I64(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::I64(i64::from(value))
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Value::I64(i64::from(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::F64(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value.into())
	}
}

impl From<RecordValue> for Value {
	fn from(value: RecordValue) -> Self {
		Value::Record(value)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(items: Vec<T>) -> Self {
		Value::Sequence(items.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
	fn from(entries: BTreeMap<String, T>) -> Self {
		Value::Mapping(entries.into_iter().map(|(key, item)| (key, item.into())).collect())
	}
}

impl FromIterator<Value> for Value {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		Value::Sequence(iter.into_iter().collect())
	}
}

impl FromIterator<(String, Value)> for Value {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Value::Mapping(iter.into_iter().collect())
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(v) => Value::Bool(v),
			serde_json::Value::Number(v) => {
				if let Some(n) = v.as_i64() {
					Value::I64(n)
				} else {
					// u64 beyond i64::MAX degrades to its float form.
					Value::F64(v.as_f64().unwrap_or(f64::NAN))
				}
			}
			serde_json::Value::String(v) => Value::String(v.into()),
			serde_json::Value::Array(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
			serde_json::Value::Object(entries) => Value::Mapping(entries.into_iter().map(|(key, item)| (key, Value::from(item))).collect()),
		}
	}
}
