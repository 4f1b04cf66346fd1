use crate::traverse::{GlomError, Result, Value, possible_selectors};

/// Render a scalar leaf as its default textual form.
///
/// Fails with `NotScalar` while the value still offers child selectors;
/// once the value is a leaf this always succeeds.
pub fn as_string(value: &Value) -> Result<String> {
	require_leaf(value, "string")?;
	Ok(value.to_string())
}

/// Narrow a scalar leaf to `i64` without coercion.
///
/// A string-typed numeral is not parsed and a float is not truncated; the
/// underlying variant must already be an integer.
pub fn as_integer(value: &Value) -> Result<i64> {
	require_leaf(value, "integer")?;
	match value {
		Value::I64(v) => Ok(*v),
		other => Err(GlomError::TypeMismatch {
			expected: "integer",
			got: other.kind_name(),
		}),
	}
}

/// Narrow a scalar leaf to `f64` without coercion.
pub fn as_float(value: &Value) -> Result<f64> {
	require_leaf(value, "float")?;
	match value {
		Value::F64(v) => Ok(*v),
		other => Err(GlomError::TypeMismatch {
			expected: "float",
			got: other.kind_name(),
		}),
	}
}

fn require_leaf(value: &Value, target: &'static str) -> Result<()> {
	let option_count = possible_selectors(value).len();
	if option_count != 0 {
		return Err(GlomError::NotScalar { target, option_count });
	}
	Ok(())
}
