#![allow(missing_docs)]

use std::collections::BTreeMap;

use glom::traverse::{GlomError, Value, as_float, as_integer, as_string, walk};

fn farm() -> Value {
	let part1 = BTreeMap::from([
		("Duck".to_owned(), Value::from("Quack")),
		("Cheese".to_owned(), Value::I64(6)),
		("Mouse".to_owned(), Value::Bool(true)),
		("Gravity".to_owned(), Value::F64(9.81)),
	]);
	let part2 = Value::from(vec![
		Value::from("Pig"),
		Value::from("Chicken"),
		Value::from("Cow"),
		Value::Bool(true),
		Value::I64(42),
	]);

	Value::from(BTreeMap::from([("part1".to_owned(), Value::from(part1)), ("part2".to_owned(), part2)]))
}

#[test]
fn sequence_result_refuses_string_narrowing() {
	let root = farm();
	let found = walk(&root, "part2").expect("part2 resolves");

	let err = as_string(found).expect_err("sequence is not a scalar leaf");
	assert_eq!(err.to_string(), "can't convert multiple values to string");
}

#[test]
fn string_leaf_narrows_to_string() {
	let root = farm();
	let found = walk(&root, "part2.1").expect("part2.1 resolves");
	assert_eq!(as_string(found).expect("string leaf"), "Chicken");
}

#[test]
fn mapping_result_refuses_integer_narrowing() {
	let root = farm();
	let found = walk(&root, "part1").expect("part1 resolves");
	assert!(matches!(as_integer(found), Err(GlomError::NotScalar { target: "integer", option_count: 4 })));
}

#[test]
fn integer_leaf_narrows_to_i64() {
	let root = farm();
	let found = walk(&root, "part1.Cheese").expect("part1.Cheese resolves");
	assert_eq!(as_integer(found).expect("integer leaf"), 6);
}

#[test]
fn sequence_result_refuses_float_narrowing() {
	let root = farm();
	let found = walk(&root, "part2").expect("part2 resolves");
	assert!(matches!(as_float(found), Err(GlomError::NotScalar { target: "float", .. })));
}

#[test]
fn float_leaf_narrows_to_f64() {
	let root = farm();
	let found = walk(&root, "part1.Gravity").expect("part1.Gravity resolves");
	assert_eq!(as_float(found).expect("float leaf"), 9.81);
}

#[test]
fn narrowing_never_coerces_between_scalar_types() {
	let root = farm();

	let duck = walk(&root, "part1.Duck").expect("part1.Duck resolves");
	assert!(matches!(as_integer(duck), Err(GlomError::TypeMismatch { expected: "integer", got: "string" })));

	let cheese = walk(&root, "part1.Cheese").expect("part1.Cheese resolves");
	assert!(matches!(as_float(cheese), Err(GlomError::TypeMismatch { expected: "float", got: "integer" })));
}
