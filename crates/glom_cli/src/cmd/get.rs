use std::path::PathBuf;

use glom::traverse::walk;

use crate::cmd::util::{load_document, value_to_json};

/// Walk `expr` in the JSON document at `path` and print the result.
pub fn run(path: PathBuf, expr: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
	let root = load_document(&path)?;
	let found = walk(&root, &expr)?;

	if json {
		let payload = GetJson {
			path: expr,
			value: value_to_json(found),
		};
		println!("{}", serde_json::to_string_pretty(&payload)?);
	} else {
		println!("{found}");
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct GetJson {
	path: String,
	value: serde_json::Value,
}
