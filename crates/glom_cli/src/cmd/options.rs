use std::path::PathBuf;

use glom::traverse::{possible_selectors, walk};

use crate::cmd::util::load_document;

/// List the legal next selectors at `expr` (document root when omitted).
pub fn run(path: PathBuf, expr: Option<String>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
	let root = load_document(&path)?;
	let expr = expr.unwrap_or_default();
	let target = walk(&root, &expr)?;
	let options = possible_selectors(target);

	if json {
		let payload = OptionsJson { path: expr, options };
		println!("{}", serde_json::to_string_pretty(&payload)?);
	} else {
		for option in &options {
			println!("{option}");
		}
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct OptionsJson {
	path: String,
	options: Vec<String>,
}
