#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "glom", about = "Dotted-path lookups over JSON documents")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Walk a dotted path and print the value found at the end.
	Get {
		path: PathBuf,
		expr: String,
		#[arg(long)]
		json: bool,
	},
	/// List the legal next selectors at a path.
	Options {
		path: PathBuf,
		expr: Option<String>,
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Get { path, expr, json } => cmd::get::run(path, expr, json),
		Commands::Options { path, expr, json } => cmd::options::run(path, expr, json),
	}
}
