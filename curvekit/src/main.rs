mod config;
mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use config::Config;
use std::path::PathBuf;

/// Inspect, normalize and validate curve geometries written as WKT.
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// YAML file with reader and writer settings
	#[arg(long, short, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Show the structure of a geometry
	Inspect(tools::inspect::Subcommand),

	#[clap(alias = "normalise")]
	/// Print a geometry as canonical WKT
	Normalize(tools::normalize::Subcommand),

	/// Check that a geometry can be read and written
	Validate(tools::validate::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	let config = match &cli.config {
		Some(path) => Config::from_path(path)?,
		None => Config::default(),
	};
	log::debug!("using {config:?}");

	match &cli.command {
		Commands::Inspect(arguments) => tools::inspect::run(arguments, &config),
		Commands::Normalize(arguments) => tools::normalize::run(arguments, &config),
		Commands::Validate(arguments) => tools::validate::run(arguments, &config),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["curvekit"]).unwrap_err().to_string();
		assert!(err.starts_with("Inspect, normalize and validate curve geometries written as WKT"));
		assert!(err.contains("\nUsage: curvekit [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["curvekit", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("curvekit "));
	}

	#[test]
	fn missing_config_file() {
		let err = run_command(vec!["curvekit", "--config", "does/not/exist.yml", "validate", "POINT (1 2)"])
			.unwrap_err();
		assert!(err.to_string().contains("does/not/exist.yml"), "{err:#}");
	}

	#[test]
	fn validate_argument() {
		run_command(vec!["curvekit", "-q", "validate", "MULTICURVE ((0 0,1 1))"]).unwrap();
	}

	#[test]
	fn invalid_argument() {
		let err = run_command(vec!["curvekit", "validate", "MULTICURVE ((0 0,1 1)"]).unwrap_err();
		assert!(format!("{err:#}").contains("expected ',' or ')' but found end of input"), "{err:#}");
	}
}
