use super::input::Input;
use crate::config::Config;
use anyhow::{Context, Result};
use curvekit_geometry::{Geometry, GeometryTrait};

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	#[command(flatten)]
	input: Input,

	/// round ordinates to this many decimals
	#[arg(long, short)]
	precision: Option<u8>,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	println!("{}", normalize(arguments, config)?);
	Ok(())
}

fn normalize(arguments: &Subcommand, config: &Config) -> Result<String> {
	let text = arguments.input.read()?;
	let geometry = Geometry::from_wkt_with(text.trim(), &config.read_options()).context("reading WKT")?;
	geometry
		.to_wkt_with(&config.write_options(arguments.precision))
		.context("writing WKT")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tools::input::Input;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn subcommand(wkt: &str, precision: Option<u8>) -> Subcommand {
		Subcommand {
			input: Input {
				wkt: Some(wkt.to_string()),
				file: None,
			},
			precision,
		}
	}

	#[rstest]
	#[case("multicurve((0 0, 1 1))", None, "MULTICURVE ((0 0,1 1))")]
	#[case("LINESTRING (0.123456 1.5, 2 2)", Some(2), "LINESTRING (0.12 1.5,2 2)")]
	#[case("POINT Z (1 2 3.0)", None, "POINT Z (1 2 3)")]
	fn normalized(#[case] wkt: &str, #[case] precision: Option<u8>, #[case] expected: &str) {
		let result = normalize(&subcommand(wkt, precision), &Config::default()).unwrap();
		assert_eq!(result, expected);
	}

	#[test]
	fn config_precision() {
		let config = Config::from_string("writer:\n  precision: 1\n").unwrap();
		let result = normalize(&subcommand("POINT (1.26 2.04)", None), &config).unwrap();
		assert_eq!(result, "POINT (1.3 2)");
		let result = normalize(&subcommand("POINT (1.26 2.04)", Some(0)), &config).unwrap();
		assert_eq!(result, "POINT (1 2)");
	}
}
