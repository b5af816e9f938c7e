use super::input::Input;
use crate::config::Config;
use anyhow::{Context, Result};
use curvekit_geometry::{Geometry, GeometryTrait};
use log::info;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	#[command(flatten)]
	input: Input,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let text = arguments.input.read()?;
	let geometry = Geometry::from_wkt_with(text.trim(), &config.read_options()).context("reading WKT")?;
	geometry.verify().context("checking geometry")?;
	info!("{} with {} points", geometry.type_tag(), geometry.point_count());
	println!("valid");
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn valid() {
		run_command(vec![
			"curvekit",
			"validate",
			"COMPOUNDCURVE (CIRCULARSTRING (0 0,1 1,2 0),(2 0,3 -1))",
		])
		.unwrap();
	}

	#[test]
	fn gap_in_compound_curve() {
		let err = run_command(vec!["curvekit", "validate", "COMPOUNDCURVE ((0 0,1 1),(2 2,3 3))"]).unwrap_err();
		assert_eq!(
			format!("{err:#}"),
			"reading WKT: curve 1 breaks contiguity: starts at (2 2) but the previous curve ends at (1 1)"
		);
	}
}
