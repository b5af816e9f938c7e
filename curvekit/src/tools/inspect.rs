use super::input::Input;
use crate::config::Config;
use anyhow::{Context, Result};
use curvekit_geometry::{Dimensions, Geometry, GeometryTrait};
use std::fmt::Write;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	#[command(flatten)]
	input: Input,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let text = arguments.input.read()?;
	let geometry = Geometry::from_wkt_with(text.trim(), &config.read_options()).context("reading WKT")?;
	print!("{}", describe(&geometry));
	Ok(())
}

/// One line per geometry, children indented below their parent.
fn describe(geometry: &Geometry) -> String {
	let mut output = String::new();
	describe_into(geometry, 0, &mut output);
	output
}

fn describe_into(geometry: &Geometry, depth: usize, output: &mut String) {
	let indent = "  ".repeat(depth);
	let mut label = geometry.type_tag().to_string();
	if geometry.dimensions() != Dimensions::Xy {
		label.push(' ');
		label.push_str(geometry.dimensions().wkt_suffix());
	}

	let children = children(geometry);
	let _ = if geometry.is_empty() {
		writeln!(output, "{indent}{label}: empty")
	} else if children.is_empty() {
		writeln!(output, "{indent}{label}: {} points", geometry.point_count())
	} else {
		writeln!(
			output,
			"{indent}{label}: {} children, {} points",
			children.len(),
			geometry.point_count()
		)
	};

	for child in &children {
		describe_into(child, depth + 1, output);
	}
}

fn children(geometry: &Geometry) -> Vec<Geometry> {
	match geometry {
		Geometry::Point(_) | Geometry::LineString(_) | Geometry::CircularString(_) => Vec::new(),
		Geometry::CompoundCurve(g) => g.curves().iter().cloned().map(Geometry::from).collect(),
		Geometry::MultiCurve(g) => g.children().iter().cloned().map(Geometry::from).collect(),
		Geometry::GeometryCollection(g) => g.children().iter().cloned().collect(),
	}
}
