use anyhow::{Context, Result};
use curvekit_geometry::wkt::{WktReadOptions, WktWriteOptions};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// Settings loaded from a YAML file with `--config`.
///
/// ```yaml
/// reader:
///   max_depth: 32
///   debug: true
/// writer:
///   precision: 6
/// ```
#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// How WKT input is read
	#[serde(default)]
	pub reader: ReaderConfig,

	/// How WKT output is written
	#[serde(default)]
	pub writer: WriterConfig,
}

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReaderConfig {
	/// Maximum nesting of geometries, 32 if not set
	pub max_depth: Option<usize>,

	/// Show the text before a syntax error
	#[serde(default)]
	pub debug: bool,
}

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WriterConfig {
	/// Number of decimals for ordinates, shortest exact form if not set
	pub precision: Option<u8>,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	#[cfg(test)]
	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("parsing config file {path:?}"))
	}

	pub fn read_options(&self) -> WktReadOptions {
		let defaults = WktReadOptions::default();
		WktReadOptions {
			max_depth: self.reader.max_depth.unwrap_or(defaults.max_depth),
			debug: self.reader.debug,
		}
	}

	/// Writer options, with `precision` taking priority over the configured one.
	pub fn write_options(&self, precision: Option<u8>) -> WktWriteOptions {
		WktWriteOptions {
			precision: precision.or(self.writer.precision),
		}
	}
}
