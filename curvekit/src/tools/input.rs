use anyhow::{Context, Result, bail};
use clap::Args;
use std::{
	fs,
	io::{self, IsTerminal, Read},
	path::PathBuf,
};

/// Where the WKT text comes from: an argument, a file or stdin.
#[derive(Args, Debug)]
pub struct Input {
	/// WKT text, e.g. "COMPOUNDCURVE ((0 0,1 1),(1 1,2 0))"
	#[arg(conflicts_with = "file")]
	pub wkt: Option<String>,

	/// read WKT from this file instead
	#[arg(long, short)]
	pub file: Option<PathBuf>,
}

impl Input {
	/// Returns the WKT text. Without an argument or file, reads stdin unless it is a terminal.
	pub fn read(&self) -> Result<String> {
		if let Some(wkt) = &self.wkt {
			return Ok(wkt.clone());
		}
		if let Some(path) = &self.file {
			return fs::read_to_string(path).with_context(|| format!("reading WKT from {path:?}"));
		}

		let mut stdin = io::stdin();
		if stdin.is_terminal() {
			bail!("no WKT given: pass it as an argument, with --file or on stdin");
		}
		let mut text = String::new();
		stdin.read_to_string(&mut text).context("reading WKT from stdin")?;
		Ok(text)
	}
}
