/// Settings for [`parse_wkt_with`](super::parse_wkt_with).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WktReadOptions {
	/// Maximum number of nested geometries, counting the outermost one.
	pub max_depth: usize,
	/// Adds the most recently read bytes to parse errors.
	pub debug: bool,
}

impl WktReadOptions {
	pub const DEFAULT_MAX_DEPTH: usize = 32;
}

impl Default for WktReadOptions {
	fn default() -> Self {
		Self {
			max_depth: Self::DEFAULT_MAX_DEPTH,
			debug: false,
		}
	}
}

/// Settings for [`WktWriter`](super::WktWriter).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WktWriteOptions {
	/// Round ordinates to this many decimals. `None` writes the shortest representation that
	/// reads back to the same value.
	pub precision: Option<u8>,
}

impl WktWriteOptions {
	#[must_use]
	pub fn with_precision(precision: u8) -> Self {
		Self {
			precision: Some(precision),
		}
	}
}
