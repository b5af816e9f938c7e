use crate::GeometryType;
use curvekit_core::ParseError;
use thiserror::Error;

/// Errors raised by geometry construction, collection access, and WKT conversion.
///
/// Every failing operation leaves the geometry it was called on unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
	/// Malformed WKT input.
	#[error("invalid WKT: {0}")]
	Parse(#[from] ParseError),

	/// A compound curve would lose its endpoint contiguity.
	#[error("curve {index} breaks contiguity: {detail}")]
	Topology { index: usize, detail: String },

	#[error("index {index} is out of range for a collection of {count} elements")]
	IndexOutOfRange { index: usize, count: usize },

	/// A geometry type that cannot be created or stored at this place.
	#[error("unsupported geometry type {geometry_type}: {reason}")]
	UnsupportedType {
		geometry_type: GeometryType,
		reason: String,
	},

	/// The geometry (or one of its children) cannot be expressed as WKT.
	#[error("cannot write WKT: {0}")]
	Serialization(String),
}

impl GeometryError {
	pub(crate) fn unsupported(geometry_type: GeometryType, reason: impl Into<String>) -> Self {
		Self::UnsupportedType {
			geometry_type,
			reason: reason.into(),
		}
	}

	pub(crate) fn serialization(message: impl Into<String>) -> Self {
		Self::Serialization(message.into())
	}
}
