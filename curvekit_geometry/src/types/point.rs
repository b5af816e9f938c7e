use super::{Coordinates, Dimensions, GeometryTrait, GeometryType, coordinates::verify_coordinates};
use crate::{
	GeometryError,
	wkt::{WktWriter, WriteWkt},
};
use std::fmt::Debug;

/// A single position, or `POINT EMPTY` when the inner value is `None`.
#[derive(Clone, Default, PartialEq)]
pub struct PointGeometry(pub Option<Coordinates>);

impl PointGeometry {
	/// Constructs a new `PointGeometry` at the given position.
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(Some(c))
	}

	#[must_use]
	pub fn new_empty() -> Self {
		Self(None)
	}

	/// Returns a reference to the underlying `Coordinates`, if any.
	#[must_use]
	pub fn as_coord(&self) -> Option<&Coordinates> {
		self.0.as_ref()
	}
}

impl GeometryTrait for PointGeometry {
	fn type_tag(&self) -> GeometryType {
		GeometryType::Point
	}

	fn dimensions(&self) -> Dimensions {
		self.0.map_or(Dimensions::Xy, |c| c.dimensions())
	}

	fn is_empty(&self) -> bool {
		self.0.is_none()
	}

	fn point_count(&self) -> usize {
		usize::from(self.0.is_some())
	}

	fn verify(&self) -> Result<(), GeometryError> {
		verify_coordinates(GeometryType::Point, self.0.as_slice())
	}
}

impl WriteWkt for PointGeometry {
	fn write_wkt(&self, writer: &mut WktWriter) {
		writer.write_tagged(GeometryType::Point, self.dimensions(), self.is_empty(), |w| {
			w.write_point_list(self.0.as_slice());
		});
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.0 {
			Some(c) => c.fmt(f),
			None => f.write_str("EMPTY"),
		}
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Some(Coordinates::from(value)))
	}
}
