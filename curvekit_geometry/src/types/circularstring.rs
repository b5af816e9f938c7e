use super::{Coordinates, CurveTrait, Dimensions, GeometryTrait, GeometryType, coordinates::verify_coordinates};
use crate::{
	GeometryError,
	wkt::{WktWriter, WriteWkt},
};
use std::fmt::Debug;

/// A curve made of circular arcs.
///
/// Every arc is defined by three points (start, a point on the arc, end), and consecutive arcs
/// share their end and start points. A non-empty circular string therefore has an odd number
/// of at least three points.
#[derive(Clone, Default, PartialEq)]
pub struct CircularStringGeometry(pub Vec<Coordinates>);

impl CircularStringGeometry {
	/// Creates a new, empty `CircularStringGeometry`.
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	#[must_use]
	pub fn points(&self) -> &[Coordinates] {
		&self.0
	}

	pub fn push(&mut self, point: Coordinates) {
		self.0.push(point);
	}

	/// Number of arcs, `(n - 1) / 2` for `n` points.
	#[must_use]
	pub fn arc_count(&self) -> usize {
		self.0.len().saturating_sub(1) / 2
	}

	/// Returns `true` for a point count a circular string may have: zero, or odd and at least three.
	#[must_use]
	pub fn is_valid_point_count(count: usize) -> bool {
		count == 0 || (count >= 3 && count % 2 == 1)
	}
}

impl GeometryTrait for CircularStringGeometry {
	fn type_tag(&self) -> GeometryType {
		GeometryType::CircularString
	}

	fn dimensions(&self) -> Dimensions {
		self.0.first().map_or(Dimensions::Xy, Coordinates::dimensions)
	}

	fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	fn point_count(&self) -> usize {
		self.0.len()
	}

	fn verify(&self) -> Result<(), GeometryError> {
		if !Self::is_valid_point_count(self.0.len()) {
			return Err(GeometryError::serialization(format!(
				"CircularString must have an odd number of at least 3 points, found {}",
				self.0.len()
			)));
		}
		verify_coordinates(GeometryType::CircularString, &self.0)
	}
}

impl CurveTrait for CircularStringGeometry {
	fn start_point(&self) -> Option<&Coordinates> {
		self.0.first()
	}

	fn end_point(&self) -> Option<&Coordinates> {
		self.0.last()
	}
}

impl WriteWkt for CircularStringGeometry {
	fn write_wkt(&self, writer: &mut WktWriter) {
		writer.write_tagged(GeometryType::CircularString, self.dimensions(), self.is_empty(), |w| {
			w.write_point_list(&self.0);
		});
	}
}

impl Debug for CircularStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(CircularStringGeometry, Coordinates);
