use super::{Coordinates, CurveTrait, Dimensions, GeometryTrait, GeometryType, coordinates::verify_coordinates};
use crate::{
	GeometryError,
	wkt::{WktWriter, WriteWkt},
};
use std::fmt::Debug;

/// Represents a sequence of points connected by straight segments.
#[derive(Clone, Default, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl LineStringGeometry {
	/// Creates a new, empty `LineStringGeometry`.
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

	/// Writes the bare point list, as used for line strings inside compound curves and multi curves.
	pub(crate) fn write_wkt_body(&self, writer: &mut WktWriter) {
		writer.write_point_list(&self.0);
	}
}

impl GeometryTrait for LineStringGeometry {
	fn type_tag(&self) -> GeometryType {
		GeometryType::LineString
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

	/// Ensures that the `LineStringGeometry` is empty or has at least two points.
	fn verify(&self) -> Result<(), GeometryError> {
		if self.0.len() == 1 {
			return Err(GeometryError::serialization(
				"LineString must be empty or have at least two points",
			));
		}
		verify_coordinates(GeometryType::LineString, &self.0)
	}
}

impl CurveTrait for LineStringGeometry {
	fn start_point(&self) -> Option<&Coordinates> {
		self.0.first()
	}

	fn end_point(&self) -> Option<&Coordinates> {
		self.0.last()
	}
}

impl WriteWkt for LineStringGeometry {
	fn write_wkt(&self, writer: &mut WktWriter) {
		writer.write_tagged(GeometryType::LineString, self.dimensions(), self.is_empty(), |w| {
			self.write_wkt_body(w);
		});
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl From<&LineStringGeometry> for geo_types::LineString {
	fn from(value: &LineStringGeometry) -> Self {
		value.0.iter().map(|c| geo_types::Coord::from(*c)).collect()
	}
}

impl From<geo_types::LineString> for LineStringGeometry {
	fn from(value: geo_types::LineString) -> Self {
		Self(value.0.into_iter().map(Coordinates::from).collect())
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_is_empty() {
		let line = LineStringGeometry::new();
		assert!(line.is_empty());
		assert_eq!(line.start_point(), None);
		assert!(!line.is_closed());
		assert_eq!(line.to_wkt().unwrap(), "LINESTRING EMPTY");
	}

	#[test]
	fn endpoints_and_closed() {
		let line = LineStringGeometry::from(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]);
		assert_eq!(line.start_point(), Some(&Coordinates::new(0.0, 0.0)));
		assert_eq!(line.end_point(), Some(&Coordinates::new(0.0, 0.0)));
		assert!(line.is_closed());
		assert_eq!(line.point_count(), 4);
	}

	#[test]
	fn verify_rejects_single_point() {
		let mut line = LineStringGeometry::new();
		line.push(Coordinates::new(1.0, 1.0));
		assert!(matches!(line.verify(), Err(GeometryError::Serialization(_))));
		assert!(line.to_wkt().is_err());
		line.push(Coordinates::new(2.0, 2.0));
		assert!(line.verify().is_ok());
	}

	#[test]
	fn verify_rejects_mixed_dimensions() {
		let line = LineStringGeometry(vec![Coordinates::new(0.0, 0.0), Coordinates::new_z(1.0, 1.0, 1.0)]);
		let error = line.verify().unwrap_err();
		assert!(error.to_string().contains("mixes dimensions"), "{error}");
	}

	#[test]
	fn to_wkt() {
		let line = LineStringGeometry::from(vec![[692067.186040178, 594564.425636366], [692026.997800346, 594156.751911029]]);
		assert_eq!(
			line.to_wkt().unwrap(),
			"LINESTRING (692067.186040178 594564.425636366,692026.997800346 594156.751911029)"
		);

		let line = LineStringGeometry(vec![Coordinates::new_z(0.0, 0.0, 1.0), Coordinates::new_z(1.0, 1.0, 2.0)]);
		assert_eq!(line.to_wkt().unwrap(), "LINESTRING Z (0 0 1,1 1 2)");
	}

	#[test]
	fn geo_types_round_trip() {
		let line = LineStringGeometry::from(vec![[0.0, 0.0], [3.0, 4.0]]);
		let geo_line = geo_types::LineString::from(&line);
		assert_eq!(geo_line.0.len(), 2);
		assert_eq!(LineStringGeometry::from(geo_line), line);
	}
}
