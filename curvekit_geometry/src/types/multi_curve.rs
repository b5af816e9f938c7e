use super::{
	CircularStringGeometry, CollectionMember, CompoundCurveGeometry, Coordinates, CurveCollection, CurveTrait,
	Dimensions, GeometryTrait, GeometryType, LineStringGeometry, Linkage, macros::impl_geometry_enum,
};
use crate::{
	GeometryError,
	wkt::{WktWriter, WriteWkt},
};
use std::fmt::Debug;

/// Any curve geometry.
#[derive(Clone, PartialEq)]
pub enum Curve {
	LineString(LineStringGeometry),
	CircularString(CircularStringGeometry),
	CompoundCurve(CompoundCurveGeometry),
}

impl_geometry_enum!(curve Curve {
	LineString(LineStringGeometry),
	CircularString(CircularStringGeometry),
	CompoundCurve(CompoundCurveGeometry),
});

impl Curve {
	#[must_use]
	pub fn as_compound_curve(&self) -> Option<&CompoundCurveGeometry> {
		match self {
			Curve::CompoundCurve(g) => Some(g),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_circular_string(&self) -> Option<&CircularStringGeometry> {
		match self {
			Curve::CircularString(g) => Some(g),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_line_string(&self) -> Option<&LineStringGeometry> {
		match self {
			Curve::LineString(g) => Some(g),
			_ => None,
		}
	}
}

impl CollectionMember for Curve {
	const MEMBER_TYPE: GeometryType = GeometryType::Curve;

	fn from_geometry(geometry: crate::Geometry) -> Result<Self, GeometryError> {
		Self::try_from(geometry)
	}

	fn endpoints(&self) -> Option<(&Coordinates, &Coordinates)> {
		self.start_point().zip(self.end_point())
	}
}

/// A collection of independent curves.
///
/// Unlike the segments of a compound curve, the children do not need to touch each other.
#[derive(Clone, PartialEq)]
pub struct MultiCurveGeometry {
	children: CurveCollection<Curve>,
}

impl MultiCurveGeometry {
	#[must_use]
	pub fn new() -> Self {
		Self {
			children: CurveCollection::new(Linkage::Independent),
		}
	}

	#[must_use]
	pub fn children(&self) -> &CurveCollection<Curve> {
		&self.children
	}

	pub fn children_mut(&mut self) -> &mut CurveCollection<Curve> {
		&mut self.children
	}
}

impl Default for MultiCurveGeometry {
	fn default() -> Self {
		Self::new()
	}
}

impl FromIterator<Curve> for MultiCurveGeometry {
	fn from_iter<I: IntoIterator<Item = Curve>>(iter: I) -> Self {
		let mut multi = Self::new();
		for curve in iter {
			// independent collections accept every curve
			let _ = multi.children.add(curve);
		}
		multi
	}
}

impl GeometryTrait for MultiCurveGeometry {
	fn type_tag(&self) -> GeometryType {
		GeometryType::MultiCurve
	}

	fn dimensions(&self) -> Dimensions {
		self.children.dimensions()
	}

	fn is_empty(&self) -> bool {
		self.children.is_empty()
	}

	fn point_count(&self) -> usize {
		self.children.point_count()
	}

	fn verify(&self) -> Result<(), GeometryError> {
		self.children.verify_members(GeometryType::MultiCurve)
	}
}

impl WriteWkt for MultiCurveGeometry {
	fn write_wkt(&self, writer: &mut WktWriter) {
		writer.write_tagged(GeometryType::MultiCurve, self.dimensions(), self.is_empty(), |w| {
			w.write_members(self.children.iter(), |w, child| match child {
				Curve::LineString(line) if !line.is_empty() => line.write_wkt_body(w),
				other => other.write_wkt(w),
			});
		});
	}
}

impl Debug for MultiCurveGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.children.fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CurveSegment, Geometry, PointGeometry};
	use pretty_assertions::assert_eq;

	fn compound() -> CompoundCurveGeometry {
		CompoundCurveGeometry::try_from_segments([
			CurveSegment::from(CircularStringGeometry::from(vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]])),
			CurveSegment::from(LineStringGeometry::from(vec![[2.0, 0.0], [3.0, -1.0]])),
		])
		.unwrap()
	}

	#[test]
	fn new_is_a_geometry_collection() {
		let multi = MultiCurveGeometry::new();
		assert_eq!(multi.children().count(), 0);
		assert!(multi.is_a(GeometryType::MultiCurve));
		assert!(multi.is_a(GeometryType::GeometryCollection));
		assert!(multi.is_a(GeometryType::Geometry));
		assert!(!multi.is_a(GeometryType::Curve));
		assert_eq!(multi.to_wkt().unwrap(), "MULTICURVE EMPTY");
	}

	#[test]
	fn children_are_independent() {
		let mut multi = MultiCurveGeometry::new();
		multi.children_mut().add(Curve::from(compound())).unwrap();
		multi
			.children_mut()
			.add(Curve::from(LineStringGeometry::from(vec![[10.0, 10.0], [11.0, 11.0]])))
			.unwrap();
		assert_eq!(multi.children().count(), 2);
		assert_eq!(multi.children().get(0).unwrap().type_tag(), GeometryType::CompoundCurve);
		assert_eq!(multi.children().get(0).unwrap().as_compound_curve().unwrap().curves().count(), 2);
		assert_eq!(
			multi.children().get(5).unwrap_err(),
			GeometryError::IndexOutOfRange { index: 5, count: 2 }
		);
	}

	#[test]
	fn add_geometry_rejects_non_curves() {
		let mut multi = MultiCurveGeometry::new();
		let error = multi
			.children_mut()
			.add_geometry(Geometry::from(PointGeometry::from([1.0, 2.0])))
			.unwrap_err();
		assert_eq!(
			error.to_string(),
			"unsupported geometry type Point: not allowed as a member of Curve"
		);
		assert!(multi.children().is_empty());
	}

	#[test]
	fn to_wkt() {
		let multi: MultiCurveGeometry = [
			Curve::from(compound()),
			Curve::from(LineStringGeometry::from(vec![[5.0, 5.0], [6.0, 6.0]])),
			Curve::from(LineStringGeometry::new()),
			Curve::from(CircularStringGeometry::from(vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]])),
		]
		.into_iter()
		.collect();
		assert_eq!(
			multi.to_wkt().unwrap(),
			"MULTICURVE (COMPOUNDCURVE (CIRCULARSTRING (0 0,1 1,2 0),(2 0,3 -1)),(5 5,6 6),LINESTRING EMPTY,CIRCULARSTRING (0 0,1 1,2 0))"
		);
	}

	#[test]
	fn invalid_child_cannot_be_written() {
		let multi: MultiCurveGeometry = [Curve::from(CircularStringGeometry::from(vec![[0.0, 0.0], [1.0, 1.0]]))]
			.into_iter()
			.collect();
		assert!(matches!(multi.to_wkt(), Err(GeometryError::Serialization(_))));
	}

	#[test]
	fn mixed_child_dimensions_cannot_be_written() {
		let multi: MultiCurveGeometry = [
			Curve::from(LineStringGeometry::from(vec![[0.0, 0.0], [1.0, 1.0]])),
			Curve::from(LineStringGeometry::from(vec![[0.0, 0.0, 1.0], [1.0, 1.0, 1.0]])),
		]
		.into_iter()
		.collect();
		let error = multi.verify().unwrap_err();
		assert_eq!(
			error.to_string(),
			"cannot write WKT: MultiCurve mixes dimensions: expected Xy, member 1 is Xyz"
		);
	}
}
