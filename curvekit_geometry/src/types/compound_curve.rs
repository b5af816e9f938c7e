use super::{
	CircularStringGeometry, CollectionMember, Coordinates, CurveCollection, CurveTrait, Dimensions, GeometryTrait,
	GeometryType, LineStringGeometry, Linkage, macros::impl_geometry_enum,
};
use crate::{
	GeometryError,
	wkt::{WktWriter, WriteWkt},
};
use std::fmt::Debug;

/// A component of a compound curve: a straight line string or a circular arc string.
#[derive(Clone, PartialEq)]
pub enum CurveSegment {
	LineString(LineStringGeometry),
	CircularString(CircularStringGeometry),
}

impl_geometry_enum!(curve CurveSegment {
	LineString(LineStringGeometry),
	CircularString(CircularStringGeometry),
});

impl CurveSegment {
	#[must_use]
	pub fn points(&self) -> &[Coordinates] {
		match self {
			CurveSegment::LineString(g) => g.points(),
			CurveSegment::CircularString(g) => g.points(),
		}
	}

	#[must_use]
	pub fn as_circular_string(&self) -> Option<&CircularStringGeometry> {
		match self {
			CurveSegment::CircularString(g) => Some(g),
			CurveSegment::LineString(_) => None,
		}
	}

	#[must_use]
	pub fn as_line_string(&self) -> Option<&LineStringGeometry> {
		match self {
			CurveSegment::LineString(g) => Some(g),
			CurveSegment::CircularString(_) => None,
		}
	}
}

impl CollectionMember for CurveSegment {
	const MEMBER_TYPE: GeometryType = GeometryType::Curve;

	fn from_geometry(geometry: crate::Geometry) -> Result<Self, GeometryError> {
		Self::try_from(geometry)
	}

	fn endpoints(&self) -> Option<(&Coordinates, &Coordinates)> {
		self.start_point().zip(self.end_point())
	}
}

/// A curve made of contiguous line string and circular string segments.
///
/// Each segment starts exactly where the previous one ends. The invariant is checked whenever
/// a segment is added, so a `CompoundCurveGeometry` can never hold a gap.
#[derive(Clone, PartialEq)]
pub struct CompoundCurveGeometry {
	curves: CurveCollection<CurveSegment>,
}

impl CompoundCurveGeometry {
	#[must_use]
	pub fn new() -> Self {
		Self {
			curves: CurveCollection::new(Linkage::Contiguous),
		}
	}

	/// The component curves, in order.
	#[must_use]
	pub fn curves(&self) -> &CurveCollection<CurveSegment> {
		&self.curves
	}

	/// Mutable access for adding and removing segments; contiguity is still enforced.
	pub fn curves_mut(&mut self) -> &mut CurveCollection<CurveSegment> {
		&mut self.curves
	}

	/// Builds a compound curve from segments, failing on the first gap.
	pub fn try_from_segments(segments: impl IntoIterator<Item = CurveSegment>) -> Result<Self, GeometryError> {
		let mut compound = Self::new();
		for segment in segments {
			compound.curves.add(segment)?;
		}
		Ok(compound)
	}
}

impl Default for CompoundCurveGeometry {
	fn default() -> Self {
		Self::new()
	}
}

impl GeometryTrait for CompoundCurveGeometry {
	fn type_tag(&self) -> GeometryType {
		GeometryType::CompoundCurve
	}

	fn dimensions(&self) -> Dimensions {
		self.curves.dimensions()
	}

	fn is_empty(&self) -> bool {
		self.curves.is_empty()
	}

	fn point_count(&self) -> usize {
		self.curves.point_count()
	}

	/// Besides the segments themselves, rejects empty segments: they have no WKT form inside a
	/// compound curve.
	fn verify(&self) -> Result<(), GeometryError> {
		if let Some(index) = self.curves.iter().position(GeometryTrait::is_empty) {
			return Err(GeometryError::serialization(format!("CompoundCurve segment {index} is empty")));
		}
		self.curves.verify_members(GeometryType::CompoundCurve)
	}
}

impl CurveTrait for CompoundCurveGeometry {
	fn start_point(&self) -> Option<&Coordinates> {
		self.curves.iter().find_map(CurveTrait::start_point)
	}

	fn end_point(&self) -> Option<&Coordinates> {
		self.curves.iter().rev().find_map(CurveTrait::end_point)
	}
}

impl WriteWkt for CompoundCurveGeometry {
	fn write_wkt(&self, writer: &mut WktWriter) {
		writer.write_tagged(GeometryType::CompoundCurve, self.dimensions(), self.is_empty(), |w| {
			w.write_members(self.curves.iter(), |w, segment| match segment {
				CurveSegment::LineString(line) => line.write_wkt_body(w),
				CurveSegment::CircularString(arc) => arc.write_wkt(w),
			});
		});
	}
}

impl Debug for CompoundCurveGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.curves.fmt(f)
	}
}
