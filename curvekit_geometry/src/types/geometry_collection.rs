use super::{
	CollectionMember, Coordinates, CurveCollection, Dimensions, GeometryTrait, GeometryType, Linkage,
};
use crate::{
	Geometry, GeometryError,
	wkt::{WktWriter, WriteWkt},
};
use std::fmt::Debug;

/// A heterogeneous collection of geometries of any type.
#[derive(Clone, PartialEq)]
pub struct GeometryCollectionGeometry {
	children: CurveCollection<Geometry>,
}

impl GeometryCollectionGeometry {
	#[must_use]
	pub fn new() -> Self {
		Self {
			children: CurveCollection::new(Linkage::Independent),
		}
	}

	#[must_use]
	pub fn children(&self) -> &CurveCollection<Geometry> {
		&self.children
	}

	pub fn children_mut(&mut self) -> &mut CurveCollection<Geometry> {
		&mut self.children
	}
}

impl Default for GeometryCollectionGeometry {
	fn default() -> Self {
		Self::new()
	}
}

impl CollectionMember for Geometry {
	const MEMBER_TYPE: GeometryType = GeometryType::Geometry;

	fn from_geometry(geometry: Geometry) -> Result<Self, GeometryError> {
		Ok(geometry)
	}

	fn endpoints(&self) -> Option<(&Coordinates, &Coordinates)> {
		None
	}
}

impl GeometryTrait for GeometryCollectionGeometry {
	fn type_tag(&self) -> GeometryType {
		GeometryType::GeometryCollection
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
		self.children.verify_members(GeometryType::GeometryCollection)
	}
}

impl WriteWkt for GeometryCollectionGeometry {
	fn write_wkt(&self, writer: &mut WktWriter) {
		writer.write_tagged(GeometryType::GeometryCollection, self.dimensions(), self.is_empty(), |w| {
			w.write_members(self.children.iter(), |w, child| child.write_wkt(w));
		});
	}
}

impl Debug for GeometryCollectionGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.children.fmt(f)
	}
}
