use crate::{
	CircularStringGeometry, CollectionView, CompoundCurveGeometry, GeometryCollectionGeometry, GeometryError,
	GeometryTrait, GeometryType, LineStringGeometry, MultiCurveGeometry, PointGeometry,
	types::impl_geometry_enum,
	wkt::{WktReadOptions, parse_wkt_with},
};
use std::str::FromStr;

/// Any geometry of the object model.
///
/// Parents own their children, so a `Geometry` is always a tree. Use [`Geometry::from_wkt`]
/// to read text and [`GeometryTrait::to_wkt`] to write it.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	CircularString(CircularStringGeometry),
	CompoundCurve(CompoundCurveGeometry),
	MultiCurve(MultiCurveGeometry),
	GeometryCollection(GeometryCollectionGeometry),
}

impl_geometry_enum!(Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	CircularString(CircularStringGeometry),
	CompoundCurve(CompoundCurveGeometry),
	MultiCurve(MultiCurveGeometry),
	GeometryCollection(GeometryCollectionGeometry),
});

impl Geometry {
	/// Parses WKT with default options.
	pub fn from_wkt(text: &str) -> Result<Self, GeometryError> {
		Self::from_wkt_with(text, &WktReadOptions::default())
	}

	pub fn from_wkt_with(text: &str, options: &WktReadOptions) -> Result<Self, GeometryError> {
		parse_wkt_with(text, options)
	}

	#[must_use]
	pub fn is_curve(&self) -> bool {
		self.is_a(GeometryType::Curve)
	}

	#[must_use]
	pub fn is_collection(&self) -> bool {
		self.is_a(GeometryType::GeometryCollection)
	}

	#[must_use]
	pub fn as_point(&self) -> Option<&PointGeometry> {
		match self {
			Geometry::Point(g) => Some(g),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_line_string(&self) -> Option<&LineStringGeometry> {
		match self {
			Geometry::LineString(g) => Some(g),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_circular_string(&self) -> Option<&CircularStringGeometry> {
		match self {
			Geometry::CircularString(g) => Some(g),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_compound_curve(&self) -> Option<&CompoundCurveGeometry> {
		match self {
			Geometry::CompoundCurve(g) => Some(g),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_multi_curve(&self) -> Option<&MultiCurveGeometry> {
		match self {
			Geometry::MultiCurve(g) => Some(g),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_geometry_collection(&self) -> Option<&GeometryCollectionGeometry> {
		match self {
			Geometry::GeometryCollection(g) => Some(g),
			_ => None,
		}
	}

	/// Read access to the members of any collection, including a `MultiCurve`.
	#[must_use]
	pub fn as_collection(&self) -> Option<&dyn CollectionView> {
		match self {
			Geometry::MultiCurve(g) => Some(g.children()),
			Geometry::GeometryCollection(g) => Some(g.children()),
			_ => None,
		}
	}

	/// Number of direct children: segments of a compound curve or members of a collection.
	#[must_use]
	pub fn children_count(&self) -> usize {
		match self {
			Geometry::Point(_) | Geometry::LineString(_) | Geometry::CircularString(_) => 0,
			Geometry::CompoundCurve(g) => g.curves().count(),
			Geometry::MultiCurve(g) => g.children().count(),
			Geometry::GeometryCollection(g) => g.children().count(),
		}
	}
}

impl FromStr for Geometry {
	type Err = GeometryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_wkt(s)
	}
}
