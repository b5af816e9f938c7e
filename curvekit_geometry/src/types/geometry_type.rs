use std::fmt::{self, Display};

/// Type tag of a geometry.
///
/// `Geometry` and `Curve` are abstract: they only appear as ancestors in the type hierarchy
/// and have no instances.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
	Geometry,
	Curve,
	Point,
	LineString,
	CircularString,
	CompoundCurve,
	GeometryCollection,
	MultiCurve,
}

impl GeometryType {
	pub const ALL: [GeometryType; 8] = [
		GeometryType::Geometry,
		GeometryType::Curve,
		GeometryType::Point,
		GeometryType::LineString,
		GeometryType::CircularString,
		GeometryType::CompoundCurve,
		GeometryType::GeometryCollection,
		GeometryType::MultiCurve,
	];

	/// The direct supertype, `None` for the root.
	#[must_use]
	pub fn parent(self) -> Option<GeometryType> {
		match self {
			Self::Geometry => None,
			Self::Curve | Self::Point | Self::GeometryCollection => Some(Self::Geometry),
			Self::LineString | Self::CircularString | Self::CompoundCurve => Some(Self::Curve),
			Self::MultiCurve => Some(Self::GeometryCollection),
		}
	}

	/// Returns `true` if `self` equals `other` or inherits from it.
	#[must_use]
	pub fn is_a(self, other: GeometryType) -> bool {
		let mut current = Some(self);
		while let Some(tag) = current {
			if tag == other {
				return true;
			}
			current = tag.parent();
		}
		false
	}

	#[must_use]
	pub fn is_abstract(self) -> bool {
		matches!(self, GeometryType::Geometry | GeometryType::Curve)
	}

	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			Self::Geometry => "Geometry",
			Self::Curve => "Curve",
			Self::Point => "Point",
			Self::LineString => "LineString",
			Self::CircularString => "CircularString",
			Self::CompoundCurve => "CompoundCurve",
			Self::GeometryCollection => "GeometryCollection",
			Self::MultiCurve => "MultiCurve",
		}
	}

	/// The upper case WKT keyword, `None` for abstract types.
	#[must_use]
	pub fn wkt_keyword(self) -> Option<&'static str> {
		match self {
			Self::Geometry | Self::Curve => None,
			Self::Point => Some("POINT"),
			Self::LineString => Some("LINESTRING"),
			Self::CircularString => Some("CIRCULARSTRING"),
			Self::CompoundCurve => Some("COMPOUNDCURVE"),
			Self::GeometryCollection => Some("GEOMETRYCOLLECTION"),
			Self::MultiCurve => Some("MULTICURVE"),
		}
	}

	/// Looks up a WKT keyword, ignoring ASCII case.
	#[must_use]
	pub fn from_wkt_keyword(keyword: &str) -> Option<GeometryType> {
		GeometryType::ALL
			.into_iter()
			.find(|tag| tag.wkt_keyword().is_some_and(|k| k.eq_ignore_ascii_case(keyword)))
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Coordinate dimensions: which ordinates each point carries besides x and y.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dimensions {
	#[default]
	Xy,
	Xyz,
	Xym,
	Xyzm,
}

impl Dimensions {
	#[must_use]
	pub fn new(has_z: bool, has_m: bool) -> Self {
		match (has_z, has_m) {
			(false, false) => Dimensions::Xy,
			(true, false) => Dimensions::Xyz,
			(false, true) => Dimensions::Xym,
			(true, true) => Dimensions::Xyzm,
		}
	}

	/// Dimensions implied by a bare ordinate count, as used when WKT carries no suffix.
	#[must_use]
	pub fn from_ordinate_count(count: usize) -> Option<Self> {
		match count {
			2 => Some(Dimensions::Xy),
			3 => Some(Dimensions::Xyz),
			4 => Some(Dimensions::Xyzm),
			_ => None,
		}
	}

	/// Parses a WKT dimension suffix (`Z`, `M`, `ZM`), ignoring ASCII case.
	#[must_use]
	pub fn from_wkt_suffix(suffix: &str) -> Option<Self> {
		match suffix.to_ascii_uppercase().as_str() {
			"Z" => Some(Dimensions::Xyz),
			"M" => Some(Dimensions::Xym),
			"ZM" => Some(Dimensions::Xyzm),
			_ => None,
		}
	}

	#[must_use]
	pub fn wkt_suffix(self) -> &'static str {
		match self {
			Dimensions::Xy => "",
			Dimensions::Xyz => "Z",
			Dimensions::Xym => "M",
			Dimensions::Xyzm => "ZM",
		}
	}

	#[must_use]
	pub fn has_z(self) -> bool {
		matches!(self, Dimensions::Xyz | Dimensions::Xyzm)
	}

	#[must_use]
	pub fn has_m(self) -> bool {
		matches!(self, Dimensions::Xym | Dimensions::Xyzm)
	}

	#[must_use]
	pub fn ordinate_count(self) -> usize {
		2 + usize::from(self.has_z()) + usize::from(self.has_m())
	}
}
