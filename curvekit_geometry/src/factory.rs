use crate::{
	CircularStringGeometry, CompoundCurveGeometry, Geometry, GeometryCollectionGeometry, GeometryError, GeometryType,
	LineStringGeometry, MultiCurveGeometry, PointGeometry,
};
use log::trace;

/// Creates empty geometries from type tags or WKT keywords.
pub struct GeometryFactory;

impl GeometryFactory {
	/// Returns an empty instance of the variant `geometry_type` names.
	///
	/// # Errors
	/// [`GeometryError::UnsupportedType`] for the abstract types `Geometry` and `Curve`.
	pub fn create_by_type_tag(geometry_type: GeometryType) -> Result<Geometry, GeometryError> {
		trace!("creating empty {geometry_type}");
		Ok(match geometry_type {
			GeometryType::Point => Geometry::from(PointGeometry::new_empty()),
			GeometryType::LineString => Geometry::from(LineStringGeometry::new()),
			GeometryType::CircularString => Geometry::from(CircularStringGeometry::new()),
			GeometryType::CompoundCurve => Geometry::from(CompoundCurveGeometry::new()),
			GeometryType::MultiCurve => Geometry::from(MultiCurveGeometry::new()),
			GeometryType::GeometryCollection => Geometry::from(GeometryCollectionGeometry::new()),
			GeometryType::Geometry | GeometryType::Curve => {
				return Err(GeometryError::unsupported(geometry_type, "abstract types have no instances"));
			}
		})
	}

	/// Looks up a WKT keyword (case-insensitive) and creates an empty instance.
	///
	/// # Errors
	/// [`GeometryError::Parse`] if `keyword` is not a geometry keyword.
	pub fn create_by_keyword(keyword: &str) -> Result<Geometry, GeometryError> {
		let geometry_type = GeometryType::from_wkt_keyword(keyword).ok_or_else(|| {
			curvekit_core::ParseError::new(0, "a geometry keyword", format!("{keyword:?}"))
		})?;
		Self::create_by_type_tag(geometry_type)
	}
}
