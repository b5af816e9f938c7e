use super::{Coordinates, Dimensions, GeometryType};
use crate::{
	GeometryError,
	wkt::{WktWriteOptions, WktWriter, WriteWkt},
};
use std::fmt::Debug;

/// The capabilities shared by every geometry variant.
pub trait GeometryTrait: Debug + Clone + WriteWkt {
	/// The immutable type tag of this geometry.
	fn type_tag(&self) -> GeometryType;

	/// Coordinate dimensions. Empty geometries report [`Dimensions::Xy`].
	fn dimensions(&self) -> Dimensions;

	fn is_empty(&self) -> bool;

	/// Number of points in this geometry and all of its children.
	fn point_count(&self) -> usize;

	/// Verifies that the geometry can be written as WKT.
	///
	/// Checks point counts, finite ordinates and consistent dimensions for this geometry and
	/// its whole subtree. Returns the error `to_wkt` would return.
	fn verify(&self) -> Result<(), GeometryError>;

	/// Capability query along the type hierarchy, e.g. a `MultiCurve` is a `GeometryCollection`.
	fn is_a(&self, geometry_type: GeometryType) -> bool {
		self.type_tag().is_a(geometry_type)
	}

	/// Writes canonical WKT with default options.
	fn to_wkt(&self) -> Result<String, GeometryError> {
		self.to_wkt_with(&WktWriteOptions::default())
	}

	fn to_wkt_with(&self, options: &WktWriteOptions) -> Result<String, GeometryError> {
		self.verify()?;
		let mut writer = WktWriter::new(options);
		self.write_wkt(&mut writer);
		Ok(writer.into_string())
	}
}

/// One-dimensional geometries with a start and an end.
pub trait CurveTrait: GeometryTrait {
	/// First point, `None` when empty.
	fn start_point(&self) -> Option<&Coordinates>;

	/// Last point, `None` when empty.
	fn end_point(&self) -> Option<&Coordinates>;

	/// A curve is closed when it is not empty and starts where it ends.
	fn is_closed(&self) -> bool {
		match (self.start_point(), self.end_point()) {
			(Some(start), Some(end)) => start.same_position(end),
			_ => false,
		}
	}
}
