// The geometry object model: type tags, coordinates, the leaf curves (`LineStringGeometry`,
// `CircularStringGeometry`), the composites (`CompoundCurveGeometry`, `MultiCurveGeometry`,
// `GeometryCollectionGeometry`) and the `CurveCollection` container they share.
// Every type implements `GeometryTrait`, curves additionally implement `CurveTrait`.

mod circularstring;
mod compound_curve;
mod coordinates;
mod curve_collection;
mod geometry_collection;
mod geometry_type;
mod linestring;
mod macros;
mod multi_curve;
mod point;
mod traits;

pub use circularstring::*;
pub use compound_curve::*;
pub use coordinates::*;
pub use curve_collection::*;
pub use geometry_collection::*;
pub use geometry_type::*;
pub use linestring::*;
pub use multi_curve::*;
pub use point::*;
pub use traits::*;

pub(crate) use macros::impl_geometry_enum;
