//! Object model for curve geometries with Well-Known-Text reading and writing.
//!
//! The model covers `Point`, `LineString`, `CircularString`, `CompoundCurve`, `MultiCurve` and
//! `GeometryCollection`. Parents exclusively own their children, so every geometry is a tree.
//!
//! ```
//! use curvekit_geometry::{Geometry, GeometryTrait, GeometryType};
//!
//! let geometry = Geometry::from_wkt("COMPOUNDCURVE (CIRCULARSTRING (0 0,1 1,2 0),(2 0,3 -1))").unwrap();
//! let compound = geometry.as_compound_curve().unwrap();
//! assert_eq!(compound.curves().count(), 2);
//! assert_eq!(compound.curves().get(0).unwrap().type_tag(), GeometryType::CircularString);
//! assert_eq!(geometry.to_wkt().unwrap(), "COMPOUNDCURVE (CIRCULARSTRING (0 0,1 1,2 0),(2 0,3 -1))");
//! ```

mod error;
mod factory;
mod geometry;
mod types;
pub mod wkt;

pub use error::*;
pub use factory::*;
pub use geometry::*;
pub use types::*;
