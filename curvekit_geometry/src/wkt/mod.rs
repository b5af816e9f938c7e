//! Well-Known-Text reading and writing.
//!
//! [`parse_wkt`] turns text into a [`Geometry`](crate::Geometry) tree, [`WktWriter`] produces
//! the canonical text form used by [`GeometryTrait::to_wkt`](crate::GeometryTrait::to_wkt).

mod options;
mod read;
mod write;

pub use options::*;
pub use read::*;
pub use write::*;
