//! Byte-level scanning of in-memory text.
//! It re-exports the `basics` and `iterator` modules for use by the WKT reader.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
