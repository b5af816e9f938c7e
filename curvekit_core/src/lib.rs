//! Text scanning primitives shared by the curvekit crates.
//!
//! The [`byte_iterator`] module contains a peekable byte scanner with position tracking
//! and the small lexical helpers (keywords, numbers, punctuation) used by the WKT reader.

pub mod byte_iterator;
mod error;

pub use error::*;
