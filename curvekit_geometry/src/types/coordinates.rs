use super::{Dimensions, GeometryType};
use crate::GeometryError;
use std::fmt::{self, Debug, Display};

/// A position with optional elevation (`z`) and measure (`m`).
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
	x: f64,
	y: f64,
	z: Option<f64>,
	m: Option<f64>,
}

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y, z: None, m: None }
	}

	#[must_use]
	pub fn new_z(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z: Some(z), m: None }
	}

	#[must_use]
	pub fn new_m(x: f64, y: f64, m: f64) -> Self {
		Self { x, y, z: None, m: Some(m) }
	}

	#[must_use]
	pub fn new_zm(x: f64, y: f64, z: f64, m: f64) -> Self {
		Self {
			x,
			y,
			z: Some(z),
			m: Some(m),
		}
	}

	/// Builds coordinates from ordinates laid out as `dims` prescribes.
	///
	/// Returns `None` if the slice length does not match `dims.ordinate_count()`.
	#[must_use]
	pub fn from_ordinates(ordinates: &[f64], dims: Dimensions) -> Option<Self> {
		match (dims, ordinates) {
			(Dimensions::Xy, &[x, y]) => Some(Self::new(x, y)),
			(Dimensions::Xyz, &[x, y, z]) => Some(Self::new_z(x, y, z)),
			(Dimensions::Xym, &[x, y, m]) => Some(Self::new_m(x, y, m)),
			(Dimensions::Xyzm, &[x, y, z, m]) => Some(Self::new_zm(x, y, z, m)),
			_ => None,
		}
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.x
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.y
	}

	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.z
	}

	#[must_use]
	pub fn m(&self) -> Option<f64> {
		self.m
	}

	#[must_use]
	pub fn dimensions(&self) -> Dimensions {
		Dimensions::new(self.z.is_some(), self.m.is_some())
	}

	/// All ordinates in WKT order: x, y, then z and m where present.
	#[must_use]
	pub fn ordinates(&self) -> Vec<f64> {
		[Some(self.x), Some(self.y), self.z, self.m].into_iter().flatten().collect()
	}

	/// Whether both coordinates describe the same position.
	///
	/// Compares x and y exactly, and z when both sides carry one. The measure is ignored.
	#[must_use]
	pub fn same_position(&self, other: &Coordinates) -> bool {
		if self.x != other.x || self.y != other.y {
			return false;
		}
		match (self.z, other.z) {
			(Some(a), Some(b)) => a == b,
			_ => true,
		}
	}

	#[must_use]
	pub fn is_finite(&self) -> bool {
		self.ordinates().iter().all(|v| v.is_finite())
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates::new(value[0], value[1])
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates::new(value[0].into(), value[1].into())
	}
}

impl From<[f64; 3]> for Coordinates {
	fn from(value: [f64; 3]) -> Self {
		Coordinates::new_z(value[0], value[1], value[2])
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<&(f64, f64)> for Coordinates {
	fn from(value: &(f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<geo_types::Coord> for Coordinates {
	fn from(value: geo_types::Coord) -> Self {
		Coordinates::new(value.x, value.y)
	}
}

impl From<geo_types::Point> for Coordinates {
	fn from(value: geo_types::Point) -> Self {
		Coordinates::from(value.0)
	}
}

/// Lossy: `geo_types::Coord` is planar, so `z` and `m` are dropped.
impl From<Coordinates> for geo_types::Coord {
	fn from(value: Coordinates) -> Self {
		geo_types::Coord { x: value.x, y: value.y }
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.ordinates().fmt(f)
	}
}

impl Display for Coordinates {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, value) in self.ordinates().iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{value}")?;
		}
		Ok(())
	}
}

/// Checks that every point is finite and carries the same dimensions as the first one.
pub(crate) fn verify_coordinates(owner: GeometryType, points: &[Coordinates]) -> Result<(), GeometryError> {
	let Some(first) = points.first() else {
		return Ok(());
	};
	let dims = first.dimensions();
	for (index, point) in points.iter().enumerate() {
		if !point.is_finite() {
			return Err(GeometryError::serialization(format!(
				"{owner} point {index} has a non-finite ordinate ({point})"
			)));
		}
		if point.dimensions() != dims {
			return Err(GeometryError::serialization(format!(
				"{owner} mixes dimensions: point 0 is {dims:?}, point {index} is {:?}",
				point.dimensions()
			)));
		}
	}
	Ok(())
}
