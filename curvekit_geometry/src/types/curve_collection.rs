use super::{Coordinates, Dimensions, GeometryTrait, GeometryType};
use crate::{Geometry, GeometryError};
use log::debug;
use std::fmt::Debug;

/// How the elements of a [`CurveCollection`] relate to each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Linkage {
	/// Each element must start where the previous one ends (compound curves).
	Contiguous,
	/// Elements are independent of each other (multi curves, geometry collections).
	Independent,
}

/// A geometry that can be stored in a [`CurveCollection`].
pub trait CollectionMember: GeometryTrait + Into<Geometry> {
	/// The type every member descends from.
	const MEMBER_TYPE: GeometryType;

	/// Narrows a generic geometry to the member type.
	///
	/// # Errors
	/// [`GeometryError::UnsupportedType`] if the geometry is not a `MEMBER_TYPE`.
	fn from_geometry(geometry: Geometry) -> Result<Self, GeometryError>;

	/// First and last point, `None` for members without endpoints (empty or non-curve members).
	fn endpoints(&self) -> Option<(&Coordinates, &Coordinates)>;
}

/// An ordered container that exclusively owns its elements.
///
/// Compound curves keep their segments in a contiguous collection, multi curves and geometry
/// collections keep their children in independent ones. All mutations either succeed
/// completely or leave the collection unchanged.
#[derive(Clone, PartialEq)]
pub struct CurveCollection<T> {
	items: Vec<T>,
	linkage: Linkage,
}

impl<T: CollectionMember> CurveCollection<T> {
	#[must_use]
	pub fn new(linkage: Linkage) -> Self {
		Self {
			items: Vec::new(),
			linkage,
		}
	}

	#[must_use]
	pub fn linkage(&self) -> Linkage {
		self.linkage
	}

	#[must_use]
	pub fn count(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns the element at `index`.
	///
	/// # Errors
	/// [`GeometryError::IndexOutOfRange`] if `index >= count()`.
	pub fn get(&self, index: usize) -> Result<&T, GeometryError> {
		self.items.get(index).ok_or(GeometryError::IndexOutOfRange {
			index,
			count: self.items.len(),
		})
	}

	#[must_use]
	pub fn first(&self) -> Option<&T> {
		self.items.first()
	}

	#[must_use]
	pub fn last(&self) -> Option<&T> {
		self.items.last()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.items.iter()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[T] {
		&self.items
	}

	/// Appends `item`, taking ownership of it.
	///
	/// # Errors
	/// [`GeometryError::Topology`] if the collection is contiguous and `item` does not start
	/// where the last non-empty element ends. The collection is unchanged in that case.
	pub fn add(&mut self, item: T) -> Result<(), GeometryError> {
		if self.linkage == Linkage::Contiguous
			&& let Some(previous_end) = self.last_end_point()
			&& let Some((start, _)) = item.endpoints()
			&& !previous_end.same_position(start)
		{
			let index = self.items.len();
			debug!("rejecting curve {index}: starts at ({start}), previous curve ends at ({previous_end})");
			return Err(GeometryError::Topology {
				index,
				detail: format!("starts at ({start}) but the previous curve ends at ({previous_end})"),
			});
		}
		self.items.push(item);
		Ok(())
	}

	/// Converts `geometry` into the member type and appends it.
	///
	/// # Errors
	/// [`GeometryError::UnsupportedType`] if the geometry cannot be a member of this collection,
	/// otherwise the errors of [`CurveCollection::add`].
	pub fn add_geometry(&mut self, geometry: Geometry) -> Result<(), GeometryError> {
		self.add(T::from_geometry(geometry)?)
	}

	/// Removes and returns the element at `index`.
	///
	/// # Errors
	/// [`GeometryError::IndexOutOfRange`] for an invalid index. In a contiguous collection only
	/// the first or last element can be removed, anything else fails with
	/// [`GeometryError::Topology`].
	pub fn remove(&mut self, index: usize) -> Result<T, GeometryError> {
		let count = self.items.len();
		if index >= count {
			return Err(GeometryError::IndexOutOfRange { index, count });
		}
		if self.linkage == Linkage::Contiguous && index != 0 && index + 1 != count {
			return Err(GeometryError::Topology {
				index,
				detail: "removing an inner curve would leave a gap".to_string(),
			});
		}
		Ok(self.items.remove(index))
	}

	pub fn clear(&mut self) {
		self.items.clear();
	}

	#[must_use]
	pub fn into_inner(self) -> Vec<T> {
		self.items
	}

	/// Dimensions of the first non-empty element, [`Dimensions::Xy`] if there is none.
	#[must_use]
	pub fn dimensions(&self) -> Dimensions {
		self
			.items
			.iter()
			.find(|item| !item.is_empty())
			.map_or(Dimensions::Xy, GeometryTrait::dimensions)
	}

	#[must_use]
	pub fn point_count(&self) -> usize {
		self.items.iter().map(GeometryTrait::point_count).sum()
	}

	/// Verifies every element and checks that all non-empty elements share the same dimensions.
	pub fn verify_members(&self, owner: GeometryType) -> Result<(), GeometryError> {
		let dims = self.dimensions();
		for (index, item) in self.items.iter().enumerate() {
			item.verify()?;
			if !item.is_empty() && item.dimensions() != dims {
				return Err(GeometryError::serialization(format!(
					"{owner} mixes dimensions: expected {dims:?}, member {index} is {:?}",
					item.dimensions()
				)));
			}
		}
		Ok(())
	}

	fn last_end_point(&self) -> Option<&Coordinates> {
		self.items.iter().rev().find_map(|item| item.endpoints().map(|(_, end)| end))
	}
}

impl<'a, T> IntoIterator for &'a CurveCollection<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl<T: Debug> Debug for CurveCollection<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.items).finish()
	}
}

/// Type-erased, read-only access to the members of a collection geometry.
///
/// Lets callers treat a `MultiCurve` as a `GeometryCollection` without knowing its member type.
pub trait CollectionView {
	/// The type every member must descend from.
	fn member_type(&self) -> GeometryType;

	fn count(&self) -> usize;

	/// Returns a copy of the member at `index` as a generic [`Geometry`].
	fn get_geometry(&self, index: usize) -> Result<Geometry, GeometryError>;
}

impl<T: CollectionMember> CollectionView for CurveCollection<T> {
	fn member_type(&self) -> GeometryType {
		T::MEMBER_TYPE
	}

	fn count(&self) -> usize {
		self.items.len()
	}

	fn get_geometry(&self, index: usize) -> Result<Geometry, GeometryError> {
		self.get(index).map(|item| item.clone().into())
	}
}
