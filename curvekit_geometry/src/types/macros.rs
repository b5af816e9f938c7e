/// Implements `From<Vec<T>>`, `From<&Vec<T>>` and `From<&[T]>` for point sequence geometries.
#[macro_export]
macro_rules! impl_from_array {
	($($t:ty,$i:ty),*) => {$(
		impl<T> From<Vec<T>> for $t
		where
			$i: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self(value.into_iter().map(<$i>::from).collect())
			}
		}

		impl<'a, T> From<&'a Vec<T>> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a Vec<T>) -> Self {
				Self(value.iter().map(<$i>::from).collect())
			}
		}

		impl<'a, T> From<&'a [T]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T]) -> Self {
				Self(value.iter().map(<$i>::from).collect())
			}
		}
	)*}
}

/// Implements the geometry traits for an enum whose variants each wrap one geometry struct,
/// plus `From` conversions from the wrapped structs and into [`crate::Geometry`].
///
/// With the `curve` marker the enum also gets [`crate::CurveTrait`].
macro_rules! impl_geometry_enum {
	($enum:ident { $($variant:ident($inner:ty)),* $(,)? }) => {
		impl $crate::GeometryTrait for $enum {
			fn type_tag(&self) -> $crate::GeometryType {
				match self {
					$($enum::$variant(g) => $crate::GeometryTrait::type_tag(g),)*
				}
			}

			fn dimensions(&self) -> $crate::Dimensions {
				match self {
					$($enum::$variant(g) => $crate::GeometryTrait::dimensions(g),)*
				}
			}

			fn is_empty(&self) -> bool {
				match self {
					$($enum::$variant(g) => $crate::GeometryTrait::is_empty(g),)*
				}
			}

			fn point_count(&self) -> usize {
				match self {
					$($enum::$variant(g) => $crate::GeometryTrait::point_count(g),)*
				}
			}

			fn verify(&self) -> Result<(), $crate::GeometryError> {
				match self {
					$($enum::$variant(g) => $crate::GeometryTrait::verify(g),)*
				}
			}
		}

		impl $crate::wkt::WriteWkt for $enum {
			fn write_wkt(&self, writer: &mut $crate::wkt::WktWriter) {
				match self {
					$($enum::$variant(g) => $crate::wkt::WriteWkt::write_wkt(g, writer),)*
				}
			}
		}

		impl std::fmt::Debug for $enum {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				let (type_name, inner): (&str, &dyn std::fmt::Debug) = match self {
					$($enum::$variant(g) => (stringify!($variant), g),)*
				};
				f.debug_tuple(type_name).field(inner).finish()
			}
		}

		$(
			impl From<$inner> for $enum {
				fn from(value: $inner) -> Self {
					$enum::$variant(value)
				}
			}
		)*
	};
	(curve $enum:ident { $($variant:ident($inner:ty)),* $(,)? }) => {
		impl_geometry_enum!($enum { $($variant($inner)),* });

		impl $crate::CurveTrait for $enum {
			fn start_point(&self) -> Option<&$crate::Coordinates> {
				match self {
					$($enum::$variant(g) => $crate::CurveTrait::start_point(g),)*
				}
			}

			fn end_point(&self) -> Option<&$crate::Coordinates> {
				match self {
					$($enum::$variant(g) => $crate::CurveTrait::end_point(g),)*
				}
			}
		}

		impl From<$enum> for $crate::Geometry {
			fn from(value: $enum) -> Self {
				match value {
					$($enum::$variant(g) => $crate::Geometry::$variant(g),)*
				}
			}
		}

		impl TryFrom<$crate::Geometry> for $enum {
			type Error = $crate::GeometryError;

			fn try_from(value: $crate::Geometry) -> Result<Self, Self::Error> {
				match value {
					$($crate::Geometry::$variant(g) => Ok($enum::$variant(g)),)*
					other => Err($crate::GeometryError::UnsupportedType {
						geometry_type: $crate::GeometryTrait::type_tag(&other),
						reason: format!("not allowed as a member of {}", stringify!($enum)),
					}),
				}
			}
		}
	};
}

pub(crate) use impl_geometry_enum;
