//! Recursive descent reader for curve WKT.
//!
//! Each geometry starts with a keyword, optionally followed by a dimension suffix (`Z`, `M`,
//! `ZM`, separate or glued to the keyword) and either `EMPTY` or a parenthesised body. Inside
//! `COMPOUNDCURVE` and `MULTICURVE`, a body without a keyword is a line string.
//!
//! Without a suffix, the first point of a curve fixes its dimensionality by its ordinate count.
//! Once a member of a composite has fixed it, all following members must agree.

use super::WktReadOptions;
use crate::{
	CircularStringGeometry, CompoundCurveGeometry, Coordinates, Curve, CurveSegment, Dimensions, Geometry,
	GeometryCollectionGeometry, GeometryError, GeometryFactory, GeometryTrait, GeometryType, LineStringGeometry,
	MultiCurveGeometry, PointGeometry,
};
use curvekit_core::{
	ParseError,
	byte_iterator::{
		ByteIterator, consume_byte_if, expect_byte, parse_keyword, parse_list_entries, parse_number_as_string, peek_is_keyword,
		peek_is_number,
	},
};
use log::trace;

/// Parses a WKT string with default options.
///
/// # Errors
/// [`GeometryError::Parse`] for malformed text, [`GeometryError::Topology`] for compound curves
/// whose segments do not connect.
///
/// # Example
/// ```
/// # use curvekit_geometry::{wkt::parse_wkt, GeometryTrait, GeometryType};
/// let geometry = parse_wkt("multicurve ((0 0,1 1),circularstring (1 1,2 2,3 1))").unwrap();
/// assert_eq!(geometry.type_tag(), GeometryType::MultiCurve);
/// assert_eq!(geometry.point_count(), 5);
/// ```
pub fn parse_wkt(text: &str) -> Result<Geometry, GeometryError> {
	parse_wkt_with(text, &WktReadOptions::default())
}

/// Parses a WKT string.
///
/// The whole text must be consumed: anything but whitespace after the geometry is an error.
pub fn parse_wkt_with(text: &str, options: &WktReadOptions) -> Result<Geometry, GeometryError> {
	let mut reader = WktReader::new(text, options);
	let geometry = reader.parse_geometry(None)?;
	reader.expect_end()?;
	Ok(geometry)
}

struct Header {
	geometry_type: GeometryType,
	dimensions: Option<Dimensions>,
	is_empty: bool,
}

struct WktReader<'a> {
	iter: ByteIterator<'a>,
	options: &'a WktReadOptions,
	depth: usize,
}

impl<'a> WktReader<'a> {
	fn new(text: &'a str, options: &'a WktReadOptions) -> Self {
		Self {
			iter: ByteIterator::from_text(text, options.debug),
			options,
			depth: 0,
		}
	}

	/// Parses a keyworded geometry. `inherited` are the dimensions fixed by the enclosing
	/// geometry, if any.
	fn parse_geometry(&mut self, inherited: Option<Dimensions>) -> Result<Geometry, GeometryError> {
		self.iter.skip_whitespace();
		let start = self.iter.position();
		let header = self.parse_header(inherited)?;

		self.depth += 1;
		if self.depth > self.options.max_depth {
			return Err(ParseError::new(
				start,
				format!("at most {} nested geometries", self.options.max_depth),
				format!("{} at depth {}", header.geometry_type, self.depth),
			)
			.into());
		}

		let mut geometry = GeometryFactory::create_by_type_tag(header.geometry_type)?;
		if !header.is_empty {
			let dims = header.dimensions;
			match &mut geometry {
				Geometry::Point(point) => *point = self.parse_point_body(dims)?,
				Geometry::LineString(line) => *line = self.parse_line_string_body(dims)?,
				Geometry::CircularString(arc) => *arc = self.parse_circular_string_body(dims)?,
				Geometry::CompoundCurve(compound) => *compound = self.parse_compound_curve_body(dims)?,
				Geometry::MultiCurve(multi) => *multi = self.parse_multi_curve_body(dims)?,
				Geometry::GeometryCollection(collection) => *collection = self.parse_collection_body(dims)?,
			}
		}
		self.depth -= 1;

		trace!(
			"parsed {} at position {start}: {} points",
			geometry.type_tag(),
			geometry.point_count()
		);
		Ok(geometry)
	}

	/// Reads `KEYWORD [Z|M|ZM] [EMPTY]`.
	fn parse_header(&mut self, inherited: Option<Dimensions>) -> Result<Header, GeometryError> {
		let start = self.iter.position();
		let word = parse_keyword(&mut self.iter)?;
		let (geometry_type, mut explicit) = split_keyword(&word)
			.ok_or_else(|| ParseError::new(start, "a geometry keyword", format!("{word:?}")))?;

		let mut next = self.parse_optional_keyword()?;
		if explicit.is_none()
			&& let Some((_, word)) = &next
			&& let Some(suffix) = Dimensions::from_wkt_suffix(word)
		{
			explicit = Some(suffix);
			next = self.parse_optional_keyword()?;
		}
		let is_empty = match next {
			None => false,
			Some((_, word)) if word == "EMPTY" => true,
			Some((position, word)) => {
				return Err(ParseError::new(position, "'(' or EMPTY", format!("{word:?}")).into());
			}
		};

		let dimensions = match (inherited, explicit) {
			(Some(outer), Some(own)) if outer != own => {
				return Err(ParseError::new(start, format!("a {outer:?} geometry"), format!("{own:?}")).into());
			}
			(outer, own) => own.or(outer),
		};

		Ok(Header {
			geometry_type,
			dimensions,
			is_empty,
		})
	}

	fn parse_optional_keyword(&mut self) -> Result<Option<(usize, String)>, ParseError> {
		if !peek_is_keyword(&mut self.iter) {
			return Ok(None);
		}
		let position = self.iter.position();
		Ok(Some((position, parse_keyword(&mut self.iter)?)))
	}

	fn parse_point_body(&mut self, dims: Option<Dimensions>) -> Result<PointGeometry, GeometryError> {
		let mut dims = dims;
		expect_byte(&mut self.iter, b'(')?;
		let point = parse_coordinates(&mut self.iter, &mut dims)?;
		expect_byte(&mut self.iter, b')')?;
		Ok(PointGeometry::new(point))
	}

	fn parse_point_list(&mut self, dims: Option<Dimensions>) -> Result<Vec<Coordinates>, ParseError> {
		let mut dims = dims;
		parse_list_entries(&mut self.iter, |iter| parse_coordinates(iter, &mut dims))
	}

	fn parse_line_string_body(&mut self, dims: Option<Dimensions>) -> Result<LineStringGeometry, GeometryError> {
		self.iter.skip_whitespace();
		let start = self.iter.position();
		let points = self.parse_point_list(dims)?;
		if points.len() < 2 {
			return Err(ParseError::new(start, "a LineString with at least 2 points", "1 point").into());
		}
		Ok(LineStringGeometry(points))
	}

	fn parse_circular_string_body(
		&mut self,
		dims: Option<Dimensions>,
	) -> Result<CircularStringGeometry, GeometryError> {
		self.iter.skip_whitespace();
		let start = self.iter.position();
		let points = self.parse_point_list(dims)?;
		if !CircularStringGeometry::is_valid_point_count(points.len()) {
			return Err(ParseError::new(
				start,
				"a CircularString with an odd number of at least 3 points",
				format!("{} points", points.len()),
			)
			.into());
		}
		Ok(CircularStringGeometry(points))
	}

	fn parse_compound_curve_body(
		&mut self,
		dims: Option<Dimensions>,
	) -> Result<CompoundCurveGeometry, GeometryError> {
		let mut compound = CompoundCurveGeometry::new();
		let mut dims = dims;
		self.parse_members(|reader| {
			reader.iter.skip_whitespace();
			let position = reader.iter.position();
			let segment = if reader.iter.peek() == Some(b'(') {
				CurveSegment::from(reader.parse_line_string_body(dims)?)
			} else {
				let geometry = reader.parse_geometry(dims)?;
				let found = geometry.type_tag();
				CurveSegment::try_from(geometry)
					.map_err(|_| ParseError::new(position, "a LineString or CircularString", found.to_string()))?
			};
			if segment.is_empty() {
				return Err(ParseError::new(position, "a non-empty segment", "EMPTY").into());
			}
			if dims.is_none() {
				dims = Some(segment.dimensions());
			}
			compound.curves_mut().add(segment)
		})?;
		Ok(compound)
	}

	fn parse_multi_curve_body(&mut self, dims: Option<Dimensions>) -> Result<MultiCurveGeometry, GeometryError> {
		let mut multi = MultiCurveGeometry::new();
		let mut dims = dims;
		self.parse_members(|reader| {
			reader.iter.skip_whitespace();
			let position = reader.iter.position();
			let curve = if reader.iter.peek() == Some(b'(') {
				Curve::from(reader.parse_line_string_body(dims)?)
			} else {
				let geometry = reader.parse_geometry(dims)?;
				let found = geometry.type_tag();
				Curve::try_from(geometry).map_err(|_| ParseError::new(position, "a curve", found.to_string()))?
			};
			if dims.is_none() && !curve.is_empty() {
				dims = Some(curve.dimensions());
			}
			multi.children_mut().add(curve)
		})?;
		Ok(multi)
	}

	fn parse_collection_body(
		&mut self,
		dims: Option<Dimensions>,
	) -> Result<GeometryCollectionGeometry, GeometryError> {
		let mut collection = GeometryCollectionGeometry::new();
		let mut dims = dims;
		self.parse_members(|reader| {
			let geometry = reader.parse_geometry(dims)?;
			if dims.is_none() && !geometry.is_empty() {
				dims = Some(geometry.dimensions());
			}
			collection.children_mut().add(geometry)
		})?;
		Ok(collection)
	}

	/// Parses `( member , member , ... )`, calling `parse_member` once per member.
	fn parse_members(
		&mut self,
		mut parse_member: impl FnMut(&mut Self) -> Result<(), GeometryError>,
	) -> Result<(), GeometryError> {
		expect_byte(&mut self.iter, b'(')?;
		loop {
			parse_member(self)?;
			if consume_byte_if(&mut self.iter, b')') {
				return Ok(());
			}
			if !consume_byte_if(&mut self.iter, b',') {
				return Err(self.iter.format_error("',' or ')'").into());
			}
		}
	}

	fn expect_end(&mut self) -> Result<(), ParseError> {
		self.iter.skip_whitespace();
		if self.iter.is_at_end() {
			Ok(())
		} else {
			Err(self.iter.format_error("end of input"))
		}
	}
}

/// Splits a keyword like `LINESTRINGZM` into its type and glued dimension suffix.
fn split_keyword(word: &str) -> Option<(GeometryType, Option<Dimensions>)> {
	if let Some(geometry_type) = GeometryType::from_wkt_keyword(word) {
		return Some((geometry_type, None));
	}
	["ZM", "Z", "M"].into_iter().find_map(|suffix| {
		let base = word.strip_suffix(suffix)?;
		let geometry_type = GeometryType::from_wkt_keyword(base)?;
		Some((geometry_type, Dimensions::from_wkt_suffix(suffix)))
	})
}

/// Parses the 2 to 4 ordinates of one point.
///
/// If `dims` is still open, the ordinate count of this point fixes it.
fn parse_coordinates(iter: &mut ByteIterator, dims: &mut Option<Dimensions>) -> Result<Coordinates, ParseError> {
	iter.skip_whitespace();
	let start = iter.position();
	let mut ordinates = Vec::with_capacity(4);
	ordinates.push(parse_ordinate(iter)?);
	ordinates.push(parse_ordinate(iter)?);
	while ordinates.len() < 4 && peek_is_number(iter) {
		ordinates.push(parse_ordinate(iter)?);
	}

	let expected = match *dims {
		Some(expected) => expected,
		None => {
			let sniffed = Dimensions::from_ordinate_count(ordinates.len()).unwrap_or_default();
			*dims = Some(sniffed);
			sniffed
		}
	};
	Coordinates::from_ordinates(&ordinates, expected).ok_or_else(|| {
		ParseError::new(
			start,
			format!("{} ordinates", expected.ordinate_count()),
			format!("{} ordinates", ordinates.len()),
		)
	})
}

/// Parses one ordinate. Literals that overflow to infinity are rejected.
fn parse_ordinate(iter: &mut ByteIterator) -> Result<f64, ParseError> {
	iter.skip_whitespace();
	let start = iter.position();
	let literal = parse_number_as_string(iter)?;
	match literal.parse::<f64>() {
		Ok(value) if value.is_finite() => Ok(value),
		_ => Err(ParseError::new(start, "a finite number", format!("{literal:?}"))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CurveTrait;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn parse_error(text: &str) -> ParseError {
		match parse_wkt(text) {
			Err(GeometryError::Parse(error)) => error,
			other => panic!("expected a parse error for {text:?}, got {other:?}"),
		}
	}

	#[test]
	fn compound_curve() {
		let geometry = parse_wkt("COMPOUNDCURVE (CIRCULARSTRING (0 0,1 1,2 0),(2 0,3 -1))").unwrap();
		let compound = geometry.as_compound_curve().unwrap();
		assert_eq!(compound.curves().count(), 2);
		assert!(compound.curves().get(0).unwrap().as_circular_string().is_some());
		assert!(compound.curves().get(1).unwrap().as_line_string().is_some());
		assert_eq!(compound.end_point(), Some(&Coordinates::new(3.0, -1.0)));
	}

	#[test]
	fn multi_curve_with_compound_child() {
		let geometry = parse_wkt(
			"MULTICURVE (COMPOUNDCURVE (CIRCULARSTRING (692012.37315768 594722.610031277,692057.127042054 594649.528941062,692067.186040178 594564.425636366),(692067.186040178 594564.425636366,692026.997800346 594412.637011561)))",
		)
		.unwrap();
		let multi = geometry.as_multi_curve().unwrap();
		assert_eq!(multi.children().count(), 1);
		let child = multi.children().get(0).unwrap();
		assert_eq!(child.type_tag(), GeometryType::CompoundCurve);
		assert_eq!(child.as_compound_curve().unwrap().curves().count(), 2);
	}

	#[rstest]
	#[case("point (1 2)", GeometryType::Point, Dimensions::Xy)]
	#[case("Point Z (1 2 3)", GeometryType::Point, Dimensions::Xyz)]
	#[case("POINTM(1 2 3)", GeometryType::Point, Dimensions::Xym)]
	#[case("POINT (1 2 3 4)", GeometryType::Point, Dimensions::Xyzm)]
	#[case("  LineString  ( 0 0 , 1 1 )  ", GeometryType::LineString, Dimensions::Xy)]
	#[case("LINESTRING (0 0 0,1 1 1)", GeometryType::LineString, Dimensions::Xyz)]
	#[case("LINESTRINGZM (0 0 0 0,1 1 1 1)", GeometryType::LineString, Dimensions::Xyzm)]
	#[case("CIRCULARSTRING ZM (0 0 0 0,1 1 1 1,2 0 0 0)", GeometryType::CircularString, Dimensions::Xyzm)]
	#[case("MULTICURVE Z ((0 0 1,1 1 1))", GeometryType::MultiCurve, Dimensions::Xyz)]
	#[case("GEOMETRYCOLLECTION (POINT (1 2),MULTICURVE EMPTY)", GeometryType::GeometryCollection, Dimensions::Xy)]
	fn keywords_and_dimensions(#[case] text: &str, #[case] geometry_type: GeometryType, #[case] dims: Dimensions) {
		let geometry = parse_wkt(text).unwrap();
		assert_eq!(geometry.type_tag(), geometry_type);
		assert_eq!(geometry.dimensions(), dims);
	}

	#[rstest]
	#[case("POINT EMPTY")]
	#[case("linestring empty")]
	#[case("CIRCULARSTRING Z EMPTY")]
	#[case("COMPOUNDCURVE EMPTY")]
	#[case("MULTICURVE EMPTY")]
	#[case("GEOMETRYCOLLECTION EMPTY")]
	fn empty(#[case] text: &str) {
		let geometry = parse_wkt(text).unwrap();
		assert!(geometry.is_empty());
		assert_eq!(geometry.point_count(), 0);
	}

	#[rstest]
	#[case("", 0, "a keyword", "end of input")]
	#[case("TRIANGLE (0 0,1 1,0 1,0 0)", 0, "a geometry keyword", "\"TRIANGLE\"")]
	#[case("POINT", 5, "'('", "end of input")]
	#[case("POINT FULL", 6, "'(' or EMPTY", "\"FULL\"")]
	#[case("POINT (1)", 8, "a number", "')'")]
	#[case("LINESTRING (0 0,1)", 17, "a number", "')'")]
	#[case("LINESTRING (0 0 1 2 3,1 1)", 20, "',' or ')'", "'3'")]
	#[case("LINESTRING (0 0)", 11, "a LineString with at least 2 points", "1 point")]
	#[case("LINESTRING (0 0,1 1 1)", 16, "2 ordinates", "3 ordinates")]
	#[case("LINESTRING Z (0 0,1 1)", 14, "3 ordinates", "2 ordinates")]
	#[case("CIRCULARSTRING (0 0,1 1)", 15, "a CircularString with an odd number of at least 3 points", "2 points")]
	#[case("CIRCULARSTRING (0 0,1 1,2 0,3 3)", 15, "a CircularString with an odd number of at least 3 points", "4 points")]
	#[case("COMPOUNDCURVE (POINT (1 2))", 15, "a LineString or CircularString", "Point")]
	#[case("COMPOUNDCURVE (LINESTRING EMPTY)", 15, "a non-empty segment", "EMPTY")]
	#[case("MULTICURVE (POINT (1 2))", 12, "a curve", "Point")]
	#[case("MULTICURVE ((0 0,1 1),(0 0 0,1 1 1))", 23, "2 ordinates", "3 ordinates")]
	#[case("MULTICURVE Z (LINESTRING M (0 0 0,1 1 1))", 14, "a Xyz geometry", "Xym")]
	#[case("GEOMETRYCOLLECTION ((0 0,1 1))", 20, "a keyword", "'('")]
	#[case("LINESTRING (1e999 0,1 1)", 12, "a finite number", "\"1e999\"")]
	#[case("POINT (1 -2e400)", 9, "a finite number", "\"-2e400\"")]
	#[case("POINT (1 2) x", 12, "end of input", "'x'")]
	#[case("MULTICURVE ((0 0,1 1) (2 2,3 3))", 22, "',' or ')'", "'('")]
	fn errors(#[case] text: &str, #[case] position: usize, #[case] expected: &str, #[case] found: &str) {
		let error = parse_error(text);
		assert_eq!(
			(error.position, error.expected.as_str(), error.found.as_str()),
			(position, expected, found),
			"{text}"
		);
	}

	#[test]
	fn compound_curve_gap_is_a_topology_error() {
		let error = parse_wkt("COMPOUNDCURVE ((0 0,1 1),(5 5,6 6))").unwrap_err();
		assert_eq!(
			error,
			GeometryError::Topology {
				index: 1,
				detail: "starts at (5 5) but the previous curve ends at (1 1)".to_string()
			}
		);
	}

	#[test]
	fn max_depth() {
		let text = "GEOMETRYCOLLECTION (GEOMETRYCOLLECTION (GEOMETRYCOLLECTION (POINT (1 2))))";
		assert!(parse_wkt(text).is_ok());

		let options = WktReadOptions {
			max_depth: 3,
			..WktReadOptions::default()
		};
		let error = parse_wkt_with(text, &options).unwrap_err();
		assert_eq!(
			error.to_string(),
			"invalid WKT: expected at most 3 nested geometries but found Point at depth 4 at position 60"
		);
	}

	#[test]
	fn debug_context() {
		let options = WktReadOptions {
			debug: true,
			..WktReadOptions::default()
		};
		let error = parse_wkt_with("LINESTRING (0 0,1 1;", &options).unwrap_err();
		assert_eq!(
			error.to_string(),
			"invalid WKT: expected ',' or ')' but found ';' at position 19, after: ESTRING (0 0,1 1"
		);
	}

	#[rstest]
	#[case("LINESTRING", Some((GeometryType::LineString, None)))]
	#[case("LINESTRINGZ", Some((GeometryType::LineString, Some(Dimensions::Xyz))))]
	#[case("POINTM", Some((GeometryType::Point, Some(Dimensions::Xym))))]
	#[case("MULTICURVEZM", Some((GeometryType::MultiCurve, Some(Dimensions::Xyzm))))]
	#[case("CURVE", None)]
	#[case("Z", None)]
	fn split_keywords(#[case] word: &str, #[case] expected: Option<(GeometryType, Option<Dimensions>)>) {
		assert_eq!(split_keyword(word), expected);
	}
}
