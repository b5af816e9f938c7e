use super::WktWriteOptions;
use crate::{Coordinates, Dimensions, GeometryType};
use itertools::Itertools;

/// Writes a geometry into a [`WktWriter`].
///
/// Writing never fails: callers run [`GeometryTrait::verify`](crate::GeometryTrait::verify)
/// first, which rejects everything that has no valid WKT form.
pub trait WriteWkt {
	fn write_wkt(&self, writer: &mut WktWriter);
}

/// Accumulates canonical WKT text.
///
/// The output uses a single space between keyword, dimension suffix and body, a single space
/// between ordinates and a bare `,` between list items.
pub struct WktWriter<'o> {
	output: String,
	options: &'o WktWriteOptions,
}

impl<'o> WktWriter<'o> {
	#[must_use]
	pub fn new(options: &'o WktWriteOptions) -> Self {
		Self {
			output: String::with_capacity(64),
			options,
		}
	}

	#[must_use]
	pub fn into_string(self) -> String {
		self.output
	}

	/// Writes `KEYWORD[ SUFFIX] EMPTY` or `KEYWORD[ SUFFIX] ` followed by whatever `body` writes.
	pub fn write_tagged(
		&mut self,
		geometry_type: GeometryType,
		dimensions: Dimensions,
		is_empty: bool,
		body: impl FnOnce(&mut Self),
	) {
		if let Some(keyword) = geometry_type.wkt_keyword() {
			self.output.push_str(keyword);
		}
		let suffix = dimensions.wkt_suffix();
		if !suffix.is_empty() {
			self.output.push(' ');
			self.output.push_str(suffix);
		}
		if is_empty {
			self.output.push_str(" EMPTY");
		} else {
			self.output.push(' ');
			body(self);
		}
	}

	/// Writes `(x y,x y,...)`.
	pub fn write_point_list(&mut self, points: &[Coordinates]) {
		self.write_members(points, |w, point| w.write_coordinates(point));
	}

	/// Writes the ordinates of one point separated by spaces.
	pub fn write_coordinates(&mut self, point: &Coordinates) {
		let text = point.ordinates().into_iter().map(|value| self.format_number(value)).join(" ");
		self.output.push_str(&text);
	}

	pub fn write_number(&mut self, value: f64) {
		let text = self.format_number(value);
		self.output.push_str(&text);
	}

	/// Writes `(` + each item + `)`, with `,` between items.
	pub fn write_members<I: IntoIterator>(&mut self, items: I, mut write_item: impl FnMut(&mut Self, I::Item)) {
		self.output.push('(');
		for (index, item) in items.into_iter().enumerate() {
			if index > 0 {
				self.output.push(',');
			}
			write_item(self, item);
		}
		self.output.push(')');
	}

	fn format_number(&self, value: f64) -> String {
		let mut value = value;
		if let Some(precision) = self.options.precision {
			let factor = 10f64.powi(i32::from(precision));
			let rounded = (value * factor).round() / factor;
			if rounded.is_finite() {
				value = rounded;
			}
		}
		// adding zero turns -0 into 0
		format!("{}", value + 0.0)
	}
}
