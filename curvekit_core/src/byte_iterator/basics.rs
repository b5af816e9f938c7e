//! Small lexical helpers built on top of [`ByteIterator`](super::iterator::ByteIterator).
//!
//! These functions cover the token classes of Well-Known-Text:
//! - `parse_keyword` for case-insensitive ASCII words (`COMPOUNDCURVE`, `EMPTY`, `ZM`)
//! - `parse_number_as_string` and `parse_number_as<T>` for floating point literals
//! - `expect_byte` and `consume_byte_if` for punctuation
//! - `parse_list_entries` to iterate over a parenthesised, comma separated list
//!
//! All helpers skip leading whitespace and leave the iterator positioned directly after the
//! token they consumed.

use super::iterator::ByteIterator;
use crate::ParseError;
use std::str::FromStr;

/// Parse an ASCII keyword and return it in upper case.
///
/// # Errors
/// Returns an error if the next non-whitespace byte is not an ASCII letter.
///
/// # Example
/// ```
/// # use curvekit_core::byte_iterator::{ByteIterator, parse_keyword};
/// let mut it = ByteIterator::from_text("  CircularString (", false);
/// assert_eq!(parse_keyword(&mut it).unwrap(), "CIRCULARSTRING");
/// ```
pub fn parse_keyword(iter: &mut ByteIterator) -> Result<String, ParseError> {
	iter.skip_whitespace();
	let mut keyword = String::with_capacity(16);
	while let Some(byte) = iter.peek() {
		if !byte.is_ascii_alphabetic() {
			break;
		}
		keyword.push(char::from(byte.to_ascii_uppercase()));
		iter.advance();
	}
	if keyword.is_empty() {
		return Err(iter.format_error("a keyword"));
	}
	Ok(keyword)
}

/// Returns `true` when the next non-whitespace byte is an ASCII letter.
pub fn peek_is_keyword(iter: &mut ByteIterator) -> bool {
	iter.skip_whitespace();
	iter.peek().is_some_and(|byte| byte.is_ascii_alphabetic())
}

/// Expect `byte` as the next non-whitespace byte and consume it.
///
/// # Errors
/// Returns an error naming the expected byte if something else (or nothing) follows.
pub fn expect_byte(iter: &mut ByteIterator, byte: u8) -> Result<(), ParseError> {
	iter.skip_whitespace();
	if iter.peek() == Some(byte) {
		iter.advance();
		Ok(())
	} else {
		Err(iter.format_error(&format!("'{}'", char::from(byte))))
	}
}

/// Consume `byte` if it is the next non-whitespace byte. Returns whether it was consumed.
pub fn consume_byte_if(iter: &mut ByteIterator, byte: u8) -> bool {
	iter.skip_whitespace();
	if iter.peek() == Some(byte) {
		iter.advance();
		true
	} else {
		false
	}
}

/// Returns `true` when the next non-whitespace byte can start a number.
pub fn peek_is_number(iter: &mut ByteIterator) -> bool {
	iter.skip_whitespace();
	matches!(iter.peek(), Some(b'0'..=b'9' | b'+' | b'-' | b'.'))
}

/// Parse a floating point literal and return its textual representation.
///
/// Accepts an optional sign, digits with an optional fraction (either side of the dot may be
/// empty but not both), and an optional exponent (`e`/`E` with optional sign).
///
/// Leaves the iterator at the first non-number byte.
///
/// # Errors
/// Returns an error if required digits are missing.
///
/// # Example
/// ```
/// # use curvekit_core::byte_iterator::{ByteIterator, parse_number_as_string};
/// let mut it = ByteIterator::from_text(" -12.3e+4,", false);
/// assert_eq!(parse_number_as_string(&mut it).unwrap(), "-12.3e+4");
/// ```
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String, ParseError> {
	iter.skip_whitespace();
	let mut number = String::with_capacity(24);

	if let Some(sign @ (b'+' | b'-')) = iter.peek() {
		number.push(char::from(sign));
		iter.advance();
	}

	let mut has_digits = push_digits(iter, &mut number);

	if let Some(b'.') = iter.peek() {
		number.push('.');
		iter.advance();
		has_digits |= push_digits(iter, &mut number);
	}
	if !has_digits {
		return Err(iter.format_error("a number"));
	}

	if let Some(exponent @ (b'e' | b'E')) = iter.peek() {
		number.push(char::from(exponent));
		iter.advance();
		if let Some(sign @ (b'+' | b'-')) = iter.peek() {
			number.push(char::from(sign));
			iter.advance();
		}
		if !push_digits(iter, &mut number) {
			return Err(iter.format_error("digits after exponent"));
		}
	}

	Ok(number)
}

fn push_digits(iter: &mut ByteIterator, number: &mut String) -> bool {
	let mut found = false;
	while let Some(byte @ b'0'..=b'9') = iter.peek() {
		number.push(char::from(byte));
		iter.advance();
		found = true;
	}
	found
}

/// Parse a number and convert it to a concrete type `R`.
///
/// # Errors
/// Returns an error if number parsing fails or if `R::from_str` rejects the literal.
///
/// # Example
/// ```
/// # use curvekit_core::byte_iterator::{ByteIterator, parse_number_as};
/// let mut it = ByteIterator::from_text("692012.37315768", false);
/// let n: f64 = parse_number_as(&mut it).unwrap();
/// assert_eq!(n, 692012.37315768);
/// ```
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R, ParseError> {
	iter.skip_whitespace();
	let start = iter.position();
	let literal = parse_number_as_string(iter)?;
	literal
		.parse::<R>()
		.map_err(|_| ParseError::new(start, "a valid number", format!("{literal:?}")))
}

/// Iterate over a parenthesised, comma separated list, collecting the results of `parse_value`.
///
/// Expects `( item , item , ... )` with at least one item. Whitespace between tokens is ignored.
///
/// # Errors
/// Returns an error on a missing bracket or separator, or if `parse_value` returns an error.
///
/// # Example
/// ```
/// # use curvekit_core::byte_iterator::{ByteIterator, parse_list_entries, parse_number_as};
/// let mut it = ByteIterator::from_text("(1, 2,3)", false);
/// let nums: Vec<i32> = parse_list_entries(&mut it, parse_number_as).unwrap();
/// assert_eq!(nums, vec![1, 2, 3]);
/// ```
pub fn parse_list_entries<R, E>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R, E>,
) -> Result<Vec<R>, E>
where
	E: From<ParseError>,
{
	expect_byte(iter, b'(')?;

	let mut result = vec![parse_value(iter)?];
	loop {
		iter.skip_whitespace();
		match iter.peek() {
			Some(b',') => {
				iter.advance();
				result.push(parse_value(iter)?);
			}
			Some(b')') => {
				iter.advance();
				break;
			}
			_ => return Err(iter.format_error("',' or ')'").into()),
		}
	}

	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn get_reader(s: &str) -> ByteIterator<'_> {
		ByteIterator::from_text(s, false)
	}

	#[test]
	fn test_parse_keyword() {
		let mut iter = get_reader(" multiCurve(");
		assert_eq!(parse_keyword(&mut iter).unwrap(), "MULTICURVE");
		assert_eq!(iter.peek(), Some(b'('));

		let error = parse_keyword(&mut get_reader(" (1 2)")).unwrap_err();
		assert_eq!(error.position, 1);
		assert_eq!(error.expected, "a keyword");
	}

	#[test]
	fn test_expect_byte() {
		let mut iter = get_reader("  ( x");
		expect_byte(&mut iter, b'(').unwrap();
		let error = expect_byte(&mut iter, b')').unwrap_err();
		assert_eq!(error.expected, "')'");
		assert_eq!(error.found, "'x'");
		assert_eq!(error.position, 4);
	}

	#[test]
	fn test_consume_byte_if() {
		let mut iter = get_reader(" , )");
		assert!(!consume_byte_if(&mut iter, b')'));
		assert!(consume_byte_if(&mut iter, b','));
		assert!(consume_byte_if(&mut iter, b')'));
		assert!(iter.is_at_end());
	}

	#[rstest]
	#[case("123", "123")]
	#[case("-123", "-123")]
	#[case("+4", "+4")]
	#[case("0.456", "0.456")]
	#[case(".5", ".5")]
	#[case("5.", "5.")]
	#[case("3e4", "3e4")]
	#[case("-123.45E+6", "-123.45E+6")]
	#[case("123.45 abc", "123.45")]
	#[case("594722.610031277,", "594722.610031277")]
	fn test_parse_number_as_string(#[case] text: &str, #[case] expected: &str) {
		assert_eq!(parse_number_as_string(&mut get_reader(text)).unwrap(), expected);
	}

	#[rstest]
	#[case("-")]
	#[case(".")]
	#[case("e12")]
	#[case("1e")]
	#[case("1e+")]
	#[case("")]
	fn test_parse_number_errors(#[case] text: &str) {
		assert!(parse_number_as_string(&mut get_reader(text)).is_err());
	}

	#[test]
	fn test_parse_number_as() {
		assert_eq!(parse_number_as::<f64>(&mut get_reader("-0.123E3")).unwrap(), -123.0);
		assert_eq!(parse_number_as::<f64>(&mut get_reader("2e-10")).unwrap(), 2e-10);
		assert!(parse_number_as::<i32>(&mut get_reader("12.5")).is_err());
	}

	#[test]
	fn test_parse_list_entries() {
		let mut iter = get_reader("( 1 ,2 , 3 ) rest");
		let result: Vec<f64> = parse_list_entries(&mut iter, parse_number_as).unwrap();
		assert_eq!(result, vec![1.0, 2.0, 3.0]);
		assert_eq!(iter.remaining(), " rest");
	}

	#[test]
	fn test_parse_list_entries_errors() {
		fn parse(text: &str) -> Result<Vec<f64>, ParseError> {
			parse_list_entries(&mut get_reader(text), parse_number_as)
		}
		assert!(parse("()").is_err());
		assert!(parse("(1 2)").is_err());
		assert!(parse("(1,2").is_err());
		assert!(parse("1,2)").is_err());
	}
}
