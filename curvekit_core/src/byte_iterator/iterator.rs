//! A byte-level scanner over in-memory text with optional debug support.
//!
//! The `ByteIterator` struct walks the bytes of a string slice. It supports peeking at the next
//! byte without consuming it, advancing, and consuming bytes one by one.
//! When debug mode is enabled, errors carry a snapshot of the most recently read bytes.

use crate::ParseError;

const DEBUG_SNAPSHOT_SIZE: usize = 16;

/// An iterator over the bytes of a string with support for peeking, consuming, and error reporting.
///
/// # Fields
///
/// * `text` - The complete source text.
/// * `position` - Byte offset of the next (peeked) byte.
/// * `is_debug_enabled` - Flag indicating if errors should include recently read bytes.
pub struct ByteIterator<'a> {
	text: &'a str,
	position: usize,
	is_debug_enabled: bool,
}

impl<'a> ByteIterator<'a> {
	/// Creates a new `ByteIterator` positioned at the first byte of `text`.
	///
	/// # Arguments
	///
	/// * `text` - The source text to scan.
	/// * `debug` - Enables debug snapshots in error messages.
	#[must_use]
	pub fn from_text(text: &'a str, debug: bool) -> Self {
		ByteIterator {
			text,
			position: 0,
			is_debug_enabled: debug,
		}
	}

	/// Builds a [`ParseError`] for the current position.
	///
	/// The `found` part describes the peeked character (or the end of input); in debug mode the
	/// error also carries up to 16 bytes read before the current position.
	#[must_use]
	pub fn format_error(&self, expected: &str) -> ParseError {
		let error = ParseError::new(self.position, expected, self.describe_peeked());
		if !self.is_debug_enabled {
			return error;
		}

		let start = self.position.saturating_sub(DEBUG_SNAPSHOT_SIZE);
		let snapshot = String::from_utf8_lossy(&self.text.as_bytes()[start..self.position]);
		let mut debug_output = snapshot.into_owned();
		if self.peek().is_none() {
			debug_output.push_str("<EOF>");
		}
		error.with_context(debug_output)
	}

	fn describe_peeked(&self) -> String {
		match self.text.get(self.position..).and_then(|rest| rest.chars().next()) {
			Some(c) => format!("{c:?}"),
			None => match self.peek() {
				Some(byte) => format!("byte 0x{byte:02x}"),
				None => "end of input".to_string(),
			},
		}
	}

	/// Returns the byte offset of the next byte.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Peeks at the next byte without consuming it.
	///
	/// Returns `None` at the end of the text.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.text.as_bytes().get(self.position).copied()
	}

	/// Advances past the current peeked byte. Does nothing at the end of the text.
	#[inline]
	pub fn advance(&mut self) {
		if self.position < self.text.len() {
			self.position += 1;
		}
	}

	/// Consumes and returns the current peeked byte, advancing the iterator.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let current_byte = self.peek();
		self.advance();
		current_byte
	}

	/// Expects and returns the next byte, advancing the iterator.
	///
	/// # Errors
	///
	/// Returns an error if the end of the text is reached.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8, ParseError> {
		match self.consume() {
			Some(byte) => Ok(byte),
			None => Err(self.format_error("more input")),
		}
	}

	/// Returns the current peeked byte without advancing.
	///
	/// # Errors
	///
	/// Returns an error if the end of the text is reached.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8, ParseError> {
		self.peek().ok_or_else(|| self.format_error("more input"))
	}

	/// Skips over any ASCII whitespace bytes.
	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Returns `true` once every byte has been consumed.
	#[must_use]
	pub fn is_at_end(&self) -> bool {
		self.position >= self.text.len()
	}

	/// Returns the not yet consumed remainder of the text.
	#[must_use]
	pub fn remaining(&self) -> &'a str {
		self.text.get(self.position..).unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_peek_and_consume() {
		let mut b = ByteIterator::from_text("123", false);

		assert_eq!(b.peek(), Some(b'1'));
		assert_eq!(b.consume(), Some(b'1'));
		assert_eq!(b.peek(), Some(b'2'));
		assert_eq!(b.consume(), Some(b'2'));
		assert_eq!(b.consume(), Some(b'3'));
		assert_eq!(b.peek(), None);
		assert_eq!(b.consume(), None);
		assert!(b.is_at_end());
	}

	#[test]
	fn test_expect_next_byte() {
		let mut b = ByteIterator::from_text("AB", false);

		assert_eq!(b.expect_next_byte().unwrap(), b'A');
		assert_eq!(b.expect_next_byte().unwrap(), b'B');
		let error = b.expect_next_byte().unwrap_err();
		assert_eq!(error.position, 2);
		assert_eq!(error.found, "end of input");
	}

	#[test]
	fn test_expect_peeked_byte() {
		let mut b = ByteIterator::from_text("XY", false);

		assert_eq!(b.expect_peeked_byte().unwrap(), b'X');
		b.consume();
		assert_eq!(b.expect_peeked_byte().unwrap(), b'Y');
		b.consume();
		assert!(b.expect_peeked_byte().is_err());
	}

	#[test]
	fn test_skip_whitespace() {
		let mut b = ByteIterator::from_text(" \t\nAB", false);

		b.skip_whitespace();
		assert_eq!(b.position(), 3);
		assert_eq!(b.consume(), Some(b'A'));
		assert_eq!(b.remaining(), "B");
	}

	#[test]
	fn test_error_without_debug() {
		let mut b = ByteIterator::from_text("Rust", false);
		b.consume();
		let error = b.format_error("'('");

		assert_eq!(error.position, 1);
		assert_eq!(error.found, "'u'");
		assert_eq!(error.context, None);
	}

	#[test]
	fn test_debug_snapshot() {
		let text = "a".repeat(DEBUG_SNAPSHOT_SIZE + 5);
		let mut b = ByteIterator::from_text(&text, true);
		while b.consume().is_some() {}

		let error = b.format_error("')'");
		let context = error.context.unwrap();
		assert_eq!(context, format!("{}<EOF>", "a".repeat(DEBUG_SNAPSHOT_SIZE)));
	}
}
