use thiserror::Error;

/// A lexical or grammatical error found while scanning text.
///
/// `position` is the byte offset of the token that did not match, `expected` names what the
/// scanner was looking for and `found` describes what was there instead. When the scanner runs
/// in debug mode, `context` holds the bytes read just before the failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {expected} but found {found} at position {position}{}", context_suffix(.context))]
pub struct ParseError {
	pub position: usize,
	pub expected: String,
	pub found: String,
	pub context: Option<String>,
}

impl ParseError {
	pub fn new(position: usize, expected: impl Into<String>, found: impl Into<String>) -> Self {
		Self {
			position,
			expected: expected.into(),
			found: found.into(),
			context: None,
		}
	}

	#[must_use]
	pub fn with_context(mut self, context: impl Into<String>) -> Self {
		self.context = Some(context.into());
		self
	}
}

fn context_suffix(context: &Option<String>) -> String {
	match context {
		Some(text) => format!(", after: {text}"),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_without_context() {
		let error = ParseError::new(7, "'('", "'x'");
		assert_eq!(error.to_string(), "expected '(' but found 'x' at position 7");
	}

	#[test]
	fn display_with_context() {
		let error = ParseError::new(12, "a number", "end of input").with_context("LINESTRING (1 <EOF>");
		assert_eq!(
			error.to_string(),
			"expected a number but found end of input at position 12, after: LINESTRING (1 <EOF>"
		);
	}
}
