use std::sync::Arc;

/// Immutable snapshot of one buffer line, without its line ending.
///
/// Cloning is cheap; the text is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
	/// Zero-based line number in the source buffer.
	pub line_number: usize,
	text: Arc<str>,
}

impl Line {
	/// Creates a snapshot of `text` at `line_number`.
	pub fn new(line_number: usize, text: impl Into<Arc<str>>) -> Self {
		Self {
			line_number,
			text: text.into(),
		}
	}

	/// Returns the line text.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Returns the length of the line in characters.
	pub fn char_len(&self) -> usize {
		self.text.chars().count()
	}
}
