/// Position in line/character coordinates.
///
/// `character` counts Unicode scalar values within the line, the same unit
/// [`Line::char_len`](crate::Line::char_len) uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
	/// Zero-based line index.
	pub line: usize,
	/// Zero-based character offset in the line.
	pub character: usize,
}

impl Position {
	/// Creates a new position.
	pub const fn new(line: usize, character: usize) -> Self {
		Self { line, character }
	}

	/// Returns the position `n` characters to the right on the same line.
	pub const fn shifted(self, n: usize) -> Self {
		Self {
			line: self.line,
			character: self.character + n,
		}
	}
}

/// Half-open range between two positions on the same line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRange {
	/// Start position (inclusive).
	pub start: Position,
	/// End position (exclusive).
	pub end: Position,
}

impl MatchRange {
	/// Creates a new range.
	pub const fn new(start: Position, end: Position) -> Self {
		Self { start, end }
	}

	/// Creates a zero-width range at a position.
	pub const fn point(pos: Position) -> Self {
		Self {
			start: pos,
			end: pos,
		}
	}

	/// Creates a range of `len` characters starting at `start`.
	pub const fn spanning(start: Position, len: usize) -> Self {
		Self {
			start,
			end: start.shifted(len),
		}
	}

	/// Returns true for zero-width ranges.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Returns the width of the range in characters.
	///
	/// Ranges never span lines, so this is the character distance on the start line.
	#[inline]
	pub fn len(&self) -> usize {
		self.end.character.saturating_sub(self.start.character)
	}
}
