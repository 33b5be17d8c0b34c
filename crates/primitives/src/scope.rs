use std::ops::Range;

use crate::direction::SearchDirection;
use crate::position::Position;


/// Line range scanned by a jump search, with optional partial first and last lines.
///
/// `start_line..=end_line` is inclusive. `start_char` bounds where scanning
/// begins on the first line; `end_char` bounds (exclusively) where anchors may
/// start on the last line. Lines in between are scanned whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scope {
	/// First scanned line.
	pub start_line: usize,
	/// Last scanned line (inclusive).
	pub end_line: usize,
	/// First scanned offset on `start_line`.
	pub start_char: Option<usize>,
	/// Exclusive offset limit on `end_line`.
	pub end_char: Option<usize>,
}

impl Scope {
	/// Scope covering whole lines `start_line..=end_line`.
	pub const fn lines(start_line: usize, end_line: usize) -> Self {
		Self {
			start_line,
			end_line,
			start_char: None,
			end_char: None,
		}
	}

	/// Sets the first scanned offset on the first line.
	pub const fn with_start_char(mut self, start_char: usize) -> Self {
		self.start_char = Some(start_char);
		self
	}

	/// Sets the exclusive offset limit on the last line.
	pub const fn with_end_char(mut self, end_char: usize) -> Self {
		self.end_char = Some(end_char);
		self
	}

	/// Resolves the scope for `direction` given the cursor and the visible line range.
	///
	/// * [`SearchDirection::Forward`]: cursor position to the last visible line.
	/// * [`SearchDirection::Backward`]: first visible line up to (excluding) the cursor.
	/// * [`SearchDirection::Entire`]: all visible lines.
	///
	/// Lines are clamped to `line_count`; the cursor line is clamped into the
	/// visible range. Returns `None` for an empty buffer.
	pub fn for_direction(
		direction: SearchDirection,
		cursor: Position,
		visible: (usize, usize),
		line_count: usize,
	) -> Option<Self> {
		let last_line = line_count.checked_sub(1)?;
		let first = visible.0.min(last_line);
		let last = visible.1.clamp(first, last_line);
		let cursor_line = cursor.line.clamp(first, last);
		let cursor_char = if cursor_line == cursor.line { cursor.character } else { 0 };

		Some(match direction {
			SearchDirection::Forward => Self::lines(cursor_line, last).with_start_char(cursor_char),
			SearchDirection::Backward => Self::lines(first, cursor_line).with_end_char(cursor_char),
			SearchDirection::Entire => Self::lines(first, last),
		})
	}

	/// Iterates the scanned line numbers in ascending order.
	pub fn line_numbers(&self) -> impl Iterator<Item = usize> + use<> {
		self.start_line..=self.end_line
	}

	/// Returns true if `line` falls within the scope.
	pub fn contains_line(&self, line: usize) -> bool {
		(self.start_line..=self.end_line).contains(&line)
	}

	/// Offsets to scan on `line`, given its length in characters.
	///
	/// A whole line yields `0..len + 1`: offset `len` is the end-of-line
	/// position. Returns an empty range for lines outside the scope.
	pub fn offsets(&self, line: usize, char_len: usize) -> Range<usize> {
		if !self.contains_line(line) {
			return 0..0;
		}
		let full = char_len + 1;
		let start = match self.start_char {
			Some(c) if line == self.start_line => c.min(full),
			_ => 0,
		};
		let end = match self.end_char {
			Some(c) if line == self.end_line => c.min(full),
			_ => full,
		};
		start..end.max(start)
	}
}
