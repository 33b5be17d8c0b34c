/// Which part of the view a jump search covers, relative to the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchDirection {
	/// From the cursor to the last visible line.
	#[default]
	Forward,
	/// From the first visible line up to the cursor.
	Backward,
	/// Every visible line.
	Entire,
}

impl SearchDirection {
	/// Picks a direction from where the cursor sits in the view.
	///
	/// A cursor at or above the middle visible line searches backward, a cursor
	/// below it searches forward. An inverted visible range is treated as a
	/// single line at `first`.
	pub fn toward_cursor(cursor_line: usize, first: usize, last: usize) -> Self {
		let last = last.max(first);
		let middle = first + (last - first + 1) / 2;
		if cursor_line <= middle {
			Self::Backward
		} else {
			Self::Forward
		}
	}
}
