//! Rope utilities producing [`Line`] snapshots.

use ropey::RopeSlice;

use crate::line::Line;

/// Returns the number of lines, including the empty line after a trailing newline.
#[inline]
pub fn line_count(text: RopeSlice) -> usize {
	text.len_lines()
}

/// Returns a snapshot of line `n` with its line ending stripped.
///
/// Returns `None` when `n` is past the last line.
pub fn line_snapshot(text: RopeSlice, n: usize) -> Option<Line> {
	let line = text.get_line(n)?;
	let mut content = line.to_string();
	while content.ends_with(['\n', '\r']) {
		content.pop();
	}
	Some(Line::new(n, content))
}
