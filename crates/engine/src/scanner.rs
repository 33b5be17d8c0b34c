//! Anchor scanning over line snapshots.
//!
//! The anchor is the first one or two characters of the query. Every offset
//! where the anchor occurs becomes a candidate; the remaining query
//! characters are label digits and are only consulted by
//! [`resolve`](crate::resolver::resolve).

use leap_primitives::{Line, MatchRange, Position, Scope};
use smallvec::SmallVec;


/// Number of query characters matched against the text.
pub const ANCHOR_LEN: usize = 2;

/// An anchor occurrence, numbered in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMatch {
	/// Matched range. Zero-width for a double-space anchor.
	pub range: MatchRange,
	/// Position in scan order: line order, then character order.
	pub ordinal: usize,
}

/// Folds `c` for comparison. Case-insensitive folding maps each character to
/// the first character of its lowercase form so offsets stay aligned.
#[inline]
pub(crate) fn fold_case(c: char, match_case: bool) -> char {
	if match_case {
		c
	} else {
		c.to_lowercase().next().unwrap_or(c)
	}
}

/// Finds anchor occurrences in line snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchScanner {
	/// Restricts double-space anchors to line ends.
	pub white_spaces_only_match_new_line: bool,
}

impl MatchScanner {
	/// Creates a scanner with the given whitespace policy.
	pub const fn new(white_spaces_only_match_new_line: bool) -> Self {
		Self {
			white_spaces_only_match_new_line,
		}
	}

	/// Scans whole lines.
	pub fn scan(&self, lines: &[Line], search: &str, match_case: bool) -> Vec<CandidateMatch> {
		self.scan_with(lines, search, match_case, |_, len| 0..len + 1)
	}

	/// Scans the lines that fall inside `scope`, honoring its partial first
	/// and last line bounds. Lines outside the scope are skipped.
	pub fn scan_scope(
		&self,
		lines: &[Line],
		scope: &Scope,
		search: &str,
		match_case: bool,
	) -> Vec<CandidateMatch> {
		self.scan_with(lines, search, match_case, |line, len| scope.offsets(line, len))
	}

	fn scan_with(
		&self,
		lines: &[Line],
		search: &str,
		match_case: bool,
		offsets: impl Fn(usize, usize) -> std::ops::Range<usize>,
	) -> Vec<CandidateMatch> {
		let search_len = search.chars().count();
		if search_len == 0 {
			return Vec::new();
		}

		let anchor: SmallVec<[char; ANCHOR_LEN]> = search
			.chars()
			.take(ANCHOR_LEN)
			.map(|c| fold_case(c, match_case))
			.collect();
		let whitespace_anchor = anchor.as_slice() == [' ', ' '];

		let mut out = Vec::new();
		let mut text: Vec<char> = Vec::new();
		for line in lines {
			text.clear();
			text.extend(line.text().chars().map(|c| fold_case(c, match_case)));
			let len = text.len();
			// Two trailing spaces let a double-space anchor match the line end.
			text.extend([' ', ' ']);

			for offset in offsets(line.line_number, len) {
				if offset > len || text[offset..offset + anchor.len()] != anchor[..] {
					continue;
				}

				let start = Position::new(line.line_number, offset);
				let range = if whitespace_anchor {
					let run_start = offset == 0 || text[offset - 1] != ' ';
					let line_end = offset == len;
					if !(line_end || (run_start && !self.white_spaces_only_match_new_line)) {
						continue;
					}
					MatchRange::point(start)
				} else {
					MatchRange::spanning(start, search_len)
				};

				out.push(CandidateMatch {
					range,
					ordinal: out.len(),
				});
			}
		}

		tracing::trace!(
			lines = lines.len(),
			anchor = %anchor.iter().collect::<String>(),
			match_case,
			candidates = out.len(),
			"Scanned anchor"
		);
		out
	}
}
