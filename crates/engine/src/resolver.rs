//! Label filtering of anchor candidates.

use leap_primitives::MatchRange;

use crate::alphabet::LabelAlphabet;
use crate::scanner::{ANCHOR_LEN, CandidateMatch, fold_case};


/// A candidate that survived label filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMatch {
	/// Matched range.
	pub range: MatchRange,
	/// Dense position among resolved matches; drives the displayed label.
	pub ordinal: usize,
	/// Ordinal of the candidate this match came from.
	pub scan_ordinal: usize,
}

/// Label digits typed after the anchor: the query minus its first two
/// characters, case-folded like the anchor when `match_case` is off.
pub fn remainder(search: &str, match_case: bool) -> String {
	search
		.chars()
		.skip(ANCHOR_LEN)
		.map(|c| fold_case(c, match_case))
		.collect()
}

/// Keeps the candidates whose label equals `remainder` and renumbers them.
///
/// A candidate at scan ordinal `i` is kept iff
/// `alphabet.label(i, remainder.chars().count()) == remainder`. An empty
/// remainder keeps every candidate.
pub fn resolve(
	candidates: &[CandidateMatch],
	remainder: &str,
	alphabet: &LabelAlphabet,
) -> Vec<ResolvedMatch> {
	candidates
		.iter()
		.filter(|c| remainder.is_empty() || alphabet.matches(c.ordinal, remainder))
		.enumerate()
		.map(|(ordinal, c)| ResolvedMatch {
			range: c.range,
			ordinal,
			scan_ordinal: c.ordinal,
		})
		.collect()
}
