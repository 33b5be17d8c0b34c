//! Host-side collaborators consumed by a [`SearchSession`](crate::SearchSession).
//!
//! The engine never owns the text, the cursor, the decorations or the
//! preference store. The host hands them in through a [`LeapContext`] on
//! every call.

use leap_primitives::{Line, MatchRange, Position};

use crate::alphabet::LabelAlphabet;
use crate::resolver::ResolvedMatch;

/// Preference key persisting the match-case toggle between sessions.
pub const MATCH_CASE_KEY: &str = "match-case";

/// Read access to the active editor's text and view.
pub trait TextSource {
	/// Number of lines in the buffer.
	fn line_count(&self) -> usize;
	/// Snapshot of line `n`, or `None` past the end.
	fn line_at(&self, n: usize) -> Option<Line>;
	/// Primary cursor position.
	fn cursor_position(&self) -> Position;
	/// First and last visible line (inclusive).
	fn visible_line_range(&self) -> (usize, usize);
}

/// Moves the active editor's cursor.
pub trait CursorController {
	/// Collapses the selection to a cursor at `pos`.
	fn place_cursor(&mut self, pos: Position);
}

/// An editor the session can both read and move.
pub trait ActiveEditor: TextSource + CursorController {}

impl<T: TextSource + CursorController + ?Sized> ActiveEditor for T {}

/// Renders the overlays for one session.
///
/// Every [`present`](Self::present) replaces what the previous call drew;
/// implementations must dispose earlier decorations first. Use [`overlays`]
/// to compute what to draw.
pub trait PresentationAdapter {
	/// Draws `matches`, with labels when `show_labels` is set.
	fn present(&mut self, matches: &[ResolvedMatch], show_labels: bool);
	/// Removes everything this adapter drew.
	fn clear(&mut self);
}

/// Key/value store surviving across sessions.
pub trait PersistentPreference {
	fn get(&self, key: &str) -> Option<bool>;
	fn set(&mut self, key: &str, value: bool);
}

/// Everything a session needs from the host for one call.
pub trait LeapContext {
	/// The focused editor, or `None` when no editor is active.
	fn editor(&mut self) -> Option<&mut dyn ActiveEditor>;
	/// Creates the presentation a new session draws into.
	fn create_presentation(&mut self, alphabet: &LabelAlphabet) -> Box<dyn PresentationAdapter>;
	/// Global preference storage.
	fn preferences(&mut self) -> &mut dyn PersistentPreference;
}

/// One decoration derived from a resolved match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOverlay {
	/// Highlighted range.
	pub range: MatchRange,
	/// Where the label is drawn: the end of the match.
	pub label_at: Position,
	/// Label character, absent while labels are hidden.
	pub label: Option<char>,
}

/// Decorations for `matches`: each match is highlighted and, when
/// `show_labels` is set, labelled with `label(ordinal, 1)` at its end.
pub fn overlays(
	matches: &[ResolvedMatch],
	show_labels: bool,
	alphabet: &LabelAlphabet,
) -> Vec<MatchOverlay> {
	matches
		.iter()
		.map(|m| MatchOverlay {
			range: m.range,
			label_at: m.range.end,
			label: show_labels.then(|| alphabet.first_label(m.ordinal)),
		})
		.collect()
}
