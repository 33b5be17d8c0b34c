//! Common utilities for leap integration tests: an in-memory editor, a
//! presentation that tracks live overlays, and a preference map.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leap_engine::{
	ActiveEditor, CursorController, LabelAlphabet, LeapContext, Line, MatchOverlay,
	PersistentPreference, Position, PresentationAdapter, ResolvedMatch, TextSource, overlays,
};
use leap_primitives::{Rope, rope};

/// Rope-backed editor with a cursor and a visible line window.
pub struct TestEditor {
	pub text: Rope,
	pub cursor: Position,
	pub visible: (usize, usize),
}

impl TestEditor {
	pub fn new(text: &str) -> Self {
		let text = Rope::from(text);
		let last = rope::line_count(text.slice(..)).saturating_sub(1);
		Self {
			text,
			cursor: Position::default(),
			visible: (0, last),
		}
	}
}

impl TextSource for TestEditor {
	fn line_count(&self) -> usize {
		rope::line_count(self.text.slice(..))
	}

	fn line_at(&self, n: usize) -> Option<Line> {
		rope::line_snapshot(self.text.slice(..), n)
	}

	fn cursor_position(&self) -> Position {
		self.cursor
	}

	fn visible_line_range(&self) -> (usize, usize) {
		self.visible
	}
}

impl CursorController for TestEditor {
	fn place_cursor(&mut self, pos: Position) {
		self.cursor = pos;
	}
}

/// Overlay state shared between the host and every presentation it created.
#[derive(Debug, Default)]
pub struct Screen {
	/// Overlays currently drawn, per presentation id.
	pub live: HashMap<usize, Vec<MatchOverlay>>,
	/// Number of `present` calls per presentation id.
	pub presents: HashMap<usize, usize>,
	/// Presentations created so far.
	pub created: usize,
}

impl Screen {
	/// All overlays drawn by all presentations.
	pub fn drawn(&self) -> Vec<MatchOverlay> {
		let mut ids: Vec<_> = self.live.keys().copied().collect();
		ids.sort_unstable();
		ids.into_iter().flat_map(|id| self.live[&id].clone()).collect()
	}

	pub fn labels(&self) -> Vec<(Position, char)> {
		self.drawn()
			.into_iter()
			.filter_map(|o| o.label.map(|l| (o.label_at, l)))
			.collect()
	}
}

struct TestPresentation {
	id: usize,
	alphabet: LabelAlphabet,
	screen: Rc<RefCell<Screen>>,
}

impl PresentationAdapter for TestPresentation {
	fn present(&mut self, matches: &[ResolvedMatch], show_labels: bool) {
		let mut screen = self.screen.borrow_mut();
		screen
			.live
			.insert(self.id, overlays(matches, show_labels, &self.alphabet));
		*screen.presents.entry(self.id).or_default() += 1;
	}

	fn clear(&mut self) {
		self.screen.borrow_mut().live.remove(&self.id);
	}
}

#[derive(Debug, Default)]
pub struct MemoryPreferences(pub HashMap<String, bool>);

impl PersistentPreference for MemoryPreferences {
	fn get(&self, key: &str) -> Option<bool> {
		self.0.get(key).copied()
	}

	fn set(&mut self, key: &str, value: bool) {
		self.0.insert(key.to_owned(), value);
	}
}

pub struct TestHost {
	pub editor: Option<TestEditor>,
	pub screen: Rc<RefCell<Screen>>,
	pub prefs: MemoryPreferences,
}

impl TestHost {
	pub fn new(text: &str) -> Self {
		let _ = tracing_subscriber::fmt::try_init();
		Self {
			editor: Some(TestEditor::new(text)),
			screen: Rc::default(),
			prefs: MemoryPreferences::default(),
		}
	}

	pub fn with_cursor(mut self, line: usize, character: usize) -> Self {
		if let Some(editor) = self.editor.as_mut() {
			editor.cursor = Position::new(line, character);
		}
		self
	}

	pub fn with_visible(mut self, first: usize, last: usize) -> Self {
		if let Some(editor) = self.editor.as_mut() {
			editor.visible = (first, last);
		}
		self
	}

	pub fn cursor(&self) -> Option<Position> {
		self.editor.as_ref().map(|e| e.cursor)
	}

	pub fn labels(&self) -> Vec<(Position, char)> {
		self.screen.borrow().labels()
	}

	pub fn drawn(&self) -> Vec<MatchOverlay> {
		self.screen.borrow().drawn()
	}
}

impl LeapContext for TestHost {
	fn editor(&mut self) -> Option<&mut dyn ActiveEditor> {
		self.editor.as_mut().map(|e| e as &mut dyn ActiveEditor)
	}

	fn create_presentation(&mut self, alphabet: &LabelAlphabet) -> Box<dyn PresentationAdapter> {
		let id = {
			let mut screen = self.screen.borrow_mut();
			screen.created += 1;
			screen.created
		};
		Box::new(TestPresentation {
			id,
			alphabet: alphabet.clone(),
			screen: Rc::clone(&self.screen),
		})
	}

	fn preferences(&mut self) -> &mut dyn PersistentPreference {
		&mut self.prefs
	}
}
