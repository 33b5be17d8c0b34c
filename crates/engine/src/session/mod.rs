//! The interactive jump search session.
//!
//! A [`SearchSession`] is created for one invocation with a fixed direction
//! and scope, opened against the host, fed events until it closes, and then
//! discarded. Every input event rescans the whole scope from scratch; there
//! is no incremental state besides the query itself.
//!
//! ```text
//! Created --open--> Active --input/toggle--> Active (rescanned)
//!                     |
//!                     +--unique match / cancel / blur / replaced--> Closed
//! ```

use leap_config::Settings;
use leap_primitives::{Line, Position, Scope, SearchDirection};

use crate::alphabet::LabelAlphabet;
use crate::error::SessionError;
use crate::host::{LeapContext, MATCH_CASE_KEY, PresentationAdapter};
use crate::resolver::{self, ResolvedMatch};
use crate::scanner::MatchScanner;


/// Settings resolved once when a session opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
	/// Restricts double-space anchors to line ends.
	pub white_spaces_only_match_new_line: bool,
	/// Label digits.
	pub alphabet: LabelAlphabet,
}

impl SessionConfig {
	pub fn from_settings(settings: &Settings) -> Self {
		Self {
			white_spaces_only_match_new_line: settings.white_spaces_only_match_new_line,
			alphabet: LabelAlphabet::from_settings(settings),
		}
	}
}

/// Current query. Replaced as a whole on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
	pub text: String,
	pub match_case: bool,
	pub scope: Scope,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
	/// A unique match was jumped to.
	Commit,
	/// The user dismissed the prompt.
	Cancel,
	/// The prompt lost focus.
	Blur,
	/// A newer session took over.
	Replaced,
}

/// Lifecycle state of a [`SearchSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
	Created,
	Active,
	Closed(CloseReason),
}

/// Prompt buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
	/// Toggles case-sensitive matching.
	MatchCase,
	/// Closes the prompt.
	Close,
}

/// Input delivered to a session, one at a time, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
	/// The prompt text changed to this value.
	Input(String),
	/// Toggle case-sensitive matching.
	ToggleCase,
	/// Dismissed by the user.
	Cancel,
	/// The prompt was hidden without a user dismissal.
	Blur,
	/// A prompt button was pressed.
	ButtonTrigger(ButtonId),
}

/// Result of a session operation that did something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
	/// The session is open and waiting for input.
	Opened(SearchDirection),
	/// Matches were rescanned; `matches` remain.
	Pending { matches: usize },
	/// The cursor moved to the only remaining match and the session closed.
	Jumped(Position),
	/// The session closed.
	Closed(CloseReason),
}

/// A button shown on the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptButton {
	pub id: ButtonId,
	/// Codicon name.
	pub icon: &'static str,
	pub tooltip: &'static str,
}

/// How the host should draw the query prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptSpec {
	pub title: &'static str,
	pub placeholder: &'static str,
	pub buttons: [PromptButton; 2],
}

/// State and resources of one jump search.
///
/// The session owns its presentation: it is created on open and cleared and
/// dropped on close. Dropping an active session clears it as well.
pub struct SearchSession {
	direction: SearchDirection,
	query: Query,
	config: SessionConfig,
	resolved: Vec<ResolvedMatch>,
	presentation: Option<Box<dyn PresentationAdapter>>,
	state: SessionState,
}

impl SearchSession {
	/// Creates a session over `scope`. Nothing is allocated until [`Self::open`].
	pub fn new(direction: SearchDirection, scope: Scope, config: SessionConfig) -> Self {
		Self {
			direction,
			query: Query {
				text: String::new(),
				match_case: false,
				scope,
			},
			config,
			resolved: Vec::new(),
			presentation: None,
			state: SessionState::Created,
		}
	}

	pub fn direction(&self) -> SearchDirection {
		self.direction
	}

	pub fn query(&self) -> &Query {
		&self.query
	}

	pub fn config(&self) -> &SessionConfig {
		&self.config
	}

	pub fn state(&self) -> SessionState {
		self.state
	}

	pub fn is_active(&self) -> bool {
		self.state == SessionState::Active
	}

	/// Matches surviving the current query, in scan order.
	pub fn resolved(&self) -> &[ResolvedMatch] {
		&self.resolved
	}

	/// Loads the persisted match-case toggle and installs a fresh presentation.
	pub fn open(&mut self, ctx: &mut dyn LeapContext) -> Result<SessionStep, SessionError> {
		if self.state != SessionState::Created {
			return Err(self.invalid("open"));
		}

		self.query.match_case = ctx.preferences().get(MATCH_CASE_KEY).unwrap_or(false);
		self.presentation = Some(ctx.create_presentation(&self.config.alphabet));
		self.state = SessionState::Active;

		tracing::debug!(
			direction = ?self.direction,
			scope = ?self.query.scope,
			match_case = self.query.match_case,
			"Opened leap session"
		);
		Ok(SessionStep::Opened(self.direction))
	}

	/// Replaces the query text and rescans.
	///
	/// Jumps and closes when exactly one match remains.
	pub fn on_input(
		&mut self,
		ctx: &mut dyn LeapContext,
		text: &str,
	) -> Result<SessionStep, SessionError> {
		self.ensure_active("on_input")?;
		self.query = Query {
			text: text.to_owned(),
			match_case: self.query.match_case,
			scope: self.query.scope,
		};
		self.refresh(ctx, "on_input")
	}

	/// Flips case-sensitive matching and rescans the unchanged text.
	pub fn toggle_match_case(
		&mut self,
		ctx: &mut dyn LeapContext,
	) -> Result<SessionStep, SessionError> {
		self.ensure_active("toggle_match_case")?;
		self.query = Query {
			text: std::mem::take(&mut self.query.text),
			match_case: !self.query.match_case,
			scope: self.query.scope,
		};
		self.refresh(ctx, "toggle_match_case")
	}

	/// Clears the presentation and persists the match-case toggle.
	///
	/// Closing an already closed session does nothing and reports the
	/// original reason.
	pub fn close(&mut self, ctx: &mut dyn LeapContext, reason: CloseReason) -> SessionStep {
		let was_active = match self.state {
			SessionState::Closed(previous) => return SessionStep::Closed(previous),
			SessionState::Active => true,
			SessionState::Created => false,
		};

		if let Some(mut presentation) = self.presentation.take() {
			presentation.clear();
		}
		self.resolved.clear();
		if was_active {
			ctx.preferences().set(MATCH_CASE_KEY, self.query.match_case);
		}
		self.state = SessionState::Closed(reason);

		tracing::debug!(?reason, "Closed leap session");
		SessionStep::Closed(reason)
	}

	/// Applies one event.
	pub fn dispatch(
		&mut self,
		ctx: &mut dyn LeapContext,
		event: SessionEvent,
	) -> Result<SessionStep, SessionError> {
		match event {
			SessionEvent::Input(text) => self.on_input(ctx, &text),
			SessionEvent::ToggleCase | SessionEvent::ButtonTrigger(ButtonId::MatchCase) => {
				self.toggle_match_case(ctx)
			}
			SessionEvent::Cancel | SessionEvent::ButtonTrigger(ButtonId::Close) => {
				self.ensure_active("cancel")?;
				Ok(self.close(ctx, CloseReason::Cancel))
			}
			SessionEvent::Blur => {
				self.ensure_active("blur")?;
				Ok(self.close(ctx, CloseReason::Blur))
			}
		}
	}

	/// Prompt title, placeholder and buttons for the current toggle state.
	pub fn prompt(&self) -> PromptSpec {
		let (icon, tooltip) = if self.query.match_case {
			("preserve-case", "Match Case (Alt + C)")
		} else {
			("case-sensitive", "Don't Match Case (Alt + C)")
		};
		PromptSpec {
			title: "Leap Finder",
			placeholder: "Find",
			buttons: [
				PromptButton {
					id: ButtonId::MatchCase,
					icon,
					tooltip,
				},
				PromptButton {
					id: ButtonId::Close,
					icon: "widget-close",
					tooltip: "Close (Escape)",
				},
			],
		}
	}

	fn refresh(
		&mut self,
		ctx: &mut dyn LeapContext,
		op: &'static str,
	) -> Result<SessionStep, SessionError> {
		let Some(editor) = ctx.editor() else {
			self.resolved.clear();
			if let Some(presentation) = self.presentation.as_mut() {
				presentation.clear();
			}
			tracing::debug!(op, "No active editor, skipping rescan");
			return Err(SessionError::NoHostContext { op });
		};

		let Query {
			ref text,
			match_case,
			scope,
		} = self.query;
		let lines: Vec<Line> = scope
			.line_numbers()
			.map_while(|n| editor.line_at(n))
			.collect();
		let scanner = MatchScanner::new(self.config.white_spaces_only_match_new_line);
		let candidates = scanner.scan_scope(&lines, &scope, text, match_case);
		let remainder = resolver::remainder(text, match_case);
		self.resolved = resolver::resolve(&candidates, &remainder, &self.config.alphabet);

		let show_labels = text.chars().count() >= 2;
		if let Some(presentation) = self.presentation.as_mut() {
			presentation.present(&self.resolved, show_labels);
		}

		tracing::trace!(
			query = %text,
			match_case,
			candidates = candidates.len(),
			resolved = self.resolved.len(),
			"Rescanned leap matches"
		);

		if let [only] = self.resolved.as_slice() {
			let target = only.range.start;
			editor.place_cursor(target);
			self.close(ctx, CloseReason::Commit);
			return Ok(SessionStep::Jumped(target));
		}
		Ok(SessionStep::Pending {
			matches: self.resolved.len(),
		})
	}

	fn ensure_active(&self, op: &'static str) -> Result<(), SessionError> {
		if self.is_active() {
			return Ok(());
		}
		Err(self.invalid(op))
	}

	fn invalid(&self, op: &'static str) -> SessionError {
		tracing::warn!(op, state = ?self.state, "Ignoring operation on leap session");
		SessionError::InvalidState {
			op,
			state: self.state,
		}
	}
}

impl Drop for SearchSession {
	fn drop(&mut self) {
		if let Some(mut presentation) = self.presentation.take() {
			presentation.clear();
		}
	}
}

impl std::fmt::Debug for SearchSession {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SearchSession")
			.field("direction", &self.direction)
			.field("query", &self.query)
			.field("resolved", &self.resolved.len())
			.field("state", &self.state)
			.finish_non_exhaustive()
	}
}
