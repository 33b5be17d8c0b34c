//! Entry point layer: commands and the single live session.

use leap_config::Settings;
use leap_primitives::{Scope, SearchDirection};

use crate::error::SessionError;
use crate::host::LeapContext;
use crate::session::{
	CloseReason, PromptSpec, SearchSession, SessionConfig, SessionEvent, SessionStep,
};

/// Commands a host binds to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
	/// Backward from the upper half of the view, forward from the lower half.
	Find,
	FindForward,
	FindBackward,
	FindEntireView,
	ToggleMatchCase,
	Close,
}

impl Command {
	pub const ALL: [Command; 6] = [
		Command::Find,
		Command::FindForward,
		Command::FindBackward,
		Command::FindEntireView,
		Command::ToggleMatchCase,
		Command::Close,
	];

	/// Stable command identifier.
	pub fn id(self) -> &'static str {
		match self {
			Command::Find => "leap.find",
			Command::FindForward => "leap.find-forward",
			Command::FindBackward => "leap.find-backward",
			Command::FindEntireView => "leap.find-entire-view",
			Command::ToggleMatchCase => "leap.match-case",
			Command::Close => "leap.close",
		}
	}

	pub fn from_id(id: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|c| c.id() == id)
	}
}

/// Owns at most one live [`SearchSession`].
///
/// Opening while a session is active closes the old one first, so its
/// overlays are cleared before the new presentation is installed. Closed
/// sessions are dropped as soon as an event closes them.
#[derive(Debug, Default)]
pub struct LeapManager {
	settings: Settings,
	session: Option<SearchSession>,
}

impl LeapManager {
	pub fn new(settings: Settings) -> Self {
		Self {
			settings,
			session: None,
		}
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// Replaces the settings. Takes effect for the next opened session.
	pub fn set_settings(&mut self, settings: Settings) {
		self.settings = settings;
	}

	pub fn is_open(&self) -> bool {
		self.session.is_some()
	}

	pub fn session(&self) -> Option<&SearchSession> {
		self.session.as_ref()
	}

	/// Prompt of the live session.
	pub fn prompt(&self) -> Option<PromptSpec> {
		self.session.as_ref().map(SearchSession::prompt)
	}

	/// Opens a session searching in `direction` from the current cursor.
	pub fn open(
		&mut self,
		ctx: &mut dyn LeapContext,
		direction: SearchDirection,
	) -> Result<SessionStep, SessionError> {
		let Some(editor) = ctx.editor() else {
			tracing::debug!(?direction, "No active editor, not opening leap session");
			return Err(SessionError::NoHostContext { op: "open" });
		};
		let scope = Scope::for_direction(
			direction,
			editor.cursor_position(),
			editor.visible_line_range(),
			editor.line_count(),
		)
		.ok_or(SessionError::NoHostContext { op: "open" })?;

		self.close(ctx, CloseReason::Replaced);

		let mut session =
			SearchSession::new(direction, scope, SessionConfig::from_settings(&self.settings));
		let step = session.open(ctx)?;
		self.session = Some(session);
		Ok(step)
	}

	/// Opens a session whose direction depends on where the cursor sits in the view.
	pub fn open_toward_cursor(
		&mut self,
		ctx: &mut dyn LeapContext,
	) -> Result<SessionStep, SessionError> {
		let Some(editor) = ctx.editor() else {
			return Err(SessionError::NoHostContext { op: "open" });
		};
		let (first, last) = editor.visible_line_range();
		let direction = SearchDirection::toward_cursor(editor.cursor_position().line, first, last);
		self.open(ctx, direction)
	}

	/// Forwards `event` to the live session.
	pub fn dispatch(
		&mut self,
		ctx: &mut dyn LeapContext,
		event: SessionEvent,
	) -> Result<SessionStep, SessionError> {
		let Some(session) = self.session.as_mut() else {
			tracing::debug!(?event, "No leap session for event");
			return Err(SessionError::NoSession);
		};
		let result = session.dispatch(ctx, event);
		if !session.is_active() {
			self.session = None;
		}
		result
	}

	/// Closes the live session, if any.
	pub fn close(&mut self, ctx: &mut dyn LeapContext, reason: CloseReason) -> Option<SessionStep> {
		self.session.take().map(|mut session| session.close(ctx, reason))
	}

	/// Runs a bound command.
	pub fn execute(
		&mut self,
		ctx: &mut dyn LeapContext,
		command: Command,
	) -> Result<SessionStep, SessionError> {
		tracing::trace!(command = command.id(), "Executing leap command");
		match command {
			Command::Find => self.open_toward_cursor(ctx),
			Command::FindForward => self.open(ctx, SearchDirection::Forward),
			Command::FindBackward => self.open(ctx, SearchDirection::Backward),
			Command::FindEntireView => self.open(ctx, SearchDirection::Entire),
			Command::ToggleMatchCase => self.dispatch(ctx, SessionEvent::ToggleCase),
			Command::Close => self.dispatch(ctx, SessionEvent::Cancel),
		}
	}
}
