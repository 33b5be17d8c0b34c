//! Session error types. None of them are fatal; each one means the call
//! was a no-op.

use thiserror::Error;

use crate::session::SessionState;

/// Why a session operation did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
	/// The operation is not valid in the session's current state, typically
	/// because the session is already closed.
	#[error("{op}: session is {state:?}")]
	InvalidState {
		/// Operation that was attempted.
		op: &'static str,
		/// State the session was in.
		state: SessionState,
	},

	/// No editor is active, so there is nothing to scan or jump in.
	#[error("{op}: no active editor")]
	NoHostContext {
		/// Operation that was attempted.
		op: &'static str,
	},

	/// An event or command arrived while no session was open.
	#[error("no leap session is open")]
	NoSession,
}
