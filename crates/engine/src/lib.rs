//! Label jump search: type a two-character anchor, then label characters,
//! and the cursor jumps once a single visible match remains.
//!
//! The pipeline runs on every keystroke:
//!
//! 1. [`MatchScanner`] finds anchor occurrences in the session's scope.
//! 2. [`resolve`] keeps the candidates whose [`LabelAlphabet`] label equals
//!    the characters typed after the anchor.
//! 3. [`SearchSession`] hands the survivors to the host's
//!    [`PresentationAdapter`] and jumps when exactly one is left.
//!
//! [`LeapManager`] is the entry point hosts bind commands to; it keeps at
//! most one session alive.

/// Label digits and mixed-radix labels.
pub mod alphabet;
/// Session error types.
pub mod error;
/// Host collaborator traits.
pub mod host;
/// Commands and the live session handle.
pub mod manager;
/// Label filtering.
pub mod resolver;
/// Anchor scanning.
pub mod scanner;
/// Session state machine.
pub mod session;

pub use alphabet::LabelAlphabet;
pub use error::SessionError;
pub use host::{
	ActiveEditor, CursorController, LeapContext, MATCH_CASE_KEY, MatchOverlay, PersistentPreference,
	PresentationAdapter, TextSource, overlays,
};
pub use leap_config::Settings;
pub use leap_primitives::{Line, MatchRange, Position, Scope, SearchDirection};
pub use manager::{Command, LeapManager};
pub use resolver::{ResolvedMatch, remainder, resolve};
pub use scanner::{CandidateMatch, MatchScanner};
pub use session::{
	ButtonId, CloseReason, PromptButton, PromptSpec, Query, SearchSession, SessionConfig,
	SessionEvent, SessionState, SessionStep,
};
