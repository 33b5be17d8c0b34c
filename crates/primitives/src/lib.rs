//! Core types for label jumps: positions, match ranges, line snapshots and scan scopes.

/// Search direction relative to the cursor.
pub mod direction;
/// Immutable line snapshots handed over by the host buffer.
pub mod line;
/// Line/character positions and match ranges.
pub mod position;
/// Rope helpers producing line snapshots.
pub mod rope;
/// Line and character bounds of a scan.
pub mod scope;

pub use direction::SearchDirection;
pub use line::Line;
pub use position::{MatchRange, Position};
pub use ropey::{Rope, RopeSlice};
pub use scope::Scope;
