//! Settings for leap jump search.
//!
//! Settings are written in TOML. Every key is optional:
//!
//! ```toml
//! # Only let a double space anchor jump to line ends.
//! white-spaces-only-match-new-line = true
//!
//! # Characters used for jump labels, in priority order.
//! custom-labels = ["a", "s", "d", "f", "j", "k", "l"]
//! ```
//!
//! The camelCase spellings `whiteSpacesOnlyMatchNewLine` and `customLabels`
//! are accepted as well. Unknown keys do not fail the load; they are
//! collected in [`Settings::warnings`] with a suggestion when one is close.

pub mod error;

use std::path::Path;

pub use error::{ConfigError, ConfigWarning, Result};
use serde::Deserialize;

/// Built-in label characters, home row first.
pub const DEFAULT_LABELS: [char; 26] = [
	's', 'f', 'n', 'j', 'k', 'l', 'h', 'o', 'd', 'w', 'e', 'i', 'm', 'b', 'u', 'y', 'v', 'r', 'g',
	't', 'a', 'q', 'p', 'c', 'x', 'z',
];

/// Recognized keys, kebab-case first.
const KNOWN_KEYS: &[&str] = &[
	"white-spaces-only-match-new-line",
	"custom-labels",
	"whiteSpacesOnlyMatchNewLine",
	"customLabels",
];

/// Parsed jump search settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
	/// Suppresses mid-line double-space anchor matches; only line ends match.
	#[serde(alias = "whiteSpacesOnlyMatchNewLine")]
	pub white_spaces_only_match_new_line: bool,
	/// Label characters replacing [`DEFAULT_LABELS`]. Each entry must be a
	/// single character. Duplicates are tolerated here and dropped when the
	/// label alphabet is built.
	#[serde(alias = "customLabels")]
	pub custom_labels: Option<Vec<char>>,
	/// Non-fatal warnings encountered during parsing.
	#[serde(skip)]
	pub warnings: Vec<ConfigWarning>,
}

impl Settings {
	/// Parse a TOML string into [`Settings`].
	///
	/// Unknown keys become [`ConfigWarning`]s instead of errors.
	pub fn parse(input: &str) -> Result<Self> {
		let table: toml::Table = toml::from_str(input)?;
		let mut settings: Settings = toml::from_str(input)?;

		settings.warnings = table
			.keys()
			.filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
			.map(|key| ConfigWarning::UnknownOption {
				key: key.clone(),
				suggestion: suggest_option(key),
			})
			.collect();

		Ok(settings)
	}

	/// Load settings from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Label characters in configured order, falling back to [`DEFAULT_LABELS`]
	/// when none (or an empty list) are configured.
	pub fn labels(&self) -> &[char] {
		match self.custom_labels.as_deref() {
			Some(labels) if !labels.is_empty() => labels,
			_ => &DEFAULT_LABELS,
		}
	}
}

/// Suggests a similar known key using edit distance.
fn suggest_option(key: &str) -> Option<&'static str> {
	KNOWN_KEYS[..2]
		.iter()
		.copied()
		.min_by_key(|k| strsim::levenshtein(key, k))
		.filter(|k| strsim::levenshtein(key, k) <= 3)
}
