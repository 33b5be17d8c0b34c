//! Error types for settings parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or a value of the wrong type.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a settings file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Non-fatal warning during settings parsing.
///
/// Collected in [`Settings::warnings`](crate::Settings::warnings); the
/// settings still load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// A key that no option recognizes.
	UnknownOption {
		/// The unrecognized key.
		key: String,
		/// A close known key, if any.
		suggestion: Option<&'static str>,
	},
}

impl std::fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ConfigWarning::UnknownOption { key, suggestion } => {
				write!(f, "unknown option '{key}' will be ignored")?;
				if let Some(s) = suggestion {
					write!(f, " (did you mean '{s}'?)")?;
				}
				Ok(())
			}
		}
	}
}
