//! Crate-level error types.

use std::fmt;

/// Errors produced by the eyecandy crate.
///
/// Asset-load failure is deliberately *not* represented here: it is a
/// designed fallback path absorbed by the engine (see
/// [`crate::asset::AssetLoadError`]), never a fatal error.
#[derive(Debug)]
pub enum EyecandyError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for EyecandyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for EyecandyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EyecandyError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
