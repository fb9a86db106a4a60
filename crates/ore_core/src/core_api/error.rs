use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;

use crate::error::FieldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorCode {
    /// The save file could not be read from disk.
    Io,
    /// The bytes do not start with the `GVAS` magic.
    InvalidFormat,
}

/// The only failures that escape a decode. Everything below the magic
/// check degrades to defaults instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreError {
    pub code: CoreErrorCode,
    pub message: String,
}

impl CoreError {
    pub fn new(code: CoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub(crate) fn unreadable(path: &Path, err: &io::Error) -> Self {
        Self::new(
            CoreErrorCode::Io,
            format!("failed to read {}: {err}", path.display()),
        )
    }

    pub(crate) fn not_a_save(path: &Path, err: &FieldError) -> Self {
        Self::new(
            CoreErrorCode::InvalidFormat,
            format!("{} is not a GVAS save file: {err}", path.display()),
        )
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.code {
            CoreErrorCode::Io => "Io",
            CoreErrorCode::InvalidFormat => "InvalidFormat",
        };
        write!(f, "{kind}: {}", self.message)
    }
}

impl Error for CoreError {}
