//! Error types for textgrid.

use std::fmt;

use crate::event::{LogLevel, emit_log};

/// Result type alias for textgrid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for textgrid operations.
///
/// None of these abort the caller: the operation that produced one leaves
/// its inputs untouched and the error is also written to the log channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A required argument was missing or empty.
    InvalidArgument(String),
    /// A component did not have the row count an operation requires.
    InvalidShape {
        expected_rows: usize,
        actual_rows: usize,
    },
    /// Malformed border or option settings.
    Configuration(String),
}

impl Error {
    /// Report this error on the log channel and hand it back.
    #[must_use]
    pub fn log(self) -> Self {
        emit_log(LogLevel::Warn, &self.to_string());
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
            Self::InvalidShape {
                expected_rows,
                actual_rows,
            } => write!(
                f,
                "invalid shape: expected {expected_rows} row(s), got {actual_rows}"
            ),
            Self::Configuration(what) => write!(f, "configuration error: {what}"),
        }
    }
}

impl std::error::Error for Error {}
