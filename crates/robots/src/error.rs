// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Scurry Contributors

use ::url::ParseError;

/// Scurry error types.
///
/// The core matching, escaping, and extraction functions are total and
/// never fail; errors only arise at the edges, when building absolute
/// crawl targets or parsing arguments.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A relative reference could not be combined with its base.
    #[error("cannot combine {relative:?}: {source}")]
    Combine {
        relative: String,
        #[source]
        source: ParseError,
    },

    /// Invalid command-line arguments.
    #[error("argument error: {0}")]
    Argument(String),
}

/// Result type using scurry Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded; for `check`, a pattern matched
    Success = 0,
    /// No pattern matched the target
    NoMatch = 1,
    /// Argument or URL error
    UsageError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Combine { .. } | Error::Argument(_) => ExitCode::UsageError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
