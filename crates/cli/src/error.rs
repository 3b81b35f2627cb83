// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the its CLI.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config file not found: {0}\n  hint: pass --config or set ITS_CONFIG to an existing file")]
    ConfigNotFound(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid issue pattern: {0}")]
    InvalidPattern(String),

    #[error("no issue pattern\n  hint: pass --pattern, or --project with an issue-pattern configured")]
    NoPattern,

    #[error("{0}")]
    CommitRejected(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Core(String),
}

/// A specialized Result type for itsrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<its_core::Error> for Error {
    fn from(e: its_core::Error) -> Self {
        match e {
            its_core::Error::Io(e) => Error::Io(e),
            its_core::Error::Json(e) => Error::Json(e),
            its_core::Error::Regex(e) => Error::InvalidPattern(e.to_string()),
            its_core::Error::Config(s) => Error::Config(s),
            its_core::Error::CommitRejected { synopsis, .. } => Error::CommitRejected(synopsis),
            other => Error::Core(other.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
