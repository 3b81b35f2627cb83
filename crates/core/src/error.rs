// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for its-core operations.

use thiserror::Error;

use crate::validation::ValidationMessage;

/// All possible errors that can occur in its-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid issue pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid rule file: {0}")]
    RuleFile(String),

    #[error("issue tracker error: {0}")]
    Tracker(String),

    #[error("commit lookup failed: {0}")]
    Commit(String),

    #[error("template '{name}': {reason}")]
    Template { name: String, reason: String },

    #[error("invalid log level: '{0}'\n  hint: valid levels are: error, warn, info, debug")]
    InvalidLogLevel(String),

    #[error(
        "invalid association policy: '{0}'\n  hint: valid policies are: optional, suggested, mandatory"
    )]
    InvalidPolicy(String),

    #[error("invalid enabled value: '{0}'\n  hint: valid values are: false, true, enforced")]
    InvalidEnabled(String),

    #[error("invalid action parameter for {action}: '{parameter}'")]
    InvalidActionParameter { action: String, parameter: String },

    #[error("commit rejected: {synopsis}")]
    CommitRejected {
        synopsis: String,
        messages: Vec<ValidationMessage>,
    },
}

/// A specialized Result type for its-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
