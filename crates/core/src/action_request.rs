// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed `action = "name param..."` configuration lines.

use serde::Serialize;
use std::fmt;

/// An action name plus positional parameters, split on whitespace.
///
/// Parsing never fails: empty input yields an empty name and no parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionRequest {
    unparsed: String,
    name: String,
    parameters: Vec<String>,
}

impl ActionRequest {
    pub fn new(spec: &str) -> Self {
        let unparsed = spec.trim().to_string();
        let mut tokens = unparsed.split_whitespace().map(str::to_string);
        let name = tokens.next().unwrap_or_default();
        let parameters = tokens.collect();
        ActionRequest {
            unparsed,
            name,
            parameters,
        }
    }

    /// The trimmed original specification.
    pub fn unparsed(&self) -> &str {
        &self.unparsed
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// The `n`th parameter, counting from 1; `""` when out of range.
    pub fn parameter(&self, n: usize) -> &str {
        n.checked_sub(1)
            .and_then(|i| self.parameters.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl From<Option<&str>> for ActionRequest {
    fn from(spec: Option<&str>) -> Self {
        spec.map(ActionRequest::new).unwrap_or_default()
    }
}

impl fmt::Display for ActionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.unparsed)
    }
}

#[cfg(test)]
#[path = "action_request_tests.rs"]
mod tests;
