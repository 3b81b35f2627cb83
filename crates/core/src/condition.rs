// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A single rule condition: one key and an OR-list of accepted values.

use std::fmt;

use crate::property::Property;

/// Matches a property set when some property under `key` carries one of
/// `values`. A value spec starting with `!` negates the condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    key: String,
    values: Vec<String>,
    negated: bool,
}

impl Condition {
    /// Parse a comma-separated value spec.
    ///
    /// Values are trimmed and deduplicated, keeping first-seen order. An
    /// empty spec yields no values, so the condition is never met.
    pub fn new(key: impl Into<String>, spec: Option<&str>) -> Self {
        let spec = spec.map(str::trim).unwrap_or_default();
        let (negated, spec) = match spec.strip_prefix('!') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, spec),
        };

        let mut values: Vec<String> = Vec::new();
        if !spec.is_empty() {
            for value in spec.split(',').map(str::trim) {
                if !values.iter().any(|v| v == value) {
                    values.push(value.to_string());
                }
            }
        }

        Condition {
            key: key.into(),
            values,
            negated,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Accepted values in configuration order. Read-only by construction.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Whether `properties` satisfy this condition.
    pub fn is_met_by<'a, I>(&self, properties: I) -> bool
    where
        I: IntoIterator<Item = &'a Property>,
    {
        let found = properties.into_iter().any(|p| {
            p.key() == self.key
                && p.value()
                    .is_some_and(|value| self.values.iter().any(|v| v == value))
        });
        found != self.negated
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bang = if self.negated { "!" } else { "" };
        write!(f, "{} = {}{}", self.key, bang, self.values.join(","))
    }
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
