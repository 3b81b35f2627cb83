// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A tracker that reports calls instead of making them.

use std::collections::HashSet;
use std::sync::Mutex;

use its_core::{ItsFacade, Result};

/// Prints each tracker call as one line on stdout.
///
/// Issues listed as missing are reported as non-existing; every other
/// issue exists.
#[derive(Debug, Default)]
pub struct DryRunIts {
    name: String,
    missing: HashSet<String>,
    quiet: bool,
    lines: Mutex<Vec<String>>,
}

impl DryRunIts {
    pub fn new(name: &str) -> Self {
        DryRunIts {
            name: name.to_string(),
            ..DryRunIts::default()
        }
    }

    pub fn with_missing<I, S>(mut self, issues: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing.extend(issues.into_iter().map(Into::into));
        self
    }

    /// Record calls without printing them.
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Every call reported so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    fn report(&self, line: String) {
        if !self.quiet {
            println!("{}", line);
        }
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }
}

impl ItsFacade for DryRunIts {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_comment(&self, issue: &str, comment: &str) -> Result<()> {
        self.report(format!("{}: add-comment {:?}", issue, comment));
        Ok(())
    }

    fn add_related_link(&self, issue: &str, url: &str, description: &str) -> Result<()> {
        self.report(format!(
            "{}: add-related-link {} {:?}",
            issue, url, description
        ));
        Ok(())
    }

    fn exists(&self, issue: &str) -> Result<bool> {
        Ok(!self.missing.contains(issue))
    }

    fn perform_action(&self, issue: &str, action: &str) -> Result<()> {
        self.report(format!("{}: perform-action {:?}", issue, action));
        Ok(())
    }

    fn add_value_to_field(&self, issue: &str, value: &str, field_id: &str) -> Result<()> {
        self.report(format!(
            "{}: add-value-to-field {} {:?}",
            issue, field_id, value
        ));
        Ok(())
    }

    fn create_version(&self, project: &str, version: &str) -> Result<()> {
        self.report(format!("{}: create-version {:?}", project, version));
        Ok(())
    }
}

#[cfg(test)]
#[path = "dry_run_tests.rs"]
mod tests;
