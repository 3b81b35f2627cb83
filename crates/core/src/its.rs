// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The issue-tracker boundary.

use crate::error::Result;

/// Operations the engine performs against an issue tracker.
///
/// Implementations talk to a concrete tracker. Every call may fail with a
/// tracker error; callers isolate those failures per action.
pub trait ItsFacade: Send + Sync {
    /// Tracker name, used for tracker-specific rule files and messages.
    fn name(&self) -> &str;

    fn add_comment(&self, issue: &str, comment: &str) -> Result<()>;

    fn add_related_link(&self, issue: &str, url: &str, description: &str) -> Result<()>;

    fn exists(&self, issue: &str) -> Result<bool>;

    /// Free-form tracker action, e.g. a workflow transition name.
    fn perform_action(&self, issue: &str, action: &str) -> Result<()>;

    fn add_value_to_field(&self, issue: &str, value: &str, field_id: &str) -> Result<()>;

    fn create_version(&self, project: &str, version: &str) -> Result<()>;

    /// Render a link in the tracker's markup.
    fn create_link_for_webui(&self, url: &str, text: &str) -> String {
        if text.is_empty() || text == url {
            url.to_string()
        } else {
            format!("{} ({})", text, url)
        }
    }
}

#[cfg(test)]
#[path = "its_tests.rs"]
mod tests;
