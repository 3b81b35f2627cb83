// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Actions performed against the issue tracker when rules match.
//!
//! Each action is looked up by name in an [`ActionExecutor`]. Names that are
//! not registered are handed to [`ItsFacade::perform_action`] verbatim.

pub mod add_comment;
pub mod add_related_link;
pub mod add_standard_comment;
pub mod add_templated_comment;
pub mod add_value_to_field;
pub mod controller;
pub mod create_version;
pub mod executor;
pub mod fire_event_on_commits;
pub mod log_event;

pub use controller::ActionController;
pub use executor::{ActionExecutor, Outcome};

use crate::action_request::ActionRequest;
use crate::commits::CommitSource;
use crate::error::Result;
use crate::issue_extractor::IssueExtractor;
use crate::its::ItsFacade;
use crate::property::PropertySet;
use crate::rule_base::RuleBase;

/// Everything an action may touch while handling one property set.
#[derive(Clone, Copy)]
pub struct ActionContext<'a> {
    pub its: &'a dyn ItsFacade,
    pub commits: Option<&'a dyn CommitSource>,
    pub issues: &'a IssueExtractor,
    pub rules: &'a RuleBase,
    pub executor: &'a ActionExecutor,
    /// Zero for actions triggered by a repository event; one for actions
    /// fired on behalf of another action.
    pub depth: usize,
}

/// A named operation run for one issue and the property set that matched.
pub trait Action: Send + Sync {
    fn execute(
        &self,
        ctx: &ActionContext<'_>,
        issue: &str,
        request: &ActionRequest,
        properties: &PropertySet,
    ) -> Result<()>;
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod tests;
