// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! its-core: rule-driven issue-tracker integration for code review events
//!
//! Repository events are turned into per-issue property sets, matched
//! against a rule base, and the matching actions are executed against an
//! issue tracker. A commit validator enforces issue association on push.

pub mod action_request;
pub mod actions;
pub mod attributes;
pub mod commits;
pub mod condition;
pub mod config;
pub mod error;
pub mod event;
pub mod issue_extractor;
pub mod its;
pub mod property;
pub mod property_extractor;
pub mod rule;
pub mod rule_base;
pub mod rule_file;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use action_request::ActionRequest;
pub use actions::{Action, ActionContext, ActionController, ActionExecutor, Outcome};
pub use commits::{CommitSource, MemoryCommits};
pub use condition::Condition;
pub use config::{AssociationPolicy, CommentLink, EnabledMode, ItsConfig, ProjectSettings};
pub use error::{Error, Result};
pub use event::RepoEvent;
pub use issue_extractor::{IssueExtractor, Occurrences};
pub use its::ItsFacade;
pub use property::{Property, PropertySet};
pub use property_extractor::PropertyExtractor;
pub use rule::{Rule, RuleBuilder};
pub use rule_base::RuleBase;
pub use validation::{CommitValidator, ReceivedCommit, ValidationMessage};
