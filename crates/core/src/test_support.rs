// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A tracker fake that records every call.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;
use std::sync::Mutex;

use crate::action_request::ActionRequest;
use crate::actions::{ActionContext, ActionExecutor};
use crate::commits::CommitSource;
use crate::error::{Error, Result};
use crate::issue_extractor::IssueExtractor;
use crate::its::ItsFacade;
use crate::property::{Property, PropertySet};
use crate::rule_base::RuleBase;

/// One recorded facade call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    AddComment { issue: String, comment: String },
    AddRelatedLink { issue: String, url: String, description: String },
    Exists { issue: String },
    PerformAction { issue: String, action: String },
    AddValueToField { issue: String, value: String, field: String },
    CreateVersion { project: String, version: String },
}

#[derive(Debug, Default)]
pub struct RecordingIts {
    name: String,
    calls: Mutex<Vec<Call>>,
    missing: HashSet<String>,
    broken: HashSet<String>,
    fail_comments: bool,
}

impl RecordingIts {
    pub fn new(name: &str) -> Self {
        RecordingIts {
            name: name.to_string(),
            ..RecordingIts::default()
        }
    }

    /// Issues that `exists` reports as absent.
    pub fn missing(mut self, issues: &[&str]) -> Self {
        self.missing.extend(issues.iter().map(|s| s.to_string()));
        self
    }

    /// Issues for which every call fails.
    pub fn broken(mut self, issues: &[&str]) -> Self {
        self.broken.extend(issues.iter().map(|s| s.to_string()));
        self
    }

    pub fn failing_comments(mut self) -> Self {
        self.fail_comments = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn comments(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::AddComment { issue, comment } => Some((issue, comment)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, issue: &str, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.broken.contains(issue) {
            return Err(Error::Tracker(format!("connection refused for {}", issue)));
        }
        Ok(())
    }
}

impl ItsFacade for RecordingIts {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_comment(&self, issue: &str, comment: &str) -> Result<()> {
        self.record(
            issue,
            Call::AddComment {
                issue: issue.to_string(),
                comment: comment.to_string(),
            },
        )?;
        if self.fail_comments {
            return Err(Error::Tracker("comment rejected".into()));
        }
        Ok(())
    }

    fn add_related_link(&self, issue: &str, url: &str, description: &str) -> Result<()> {
        self.record(
            issue,
            Call::AddRelatedLink {
                issue: issue.to_string(),
                url: url.to_string(),
                description: description.to_string(),
            },
        )
    }

    fn exists(&self, issue: &str) -> Result<bool> {
        self.record(
            issue,
            Call::Exists {
                issue: issue.to_string(),
            },
        )?;
        Ok(!self.missing.contains(issue))
    }

    fn perform_action(&self, issue: &str, action: &str) -> Result<()> {
        self.record(
            issue,
            Call::PerformAction {
                issue: issue.to_string(),
                action: action.to_string(),
            },
        )
    }

    fn add_value_to_field(&self, issue: &str, value: &str, field_id: &str) -> Result<()> {
        self.record(
            issue,
            Call::AddValueToField {
                issue: issue.to_string(),
                value: value.to_string(),
                field: field_id.to_string(),
            },
        )
    }

    fn create_version(&self, project: &str, version: &str) -> Result<()> {
        self.record(
            project,
            Call::CreateVersion {
                project: project.to_string(),
                version: version.to_string(),
            },
        )
    }
}

/// Owns everything an [`ActionContext`] borrows.
pub struct Harness {
    pub its: RecordingIts,
    pub commits: Option<Box<dyn CommitSource>>,
    pub issues: IssueExtractor,
    pub rules: RuleBase,
    pub executor: ActionExecutor,
}

impl Harness {
    pub fn new(its: RecordingIts) -> Self {
        Harness {
            its,
            commits: None,
            issues: IssueExtractor::compile("(?i)bug[ #]?(\\d+)", 1).unwrap(),
            rules: RuleBase::default(),
            executor: ActionExecutor::new("/nonexistent/templates"),
        }
    }

    pub fn ctx(&self) -> ActionContext<'_> {
        ActionContext {
            its: &self.its,
            commits: self.commits.as_deref(),
            issues: &self.issues,
            rules: &self.rules,
            executor: &self.executor,
            depth: 0,
        }
    }

    /// Execute one action specification for `issue`.
    pub fn run(&self, issue: &str, spec: &str, properties: &PropertySet) -> Result<()> {
        self.executor
            .execute_one(&self.ctx(), issue, &ActionRequest::new(spec), properties)
    }
}

/// Property set from `(key, value)` pairs.
pub fn props(pairs: &[(&str, &str)]) -> PropertySet {
    pairs.iter().map(|(k, v)| Property::new(*k, *v)).collect()
}
