// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Name-to-action dispatch with per-action failure isolation.

use std::collections::BTreeMap;
use std::ops::AddAssign;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, error};

use super::add_comment::AddComment;
use super::add_related_link::AddRelatedLink;
use super::add_standard_comment::AddStandardComment;
use super::add_templated_comment::AddTemplatedComment;
use super::add_value_to_field::AddValueToField;
use super::create_version::CreateVersion;
use super::fire_event_on_commits::FireEventOnCommits;
use super::log_event::LogEvent;
use super::{Action, ActionContext};
use crate::action_request::ActionRequest;
use crate::error::Result;
use crate::property::PropertySet;

/// Counts of executed and failed actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub executed: usize,
    pub failed: usize,
}

impl AddAssign for Outcome {
    fn add_assign(&mut self, other: Outcome) {
        self.executed += other.executed;
        self.failed += other.failed;
    }
}

/// Registry of named actions.
#[derive(Clone, Default)]
pub struct ActionExecutor {
    actions: BTreeMap<String, Arc<dyn Action>>,
}

impl ActionExecutor {
    /// Executor with every built-in action registered.
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        let mut executor = ActionExecutor::empty();
        let templated: Arc<dyn Action> = Arc::new(AddTemplatedComment::new(templates_dir));
        let field: Arc<dyn Action> = Arc::new(AddValueToField);
        let version: Arc<dyn Action> = Arc::new(CreateVersion);

        executor.register("add-comment", Arc::new(AddComment));
        executor.register("add-standard-comment", Arc::new(AddStandardComment));
        executor.register("add-templated-comment", templated.clone());
        executor.register("add-soy-comment", templated);
        executor.register("add-related-link", Arc::new(AddRelatedLink));
        executor.register("log-event", Arc::new(LogEvent));
        executor.register("add-value-to-field", field.clone());
        executor.register("add-property-to-field", field);
        executor.register("create-version", version.clone());
        executor.register("create-version-from-property", version);
        executor.register("fire-event-on-commits", Arc::new(FireEventOnCommits));
        executor
    }

    /// Executor without any registered action.
    pub fn empty() -> Self {
        ActionExecutor::default()
    }

    /// Register `action` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &str, action: Arc<dyn Action>) {
        self.actions.insert(name.to_string(), action);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Run one request. Unregistered names become a free-form tracker action.
    pub fn execute_one(
        &self,
        ctx: &ActionContext<'_>,
        issue: &str,
        request: &ActionRequest,
        properties: &PropertySet,
    ) -> Result<()> {
        match self.actions.get(request.name()) {
            Some(action) => action.execute(ctx, issue, request, properties),
            None => {
                debug!("no action named {}, passing it to the tracker", request.name());
                ctx.its.perform_action(issue, request.unparsed())
            }
        }
    }

    /// Run every request in order. A failing action is logged and skipped.
    pub fn execute(
        &self,
        ctx: &ActionContext<'_>,
        issue: &str,
        requests: &[&ActionRequest],
        properties: &PropertySet,
    ) -> Outcome {
        let mut outcome = Outcome::default();
        for request in requests {
            outcome.executed += 1;
            if let Err(e) = self.execute_one(ctx, issue, request, properties) {
                outcome.failed += 1;
                error!("action '{}' failed for issue {}: {}", request, issue, e);
            }
        }
        outcome
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
