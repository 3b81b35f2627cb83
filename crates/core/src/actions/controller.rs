// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Event entry point: enablement, extraction, matching and dispatch.

use std::sync::Arc;

use tracing::{debug, info};

use super::{ActionContext, ActionExecutor, Outcome};
use crate::commits::CommitSource;
use crate::config::ItsConfig;
use crate::event::RepoEvent;
use crate::its::ItsFacade;
use crate::property::ISSUE;
use crate::property_extractor::PropertyExtractor;
use crate::rule_base::RuleBase;

/// Handles repository events for one tracker.
///
/// Holds only read-only state after construction, so one controller can
/// serve events from several threads at once.
#[derive(Clone)]
pub struct ActionController {
    its: Arc<dyn ItsFacade>,
    commits: Option<Arc<dyn CommitSource>>,
    config: ItsConfig,
    rules: RuleBase,
    executor: ActionExecutor,
}

impl ActionController {
    pub fn new(its: Arc<dyn ItsFacade>, config: ItsConfig, rules: RuleBase) -> Self {
        let executor = ActionExecutor::new(config.templates_dir());
        ActionController {
            its,
            commits: None,
            config,
            rules,
            executor,
        }
    }

    /// Controller whose rules come from the configured rules directory.
    pub fn from_config(its: Arc<dyn ItsFacade>, config: ItsConfig) -> Self {
        let rules = RuleBase::load_dir(&config.rules_dir, &config.name);
        ActionController::new(its, config, rules)
    }

    pub fn with_commits(mut self, commits: Arc<dyn CommitSource>) -> Self {
        self.commits = Some(commits);
        self
    }

    pub fn with_executor(mut self, executor: ActionExecutor) -> Self {
        self.executor = executor;
        self
    }

    pub fn config(&self) -> &ItsConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleBase {
        &self.rules
    }

    /// Run every matching action for every issue `event` refers to.
    ///
    /// Failures of individual actions are logged and counted; nothing is
    /// returned to the caller as an error.
    ///
    /// Only errors are isolated. A panicking action unwinds into the caller,
    /// and release builds abort on panic, so `Action` implementations must
    /// report failures through `Result`.
    pub fn handle_event(&self, event: &RepoEvent) -> Outcome {
        let mut outcome = Outcome::default();
        if !self.config.is_enabled_for_event(event) {
            debug!("{} event not enabled, skipping", event.type_name());
            return outcome;
        }
        let Some(project) = event.project() else {
            return outcome;
        };

        let issues = self.config.issue_extractor(project);
        let extractor = PropertyExtractor::new(&self.config.name, &issues, self.commits.as_deref());
        let ctx = ActionContext {
            its: self.its.as_ref(),
            commits: self.commits.as_deref(),
            issues: &issues,
            rules: &self.rules,
            executor: &self.executor,
            depth: 0,
        };

        for properties in extractor.extract(event) {
            let issue = match properties.first(ISSUE) {
                Some(issue) if !issue.trim().is_empty() => issue,
                _ => continue,
            };
            let actions = self.rules.action_requests_for(properties.as_slice());
            if actions.is_empty() {
                debug!("no rule matched {} for issue {}", event.type_name(), issue);
                continue;
            }
            outcome += self.executor.execute(&ctx, issue, &actions, &properties);
        }

        if outcome.executed > 0 {
            info!(
                "{} event in {}: {} action(s), {} failed",
                event.type_name(),
                project,
                outcome.executed,
                outcome.failed
            );
        }
        outcome
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
