// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commit-receive validation of issue references.
//!
//! The association policy of the target project decides what happens to a
//! commit that references no issue, or only issues the tracker does not know:
//! - `optional`: nothing is checked
//! - `suggested`: problems are reported as advisory messages
//! - `mandatory`: problems reject the commit

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{AssociationPolicy, ItsConfig};
use crate::error::{Error, Result};
use crate::its::ItsFacade;

const ABBREVIATED_ID_LEN: usize = 7;

/// One message shown to the client pushing a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessage {
    pub message: String,
    pub is_error: bool,
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A commit as received by the host, before it is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceivedCommit {
    pub project: String,
    /// Full target ref, e.g. `refs/heads/main`.
    pub ref_name: String,
    pub commit_id: String,
    pub message: String,
}

pub struct CommitValidator {
    its: Arc<dyn ItsFacade>,
    config: ItsConfig,
}

impl CommitValidator {
    pub fn new(its: Arc<dyn ItsFacade>, config: ItsConfig) -> Self {
        CommitValidator { its, config }
    }

    /// Check `commit` against the project's association policy.
    ///
    /// Returns advisory messages, or [`Error::CommitRejected`] when the
    /// policy is mandatory and a check failed.
    pub fn on_commit_received(&self, commit: &ReceivedCommit) -> Result<Vec<ValidationMessage>> {
        if !self.config.is_enabled(&commit.project, &commit.ref_name) {
            debug!(
                "not validating {} for {} {}",
                commit.commit_id, commit.project, commit.ref_name
            );
            return Ok(Vec::new());
        }

        let policy = self.config.association_policy(&commit.project);
        if policy == AssociationPolicy::Optional {
            return Ok(Vec::new());
        }
        let is_error = policy == AssociationPolicy::Mandatory;
        let failure = |synopsis: &str, details: &str| ValidationMessage {
            message: format!("{}\n{}", synopsis, details),
            is_error,
        };

        let extractor = self.config.issue_extractor(&commit.project);
        let issues = extractor.extract(&commit.message);
        let mut messages = Vec::new();
        let mut synopsis = None;

        if issues.is_empty() {
            let text = "Missing issue-id in commit message";
            let pattern = extractor.pattern().map(|re| re.as_str()).unwrap_or_default();
            let details = format!(
                "Commit {} not associated to any issue\n\
                 \n\
                 Hint: insert one or more issue-id anywhere in the commit message.\n      \
                 Issue-ids are strings matching {}\n      \
                 and are pointing to existing tickets on {} Issue-Tracker",
                abbreviate(&commit.commit_id),
                pattern,
                self.config.name
            );
            messages.push(failure(text, &details));
            synopsis = Some(text.to_string());
        } else {
            let mut missing = Vec::new();
            for issue in &issues {
                match self.its.exists(issue) {
                    Ok(true) => {}
                    Ok(false) => missing.push(issue.as_str()),
                    Err(e) => {
                        let text = format!("Failed to check whether or not issue {} exists", issue);
                        warn!("{}: {}", text, e);
                        messages.push(failure(&text, &e.to_string()));
                        synopsis = Some(text);
                        missing.push(issue.as_str());
                    }
                }
            }

            if !missing.is_empty() {
                let text = "Non-existing issue ids referenced in commit message";
                let mut details = String::from("The issue-ids\n");
                for issue in &missing {
                    details.push_str(&format!("    * {}\n", issue));
                }
                details.push_str(&format!(
                    "are referenced in the commit message of\n{},\nbut do not exist in {} Issue-Tracker",
                    commit.commit_id, self.config.name
                ));
                messages.push(failure(text, &details));
                synopsis = Some(text.to_string());
            }
        }

        match synopsis {
            Some(synopsis) if is_error => Err(Error::CommitRejected { synopsis, messages }),
            _ => Ok(messages),
        }
    }
}

fn abbreviate(commit_id: &str) -> &str {
    commit_id.get(..ABBREVIATED_ID_LEN).unwrap_or(commit_id)
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
