// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `fire-event-on-commits since-last-tag`
//!
//! Re-runs the rule base for every issue referenced by the commits between
//! the triggering revision and the last tag. Fired actions cannot fire again.

use tracing::{debug, error, warn};

use super::{Action, ActionContext};
use crate::action_request::ActionRequest;
use crate::error::{Error, Result};
use crate::property::{Property, PropertySet, ASSOCIATION, ISSUE};

const SINCE_LAST_TAG: &str = "since-last-tag";
const MAX_DEPTH: usize = 1;

#[derive(Debug, Clone, Copy, Default)]
pub struct FireEventOnCommits;

impl Action for FireEventOnCommits {
    fn execute(
        &self,
        ctx: &ActionContext<'_>,
        _issue: &str,
        request: &ActionRequest,
        properties: &PropertySet,
    ) -> Result<()> {
        if ctx.depth >= MAX_DEPTH {
            warn!("ignoring nested '{}'", request);
            return Ok(());
        }
        if request.parameter(1) != SINCE_LAST_TAG {
            return Err(Error::InvalidActionParameter {
                action: request.name().to_string(),
                parameter: request.parameter(1).to_string(),
            });
        }
        let commits = ctx
            .commits
            .ok_or_else(|| Error::Commit("no commit source to walk history".to_string()))?;
        let (Some(project), Some(revision)) =
            (properties.first("project"), properties.first("revision"))
        else {
            debug!("'{}' needs project and revision properties", request);
            return Ok(());
        };

        let nested = ActionContext {
            depth: ctx.depth + 1,
            ..*ctx
        };
        let base = properties.without(&["revision", ISSUE, ASSOCIATION]);

        for commit in commits.commits_since_last_tag(project, revision)? {
            let message = match commits.commit_message(project, &commit) {
                Ok(message) => message,
                Err(e) => {
                    error!("could not read commit {} in {}: {}", commit, project, e);
                    continue;
                }
            };
            for (issue, tags) in ctx.issues.extract_with_occurrences(&message) {
                let mut props = base.clone();
                props.push(Property::new("revision", commit.as_str()));
                props.push(Property::new(ISSUE, issue.as_str()));
                props.extend(tags.into_iter().map(|tag| Property::new(ASSOCIATION, tag)));

                let actions = ctx.rules.action_requests_for(props.as_slice());
                if actions.is_empty() {
                    continue;
                }
                debug!("firing {} action(s) for {} at {}", actions.len(), issue, commit);
                ctx.executor.execute(&nested, &issue, &actions, &props);
            }
        }
        Ok(())
    }
}
