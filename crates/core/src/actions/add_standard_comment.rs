// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `add-standard-comment`
//!
//! Posts a canned comment describing a change state transition:
//!
//! ```text
//! Change 4711 merged by Ada Lovelace:
//! Fix crash on empty input
//!
//! Reason:
//! <reason, when the event has one>
//!
//! <link to the change>
//! ```

use tracing::debug;

use super::{Action, ActionContext};
use crate::action_request::ActionRequest;
use crate::error::Result;
use crate::its::ItsFacade;
use crate::property::PropertySet;

#[derive(Debug, Clone, Copy, Default)]
pub struct AddStandardComment;

impl Action for AddStandardComment {
    fn execute(
        &self,
        ctx: &ActionContext<'_>,
        issue: &str,
        _request: &ActionRequest,
        properties: &PropertySet,
    ) -> Result<()> {
        match standard_comment(ctx.its, properties) {
            Some(comment) => ctx.its.add_comment(issue, &comment),
            None => {
                debug!(
                    "no standard comment for {}",
                    properties.first("event-type").unwrap_or("unknown event")
                );
                Ok(())
            }
        }
    }
}

/// The canned text for the set's event type, if it has one.
pub fn standard_comment(its: &dyn ItsFacade, properties: &PropertySet) -> Option<String> {
    let (verb, role) = match properties.first("event-type")? {
        "change-abandoned" => ("abandoned", "abandoner"),
        "change-merged" => ("merged", "submitter"),
        "change-restored" => ("restored", "restorer"),
        "patchset-created" => ("had a related patch set uploaded", "uploader"),
        _ => return None,
    };

    let mut comment = String::from("Change ");
    if let Some(number) = properties.first("change-number") {
        comment.push_str(number);
        comment.push(' ');
    }
    comment.push_str(verb);

    let person = properties
        .first(&format!("{}-name", role))
        .or_else(|| properties.first(&format!("{}-username", role)));
    if let Some(person) = person {
        comment.push_str(" by ");
        comment.push_str(person);
    }
    if let Some(subject) = properties.first("subject") {
        comment.push_str(":\n");
        comment.push_str(subject);
    }
    if let Some(reason) = properties.first("reason") {
        comment.push_str("\n\nReason:\n");
        comment.push_str(reason);
    }
    if let Some(url) = properties.first("change-url") {
        comment.push_str("\n\n");
        comment.push_str(&its.create_link_for_webui(url, url));
    }
    Some(comment)
}
