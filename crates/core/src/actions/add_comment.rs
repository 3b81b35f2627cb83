// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `add-comment <text...>`

use tracing::debug;

use super::{Action, ActionContext};
use crate::action_request::ActionRequest;
use crate::error::Result;
use crate::property::PropertySet;

/// Posts the request's parameters, joined by spaces, as a comment.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddComment;

impl Action for AddComment {
    fn execute(
        &self,
        ctx: &ActionContext<'_>,
        issue: &str,
        request: &ActionRequest,
        _properties: &PropertySet,
    ) -> Result<()> {
        let comment = request.parameters().join(" ");
        if comment.is_empty() {
            debug!("add-comment without text, nothing to post on {}", issue);
            return Ok(());
        }
        ctx.its.add_comment(issue, &comment)
    }
}
