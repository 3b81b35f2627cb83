// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `add-related-link`

use tracing::debug;

use super::{Action, ActionContext};
use crate::action_request::ActionRequest;
use crate::error::Result;
use crate::property::PropertySet;

/// Links the change's web URL to the issue, described by its subject.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddRelatedLink;

impl Action for AddRelatedLink {
    fn execute(
        &self,
        ctx: &ActionContext<'_>,
        issue: &str,
        _request: &ActionRequest,
        properties: &PropertySet,
    ) -> Result<()> {
        let Some(url) = properties.first("change-url") else {
            debug!("no change-url, not linking {}", issue);
            return Ok(());
        };
        let description = properties.first("subject").unwrap_or(url);
        ctx.its.add_related_link(issue, url, description)
    }
}
