// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `create-version <property>`

use tracing::debug;

use super::{Action, ActionContext};
use crate::action_request::ActionRequest;
use crate::error::Result;
use crate::property::PropertySet;

/// Creates a tracker version named by a property, in the tracker project
/// named by the `project` property.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateVersion;

impl Action for CreateVersion {
    fn execute(
        &self,
        ctx: &ActionContext<'_>,
        _issue: &str,
        request: &ActionRequest,
        properties: &PropertySet,
    ) -> Result<()> {
        let property = request.parameter(1);
        let version = properties.first(property).filter(|_| !property.is_empty());
        match (properties.first("project"), version) {
            (Some(project), Some(version)) => ctx.its.create_version(project, version),
            _ => {
                debug!("'{}' has no project or version to create", request);
                Ok(())
            }
        }
    }
}
