// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `add-value-to-field <property> <field-id>`

use tracing::debug;

use super::{Action, ActionContext};
use crate::action_request::ActionRequest;
use crate::error::Result;
use crate::property::PropertySet;

/// Adds the first value of a property to a tracker field of the issue.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddValueToField;

impl Action for AddValueToField {
    fn execute(
        &self,
        ctx: &ActionContext<'_>,
        issue: &str,
        request: &ActionRequest,
        properties: &PropertySet,
    ) -> Result<()> {
        let (property, field) = (request.parameter(1), request.parameter(2));
        if property.is_empty() || field.is_empty() {
            debug!("'{}' needs a property and a field id", request);
            return Ok(());
        }
        match properties.first(property) {
            Some(value) => ctx.its.add_value_to_field(issue, value, field),
            None => {
                debug!("no {} property, leaving field {} of {}", property, field, issue);
                Ok(())
            }
        }
    }
}
