// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `add-templated-comment <template>`

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use super::{Action, ActionContext};
use crate::action_request::ActionRequest;
use crate::error::{Error, Result};
use crate::property::PropertySet;

const TEMPLATE_EXTENSION: &str = "tmpl";

/// Renders `<templates-dir>/<template>.tmpl` and posts it as a comment.
///
/// `${key}` placeholders are replaced with the first value of the property
/// `key`, or nothing when the set has no such property.
#[derive(Debug, Clone)]
pub struct AddTemplatedComment {
    templates_dir: PathBuf,
}

impl AddTemplatedComment {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        AddTemplatedComment {
            templates_dir: templates_dir.into(),
        }
    }

    fn load(&self, name: &str) -> Result<String> {
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(Error::InvalidActionParameter {
                action: "add-templated-comment".to_string(),
                parameter: name.to_string(),
            });
        }
        let path = self
            .templates_dir
            .join(format!("{}.{}", name, TEMPLATE_EXTENSION));
        fs::read_to_string(&path).map_err(|e| Error::Template {
            name: name.to_string(),
            reason: format!("cannot read {}: {}", path.display(), e),
        })
    }
}

impl Action for AddTemplatedComment {
    fn execute(
        &self,
        ctx: &ActionContext<'_>,
        issue: &str,
        request: &ActionRequest,
        properties: &PropertySet,
    ) -> Result<()> {
        let template = self.load(request.parameter(1))?;
        let comment = render(&template, properties);
        if comment.trim().is_empty() {
            debug!("template {} rendered empty", request.parameter(1));
            return Ok(());
        }
        ctx.its.add_comment(issue, &comment)
    }
}

/// Substitute `${key}` placeholders. An unterminated `${` is kept as is.
pub fn render(template: &str, properties: &PropertySet) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                out.push_str(properties.first(after[..end].trim()).unwrap_or_default());
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
