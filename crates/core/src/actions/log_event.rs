// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `log-event [error|warn|info|debug]`

use tracing::{event, warn, Level};

use super::{Action, ActionContext};
use crate::action_request::ActionRequest;
use crate::error::{Error, Result};
use crate::property::PropertySet;

/// Logs every property of the matched set at the requested level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEvent;

impl Action for LogEvent {
    fn execute(
        &self,
        _ctx: &ActionContext<'_>,
        issue: &str,
        request: &ActionRequest,
        properties: &PropertySet,
    ) -> Result<()> {
        let level = parse_level(request.parameter(1)).unwrap_or_else(|e| {
            warn!("{}, logging at info", e);
            Level::INFO
        });
        for property in properties {
            match level {
                Level::ERROR => event!(Level::ERROR, issue, "{}", property),
                Level::WARN => event!(Level::WARN, issue, "{}", property),
                Level::DEBUG => event!(Level::DEBUG, issue, "{}", property),
                Level::TRACE => event!(Level::TRACE, issue, "{}", property),
                _ => event!(Level::INFO, issue, "{}", property),
            }
        }
        Ok(())
    }
}

/// Parse a level name. Empty means info.
pub fn parse_level(name: &str) -> Result<Level> {
    match name.to_ascii_lowercase().as_str() {
        "" | "info" => Ok(Level::INFO),
        "error" => Ok(Level::ERROR),
        "warn" | "warning" => Ok(Level::WARN),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(Error::InvalidLogLevel(name.to_string())),
    }
}
