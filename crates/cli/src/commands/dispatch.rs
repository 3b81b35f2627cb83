// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;
use std::sync::Arc;

use its_core::{ActionController, ItsConfig, Outcome, RepoEvent};

use crate::dry_run::DryRunIts;
use crate::error::Result;
use crate::input::read_input;

pub fn run(config: ItsConfig, file: Option<&Path>) -> Result<()> {
    let event = RepoEvent::from_json(&read_input(file)?)?;
    if !config.is_enabled_for_event(&event) {
        eprintln!(
            "warning: {} is not enabled for this event, nothing to do",
            config.name
        );
    }

    let its = Arc::new(DryRunIts::new(&config.name));
    let controller = ActionController::from_config(its, config);
    let outcome = controller.handle_event(&event);
    println!("{}", summary(outcome));
    Ok(())
}

pub(crate) fn summary(outcome: Outcome) -> String {
    format!(
        "dispatched {} action(s), {} failed",
        outcome.executed, outcome.failed
    )
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
