// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! itsrs - command line front end for the its-core rule engine.
//!
//! The `its` binary inspects rule files and issue patterns, replays review
//! events through the rule base without touching a tracker, and checks
//! commit messages against a project's association policy.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - argument parsing
//! - [`config::load_config`] - locating the site configuration
//! - [`dry_run::DryRunIts`] - a tracker that prints calls instead of making them
//! - [`Error`] - Error types for all commands

mod cli;
mod commands;
mod input;

pub mod config;
pub mod dry_run;
pub mod env;
pub mod error;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{Error, Result};

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `ITS_LOG` takes precedence; otherwise warnings only, or debug with
/// `verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(env::vars::ITS_LOG)
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Execute a CLI command against the configuration at `config`, or the
/// default locations when `None`.
pub fn run(command: Command, config: Option<&Path>) -> Result<()> {
    let site = config::load_config(config)?;
    match command {
        Command::Rules { output } => commands::rules::run(&site, output),
        Command::Extract {
            pattern,
            group,
            project,
            file,
            output,
        } => commands::extract::run(
            &site,
            pattern.as_deref(),
            group,
            project.as_deref(),
            file.as_deref(),
            output,
        ),
        Command::Dispatch { file } => commands::dispatch::run(site, file.as_deref()),
        Command::Validate {
            project,
            ref_name,
            commit,
            missing,
            file,
        } => commands::validate::run(
            site,
            commands::validate::ValidateArgs {
                project: &project,
                ref_name: &ref_name,
                commit: &commit,
                missing: &missing,
                file: file.as_deref(),
            },
        ),
    }
}
