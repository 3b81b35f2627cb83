// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;
use std::sync::Arc;

use its_core::{CommitValidator, ItsConfig, ReceivedCommit};

use crate::dry_run::DryRunIts;
use crate::error::Result;
use crate::input::read_input;

/// Arguments of `its validate`.
pub struct ValidateArgs<'a> {
    pub project: &'a str,
    pub ref_name: &'a str,
    pub commit: &'a str,
    pub missing: &'a [String],
    pub file: Option<&'a Path>,
}

pub fn run(config: ItsConfig, args: ValidateArgs<'_>) -> Result<()> {
    let commit = ReceivedCommit {
        project: args.project.to_string(),
        ref_name: args.ref_name.to_string(),
        commit_id: args.commit.to_string(),
        message: read_input(args.file)?,
    };
    let its = DryRunIts::new(&config.name).with_missing(args.missing.iter().cloned());
    let validator = CommitValidator::new(Arc::new(its), config);

    match validator.on_commit_received(&commit) {
        Ok(messages) => {
            if messages.is_empty() {
                println!("ok");
            }
            for message in messages {
                println!("warning: {}", message);
            }
            Ok(())
        }
        Err(its_core::Error::CommitRejected { synopsis, messages }) => {
            for message in &messages {
                eprintln!("{}", message);
            }
            Err(crate::error::Error::CommitRejected(synopsis))
        }
        Err(e) => Err(e.into()),
    }
}
