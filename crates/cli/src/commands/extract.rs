// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use its_core::{IssueExtractor, ItsConfig, Occurrences};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use crate::input::read_input;

pub fn run(
    config: &ItsConfig,
    pattern: Option<&str>,
    group: i64,
    project: Option<&str>,
    file: Option<&Path>,
    output: OutputFormat,
) -> Result<()> {
    let extractor = extractor(config, pattern, group, project)?;
    let message = read_input(file)?;
    print!("{}", render(&extractor.extract_with_occurrences(&message), output)?);
    Ok(())
}

/// An explicit pattern wins over the project's configured one.
pub(crate) fn extractor(
    config: &ItsConfig,
    pattern: Option<&str>,
    group: i64,
    project: Option<&str>,
) -> Result<IssueExtractor> {
    if let Some(pattern) = pattern {
        return Ok(IssueExtractor::compile(pattern, group)?);
    }
    let extractor = match project {
        Some(project) => config.issue_extractor(project),
        None => IssueExtractor::disabled(),
    };
    if extractor.pattern().is_none() {
        return Err(Error::NoPattern);
    }
    Ok(extractor)
}

pub(crate) fn render(occurrences: &Occurrences, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(occurrences)?)),
        OutputFormat::Text => Ok(occurrences
            .iter()
            .map(|(issue, tags)| {
                let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
                format!("{}: {}\n", issue, tags.join(", "))
            })
            .collect()),
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
