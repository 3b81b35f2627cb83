// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading the git-config style rule file.
//!
//! ```text
//! [rule "merged"]
//!     event-type = change-merged
//!     association = subject,footer
//!     action = add-standard-comment
//!     action = "log-event info"   ; comments start with ; or #
//! ```
//!
//! Syntax, quoting and escapes follow git; `gix-config` does the parsing.
//! Section names are lowercased, subsections and keys keep their case.

use std::collections::HashSet;

use crate::error::{Error, Result};

/// One `[name "subsection"]` block and its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub subsection: Option<String>,
    pub entries: Vec<Entry>,
}

/// A `key = value` line inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// Parse a rule file into its sections, in file order.
///
/// Repeated keys keep their order. Entries are grouped by key in order of
/// each key's first appearance.
pub fn parse(input: &str) -> Result<Vec<Section>> {
    let file = gix_config::File::try_from(input).map_err(|e| Error::RuleFile(e.to_string()))?;

    let sections = file
        .sections()
        .map(|section| {
            let header = section.header();
            let mut seen = HashSet::new();
            let mut entries = Vec::new();
            for name in section.body().value_names() {
                let key = name.to_string();
                if !seen.insert(key.to_ascii_lowercase()) {
                    continue;
                }
                for value in section.body().values(&key) {
                    entries.push(Entry {
                        key: key.clone(),
                        value: value.to_string(),
                    });
                }
            }
            Section {
                name: header.name().to_string().to_ascii_lowercase(),
                subsection: header.subsection_name().map(|s| s.to_string()),
                entries,
            }
        })
        .collect();
    Ok(sections)
}

#[cfg(test)]
#[path = "rule_file_tests.rs"]
mod tests;
