// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue-id extraction from commit messages.
//!
//! Issue ids are pulled from a capture group of the configured pattern and
//! tagged with where in the message they occur:
//!
//! - `subject`: the first line
//! - `body`: everything between the subject and the footer
//! - `footer`: the last block of non-blank lines, unless that block starts
//!   at the subject
//! - `footer-<key>`: footer lines shaped like `Key: value`
//! - `somewhere`: anywhere in the message
//! - `added@<tag>`: tags gained relative to the previous patch set

use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;

pub const SUBJECT: &str = "subject";
pub const BODY: &str = "body";
pub const FOOTER: &str = "footer";
pub const SOMEWHERE: &str = "somewhere";
pub const ADDED_PREFIX: &str = "added@";

/// Issue id to the set of occurrence tags it carries.
pub type Occurrences = BTreeMap<String, BTreeSet<String>>;

/// Extracts issue ids using a project's configured pattern.
#[derive(Debug, Clone, Default)]
pub struct IssueExtractor {
    pattern: Option<Regex>,
    group: usize,
}

impl IssueExtractor {
    /// Build an extractor; `group_index` is clamped to the pattern's groups.
    pub fn new(pattern: Option<Regex>, group_index: i64) -> Self {
        let group = pattern
            .as_ref()
            .map(|re| clamp_group(re, group_index))
            .unwrap_or(0);
        IssueExtractor { pattern, group }
    }

    /// Compile `pattern` and build an extractor from it.
    pub fn compile(pattern: &str, group_index: i64) -> Result<Self> {
        Ok(IssueExtractor::new(Some(Regex::new(pattern)?), group_index))
    }

    /// An extractor without a pattern; finds nothing.
    pub fn disabled() -> Self {
        IssueExtractor::default()
    }

    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }

    /// The capture group issue ids are taken from, after clamping.
    pub fn group(&self) -> usize {
        self.group
    }

    /// Distinct issue ids found anywhere in `haystack`.
    pub fn extract(&self, haystack: &str) -> BTreeSet<String> {
        match &self.pattern {
            Some(re) => extract_issue_ids(haystack, re, self.group as i64),
            None => BTreeSet::new(),
        }
    }

    /// Issue ids of a commit message, tagged by where they occur.
    pub fn extract_with_occurrences(&self, message: &str) -> Occurrences {
        let mut occurrences = Occurrences::new();
        if self.pattern.is_none() {
            return occurrences;
        }

        let lines: Vec<&str> = message.lines().collect();
        if let Some(subject) = lines.first() {
            self.tag(&mut occurrences, subject, SUBJECT);

            let (footer_start, footer_end) = footer_bounds(&lines);
            let body_end = footer_start.unwrap_or(lines.len());
            if body_end > 1 {
                self.tag(&mut occurrences, &lines[1..body_end].join("\n"), BODY);
            }

            if let Some(start) = footer_start {
                for line in &lines[start..footer_end] {
                    self.tag(&mut occurrences, line, FOOTER);
                    if let Some(colon) = line.find(':').filter(|pos| *pos > 0) {
                        let tag = format!("{}-{}", FOOTER, &line[..colon]);
                        self.tag(&mut occurrences, line, &tag);
                    }
                }
            }
        }

        self.tag(&mut occurrences, message, SOMEWHERE);
        occurrences
    }

    fn tag(&self, occurrences: &mut Occurrences, haystack: &str, tag: &str) {
        for id in self.extract(haystack) {
            occurrences.entry(id).or_default().insert(tag.to_string());
        }
    }
}

/// Run `pattern` globally over `haystack`, collecting group `group_index`.
///
/// Out-of-range group indices fall back to 1 when the pattern has groups and
/// to the whole match otherwise. Blank ids are dropped.
pub fn extract_issue_ids(haystack: &str, pattern: &Regex, group_index: i64) -> BTreeSet<String> {
    collect_ids(haystack, pattern, clamp_group(pattern, group_index))
}

/// Add `added@<tag>` for every tag an issue gained since `previous`.
///
/// With no previous patch set every tag counts as gained.
pub fn mark_added(current: &mut Occurrences, previous: Option<&Occurrences>) {
    for (issue, tags) in current.iter_mut() {
        let before = previous.and_then(|p| p.get(issue));
        let gained: Vec<String> = tags
            .iter()
            .filter(|tag| before.is_none_or(|b| !b.contains(*tag)))
            .map(|tag| format!("{}{}", ADDED_PREFIX, tag))
            .collect();
        tags.extend(gained);
    }
}

fn clamp_group(pattern: &Regex, group_index: i64) -> usize {
    let groups = pattern.captures_len().saturating_sub(1);
    match usize::try_from(group_index) {
        Ok(index) if index <= groups => index,
        _ if groups > 0 => 1,
        _ => 0,
    }
}

fn collect_ids(haystack: &str, pattern: &Regex, group: usize) -> BTreeSet<String> {
    pattern
        .captures_iter(haystack)
        .filter_map(|caps| caps.get(group))
        .map(|m| m.as_str().trim())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Locate the footer block as `(start, end)` line indices.
///
/// Trailing blank lines are skipped; the contiguous non-blank block before
/// them is the footer unless it reaches back to the subject line.
fn footer_bounds(lines: &[&str]) -> (Option<usize>, usize) {
    let blank = |line: &str| line.trim().is_empty();

    let mut idx = lines.len();
    while idx > 0 && blank(lines[idx - 1]) {
        idx -= 1;
    }
    let end = idx;
    while idx > 0 && !blank(lines[idx - 1]) {
        idx -= 1;
    }

    if idx == 0 {
        (None, end)
    } else {
        (Some(idx), end)
    }
}

#[cfg(test)]
#[path = "issue_extractor_tests.rs"]
mod tests;
