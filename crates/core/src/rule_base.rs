// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The ordered collection of configured rules.
//!
//! Rules are read from `[rule "<name>"]` sections. Every key other than
//! `action` becomes a condition; `action` entries become the rule's action
//! list. Other sections are ignored. A missing or unreadable rule file
//! leaves the rule base empty.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::action_request::ActionRequest;
use crate::error::{Error, Result};
use crate::property::Property;
use crate::rule::{Rule, RuleBuilder};
use crate::rule_file;

/// Rule file shared by every tracker.
pub const ACTIONS_FILE: &str = "actions.config";

const RULE_SECTION: &str = "rule";
const ACTION_KEY: &str = "action";

/// Rules in definition order. Built once, then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleBase { rules }
    }

    /// Parse rule file text. Sections sharing a rule name are merged.
    pub fn parse(input: &str) -> Result<Self> {
        let mut builders: Vec<RuleBuilder> = Vec::new();

        for section in rule_file::parse(input)? {
            let name = match (section.name.as_str(), section.subsection) {
                (RULE_SECTION, Some(name)) => name,
                (other, _) => {
                    debug!("ignoring section [{}] in rule file", other);
                    continue;
                }
            };

            let index = match builders.iter().position(|b| b.name() == name) {
                Some(index) => index,
                None => {
                    builders.push(Rule::builder(name));
                    builders.len() - 1
                }
            };
            let builder = &mut builders[index];

            for entry in section.entries {
                if entry.key.eq_ignore_ascii_case(ACTION_KEY) {
                    builder.add_action(&entry.value);
                } else {
                    builder.add_condition(&entry.key, &entry.value);
                }
            }
        }

        Ok(RuleBase::new(
            builders.into_iter().map(RuleBuilder::build).collect(),
        ))
    }

    /// Load one rule file, degrading to an empty rule base on any failure.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            warn!(
                "rule file {} not found, no actions will be performed",
                path.display()
            );
            return RuleBase::default();
        }

        let loaded = fs::read_to_string(path)
            .map_err(Error::from)
            .and_then(|content| RuleBase::parse(&content));
        match loaded {
            Ok(rule_base) => {
                info!(
                    "loaded {} rule(s) from {}",
                    rule_base.rules.len(),
                    path.display()
                );
                rule_base
            }
            Err(e) => {
                warn!("failed to load rule file {}: {}", path.display(), e);
                RuleBase::default()
            }
        }
    }

    /// Load `actions.config` plus the tracker-specific `actions-<its>.config`.
    pub fn load_dir(dir: &Path, its_name: &str) -> Self {
        let specific = format!("actions-{}.config", its_name);
        let mut rules = Vec::new();

        for file in [ACTIONS_FILE, specific.as_str()] {
            let path = dir.join(file);
            if path.exists() {
                rules.extend(RuleBase::load(&path).rules);
            } else {
                debug!("no rule file at {}", path.display());
            }
        }

        if rules.is_empty() {
            warn!(
                "no rules configured in {}, no actions will be performed",
                dir.display()
            );
        }
        RuleBase::new(rules)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Matching actions of every rule, in rule order, duplicates kept.
    pub fn action_requests_for(&self, properties: &[Property]) -> Vec<&ActionRequest> {
        self.rules
            .iter()
            .flat_map(|rule| rule.action_requests_for(properties))
            .collect()
    }
}

#[cfg(test)]
#[path = "rule_base_tests.rs"]
mod tests;
