// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rules: AND-ed conditions guarding an ordered list of actions.

use crate::action_request::ActionRequest;
use crate::condition::Condition;
use crate::property::Property;

/// A named rule. Immutable once built; see [`RuleBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    name: String,
    conditions: Vec<Condition>,
    actions: Vec<ActionRequest>,
}

impl Rule {
    pub fn builder(name: impl Into<String>) -> RuleBuilder {
        RuleBuilder {
            name: name.into(),
            conditions: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn actions(&self) -> &[ActionRequest] {
        &self.actions
    }

    /// The configured actions when every condition holds, else nothing.
    pub fn action_requests_for(&self, properties: &[Property]) -> &[ActionRequest] {
        if self.conditions.iter().all(|c| c.is_met_by(properties)) {
            &self.actions
        } else {
            &[]
        }
    }
}

/// Accumulates a rule while its configuration section is read.
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    name: String,
    conditions: Vec<Condition>,
    actions: Vec<ActionRequest>,
}

impl RuleBuilder {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a condition. Repeating a key adds another AND-ed condition.
    pub fn condition(mut self, key: &str, spec: &str) -> Self {
        self.add_condition(key, spec);
        self
    }

    pub fn action(mut self, spec: &str) -> Self {
        self.add_action(spec);
        self
    }

    pub fn add_condition(&mut self, key: &str, spec: &str) {
        self.conditions.push(Condition::new(key, Some(spec)));
    }

    pub fn add_action(&mut self, spec: &str) {
        self.actions.push(ActionRequest::new(spec));
    }

    pub fn build(self) -> Rule {
        Rule {
            name: self.name,
            conditions: self.conditions,
            actions: self.actions,
        }
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
