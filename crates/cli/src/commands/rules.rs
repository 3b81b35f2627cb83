// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use its_core::{ActionExecutor, ItsConfig, Rule, RuleBase};

use crate::cli::OutputFormat;
use crate::error::Result;

#[derive(Serialize)]
struct RuleView<'a> {
    name: &'a str,
    conditions: Vec<ConditionView<'a>>,
    actions: Vec<ActionView<'a>>,
}

#[derive(Serialize)]
struct ConditionView<'a> {
    key: &'a str,
    values: &'a [String],
    negated: bool,
}

#[derive(Serialize)]
struct ActionView<'a> {
    name: &'a str,
    parameters: &'a [String],
    /// Not a built-in action; handed to the tracker as is.
    tracker: bool,
}

pub fn run(config: &ItsConfig, output: OutputFormat) -> Result<()> {
    let rules = RuleBase::load_dir(&config.rules_dir, &config.name);
    let executor = ActionExecutor::new(config.templates_dir());
    print!("{}", render(&rules, &executor, output)?);
    Ok(())
}

pub(crate) fn render(
    rules: &RuleBase,
    executor: &ActionExecutor,
    output: OutputFormat,
) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(render_text(rules, executor)),
        OutputFormat::Json => {
            let views: Vec<_> = rules.rules().iter().map(|r| view(r, executor)).collect();
            Ok(format!("{}\n", serde_json::to_string_pretty(&views)?))
        }
    }
}

fn view<'a>(rule: &'a Rule, executor: &ActionExecutor) -> RuleView<'a> {
    RuleView {
        name: rule.name(),
        conditions: rule
            .conditions()
            .iter()
            .map(|c| ConditionView {
                key: c.key(),
                values: c.values(),
                negated: c.is_negated(),
            })
            .collect(),
        actions: rule
            .actions()
            .iter()
            .map(|a| ActionView {
                name: a.name(),
                parameters: a.parameters(),
                tracker: !executor.is_registered(a.name()),
            })
            .collect(),
    }
}

fn render_text(rules: &RuleBase, executor: &ActionExecutor) -> String {
    if rules.is_empty() {
        return "No rules loaded.\n".to_string();
    }

    let mut out = String::new();
    for (i, rule) in rules.rules().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("rule \"{}\"\n", rule.name()));
        for condition in rule.conditions() {
            out.push_str(&format!("  {}\n", condition));
        }
        for action in rule.actions() {
            if executor.is_registered(action.name()) {
                out.push_str(&format!("  action = {}\n", action));
            } else {
                out.push_str(&format!("  action = {}  (tracker action)\n", action));
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
