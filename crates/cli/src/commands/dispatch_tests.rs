// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use its_core::RuleBase;

const CONFIG: &str = r#"
name = "trouble"

[projects.tools]
enabled = true
issue-pattern = "(?i)bug[ #]?(\\d+)"
"#;

const RULES: &str = r#"
[rule "merged"]
    event-type = change-merged
    action = add-comment Merged
    action = "Resolve Issue"
"#;

const MERGED: &str = r#"{
    "type": "change-merged",
    "change": {"project": "tools", "branch": "main", "number": 3,
               "commitMessage": "Fix bug 12\n\nChange-Id: I1"},
    "patchSet": {"number": 1, "revision": "abc"},
    "submitter": {"name": "Ada"}
}"#;

#[test]
fn summary_counts_actions() {
    let outcome = Outcome {
        executed: 3,
        failed: 1,
    };
    assert_eq!(summary(outcome), "dispatched 3 action(s), 1 failed");
}

#[test]
fn dry_run_records_tracker_calls() {
    let its = Arc::new(DryRunIts::new("trouble").quiet());
    let controller = ActionController::new(
        its.clone(),
        ItsConfig::parse(CONFIG).unwrap(),
        RuleBase::parse(RULES).unwrap(),
    );

    let outcome = controller.handle_event(&RepoEvent::from_json(MERGED).unwrap());
    assert_eq!(summary(outcome), "dispatched 2 action(s), 0 failed");
    assert_eq!(
        its.lines(),
        vec![
            r#"12: add-comment "Merged""#.to_string(),
            r#"12: perform-action "Resolve Issue""#.to_string(),
        ]
    );
}
