// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use super::*;
use crate::commits::MemoryCommits;
use crate::test_support::{Call, RecordingIts};

const SITE: &str = r#"
name = "trouble"

[projects."All-Projects"]
enabled = true
branches = ["refs/heads/*"]
issue-pattern = "(?i)bug[ #]?(\\d+)"
"#;

const RULES: &str = r#"
[rule "merged"]
    event-type = change-merged
    action = add-standard-comment
    action = "log-event info"

[rule "subject-only"]
    event-type = change-merged
    association = subject
    action = Resolve
"#;

fn merged(branch: &str, message: &str) -> RepoEvent {
    RepoEvent::from_json(&format!(
        r#"{{
            "type": "change-merged",
            "change": {{"project": "tools", "branch": "{}", "number": 5, "subject": "Fix",
                        "commitMessage": {}}},
            "patchSet": {{"number": 1, "revision": "r1"}},
            "submitter": {{"name": "Ada"}}
        }}"#,
        branch,
        serde_json::to_string(message).unwrap()
    ))
    .unwrap()
}

fn controller(its: Arc<RecordingIts>) -> ActionController {
    ActionController::new(
        its,
        ItsConfig::parse(SITE).unwrap(),
        RuleBase::parse(RULES).unwrap(),
    )
}

#[test]
fn dispatches_matching_actions_per_issue() {
    let its = Arc::new(RecordingIts::new("trouble"));
    let outcome = controller(its.clone())
        .handle_event(&merged("main", "Fix bug 1\n\nSee bug 2.\n\nChange-Id: I1"));

    assert_eq!(
        outcome,
        Outcome {
            executed: 5,
            failed: 0
        }
    );
    let calls = its.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(
        calls[0],
        Call::AddComment {
            issue: "1".into(),
            comment: "Change 5 merged by Ada:\nFix".into()
        }
    );
    assert_eq!(
        calls[1],
        Call::PerformAction {
            issue: "1".into(),
            action: "Resolve".into()
        }
    );
    assert!(matches!(&calls[2], Call::AddComment { issue, .. } if issue == "2"));
}

#[test]
fn disabled_branches_are_skipped() {
    let its = Arc::new(RecordingIts::new("trouble"));
    let outcome = controller(its.clone()).handle_event(&RepoEvent::from_json(
        r#"{"type": "change-merged", "change": {"project": "tools", "branch": "refs/meta/config",
            "commitMessage": "Fix bug 1"}, "patchSet": {"number": 1, "revision": "r"}}"#,
    )
    .unwrap());
    assert_eq!(outcome, Outcome::default());
    assert!(its.calls().is_empty());
}

#[test]
fn unknown_events_are_ignored() {
    let its = Arc::new(RecordingIts::new("trouble"));
    assert_eq!(
        controller(its.clone()).handle_event(&RepoEvent::Unknown),
        Outcome::default()
    );
}

#[test]
fn events_without_matching_rules_do_nothing() {
    let its = Arc::new(RecordingIts::new("trouble"));
    let outcome = controller(its.clone()).handle_event(&RepoEvent::from_json(
        r#"{"type": "change-restored", "change": {"project": "tools", "branch": "main",
            "commitMessage": "Fix bug 1"}, "patchSet": {"number": 1, "revision": "r"}}"#,
    )
    .unwrap());
    assert_eq!(outcome.executed, 0);
    assert!(its.calls().is_empty());
}

#[test]
fn tracker_failure_on_one_issue_does_not_stop_others() {
    let its = Arc::new(RecordingIts::new("trouble").broken(&["1"]));
    let outcome =
        controller(its.clone()).handle_event(&merged("main", "Fix bug 1\n\nSee bug 2."));

    assert_eq!(outcome.failed, 2);
    assert!(its
        .calls()
        .iter()
        .any(|call| matches!(call, Call::AddComment { issue, .. } if issue == "2")));
}

#[test]
fn commit_message_comes_from_commit_source() {
    let its = Arc::new(RecordingIts::new("trouble"));
    let commits = Arc::new(MemoryCommits::new().commit("r9", None, "Fix bug 77"));
    let event = RepoEvent::from_json(
        r#"{"type": "change-merged", "change": {"project": "tools", "branch": "main"},
            "patchSet": {"number": 1, "revision": "r9"}}"#,
    )
    .unwrap();

    let outcome = controller(its.clone())
        .with_commits(commits)
        .handle_event(&event);
    assert_eq!(outcome.executed, 3);
    assert!(its
        .calls()
        .iter()
        .all(|call| !matches!(call, Call::AddComment { issue, .. } if issue != "77")));
}

#[test]
fn from_config_loads_tracker_rules() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("actions.config"), RULES).unwrap();
    fs::write(
        tmp.path().join("actions-trouble.config"),
        "[rule \"extra\"]\n  action = add-comment hello\n",
    )
    .unwrap();
    let path = tmp.path().join("its.toml");
    fs::write(&path, SITE).unwrap();

    let its = Arc::new(RecordingIts::new("trouble"));
    let controller = ActionController::from_config(its, ItsConfig::load(&path).unwrap());
    assert_eq!(controller.rules().rules().len(), 3);
    assert_eq!(controller.config().name, "trouble");
}

#[test]
fn custom_executor_replaces_builtins() {
    let its = Arc::new(RecordingIts::new("trouble"));
    let outcome = controller(its.clone())
        .with_executor(ActionExecutor::empty())
        .handle_event(&merged("main", "Fix bug 1"));

    assert_eq!(outcome.executed, 3);
    assert!(its
        .calls()
        .iter()
        .all(|call| matches!(call, Call::PerformAction { .. })));
}
