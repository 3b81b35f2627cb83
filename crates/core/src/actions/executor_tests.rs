// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::Error;
use crate::test_support::{props, Call, Harness, RecordingIts};

#[test]
fn registers_builtins_and_aliases() {
    let executor = ActionExecutor::new("templates");
    for name in [
        "add-comment",
        "add-standard-comment",
        "add-templated-comment",
        "add-soy-comment",
        "add-related-link",
        "log-event",
        "add-value-to-field",
        "add-property-to-field",
        "create-version",
        "create-version-from-property",
        "fire-event-on-commits",
    ] {
        assert!(executor.is_registered(name), "{} missing", name);
    }
    assert_eq!(executor.names().count(), 11);
    assert_eq!(ActionExecutor::empty().names().count(), 0);
}

#[test]
fn unknown_names_fall_back_to_tracker_action() {
    let harness = Harness::new(RecordingIts::new("its"));
    harness.run("42", "In Progress", &props(&[])).unwrap();
    assert_eq!(
        harness.its.calls(),
        vec![Call::PerformAction {
            issue: "42".into(),
            action: "In Progress".into()
        }]
    );
}

#[test]
fn add_comment_joins_parameters() {
    let harness = Harness::new(RecordingIts::new("its"));
    harness
        .run("42", "add-comment  Change   merged", &props(&[]))
        .unwrap();
    assert_eq!(
        harness.its.comments(),
        vec![("42".to_string(), "Change merged".to_string())]
    );
}

#[test]
fn add_comment_without_text_posts_nothing() {
    let harness = Harness::new(RecordingIts::new("its"));
    harness.run("42", "add-comment", &props(&[])).unwrap();
    assert!(harness.its.calls().is_empty());
}

#[test]
fn add_related_link_uses_url_and_subject() {
    let harness = Harness::new(RecordingIts::new("its"));
    harness
        .run(
            "42",
            "add-related-link",
            &props(&[("change-url", "https://r/1"), ("subject", "Fix it")]),
        )
        .unwrap();
    harness.run("43", "add-related-link", &props(&[])).unwrap();
    assert_eq!(
        harness.its.calls(),
        vec![Call::AddRelatedLink {
            issue: "42".into(),
            url: "https://r/1".into(),
            description: "Fix it".into()
        }]
    );
}

#[test]
fn add_value_to_field_and_alias() {
    let harness = Harness::new(RecordingIts::new("its"));
    let set = props(&[("branch", "stable-3.9")]);
    harness
        .run("42", "add-value-to-field branch fixVersions", &set)
        .unwrap();
    harness
        .run("42", "add-property-to-field branch labels", &set)
        .unwrap();
    harness
        .run("42", "add-value-to-field topic labels", &set)
        .unwrap();
    harness.run("42", "add-value-to-field branch", &set).unwrap();

    assert_eq!(
        harness.its.calls(),
        vec![
            Call::AddValueToField {
                issue: "42".into(),
                value: "stable-3.9".into(),
                field: "fixVersions".into()
            },
            Call::AddValueToField {
                issue: "42".into(),
                value: "stable-3.9".into(),
                field: "labels".into()
            },
        ]
    );
}

#[test]
fn create_version_in_project() {
    let harness = Harness::new(RecordingIts::new("its"));
    harness
        .run(
            "42",
            "create-version-from-property ref",
            &props(&[("project", "tools"), ("ref", "refs/tags/v1.0")]),
        )
        .unwrap();
    harness
        .run("42", "create-version ref", &props(&[("ref", "refs/tags/v1.0")]))
        .unwrap();
    assert_eq!(
        harness.its.calls(),
        vec![Call::CreateVersion {
            project: "tools".into(),
            version: "refs/tags/v1.0".into()
        }]
    );
}

#[test]
fn failures_are_isolated_and_counted() {
    let harness = Harness::new(RecordingIts::new("its").failing_comments());
    let requests = [
        ActionRequest::new("add-comment first"),
        ActionRequest::new("Resolve"),
        ActionRequest::new("add-templated-comment missing"),
        ActionRequest::new("add-comment second"),
    ];
    let refs: Vec<&ActionRequest> = requests.iter().collect();

    let outcome = harness
        .executor
        .execute(&harness.ctx(), "42", &refs, &props(&[]));

    assert_eq!(
        outcome,
        Outcome {
            executed: 4,
            failed: 3
        }
    );
    assert_eq!(harness.its.calls().len(), 3);
    assert_eq!(harness.its.comments()[1].1, "second");
}

#[test]
fn tracker_errors_surface_from_execute_one() {
    let harness = Harness::new(RecordingIts::new("its").broken(&["42"]));
    assert!(matches!(
        harness.run("42", "Resolve", &props(&[])),
        Err(Error::Tracker(_))
    ));
}

#[test]
fn outcomes_add_up() {
    let mut total = Outcome::default();
    total += Outcome {
        executed: 2,
        failed: 1,
    };
    total += Outcome {
        executed: 3,
        failed: 0,
    };
    assert_eq!(
        total,
        Outcome {
            executed: 5,
            failed: 1
        }
    );
}
