// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn records_one_line_per_call() {
    let its = DryRunIts::new("trouble").quiet();
    its.add_comment("42", "Change merged:\nFix").unwrap();
    its.perform_action("42", "Resolve Issue").unwrap();
    its.add_related_link("42", "https://r/1", "Fix").unwrap();
    its.add_value_to_field("42", "v1", "fixVersions").unwrap();
    its.create_version("tools", "1.0").unwrap();

    similar_asserts::assert_eq!(
        its.lines(),
        vec![
            r#"42: add-comment "Change merged:\nFix""#.to_string(),
            r#"42: perform-action "Resolve Issue""#.to_string(),
            r#"42: add-related-link https://r/1 "Fix""#.to_string(),
            r#"42: add-value-to-field fixVersions "v1""#.to_string(),
            r#"tools: create-version "1.0""#.to_string(),
        ]
    );
}

#[test]
fn missing_issues_do_not_exist() {
    let its = DryRunIts::new("trouble").with_missing(["7", "8"]);
    assert!(!its.exists("7").unwrap());
    assert!(its.exists("9").unwrap());
    assert!(its.lines().is_empty());
    assert_eq!(its.name(), "trouble");
}
