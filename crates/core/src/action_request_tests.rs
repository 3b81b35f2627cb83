// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    none = { None },
    empty = { Some("") },
    whitespace = { Some(" \t ") },
)]
fn missing_spec_is_empty(spec: Option<&str>) {
    let request = ActionRequest::from(spec);
    assert_eq!(request.name(), "");
    assert_eq!(request.unparsed(), "");
    assert!(request.parameters().is_empty());
    assert_eq!(request.parameter(1), "");
}

#[test]
fn name_only() {
    let request = ActionRequest::new("add-standard-comment");
    assert_eq!(request.name(), "add-standard-comment");
    assert!(request.parameters().is_empty());
}

#[test]
fn parameters_are_one_indexed() {
    let request = ActionRequest::new("a b c");
    assert_eq!(request.name(), "a");
    assert_eq!(request.parameters(), ["b", "c"]);
    assert_eq!(request.parameter(1), "b");
    assert_eq!(request.parameter(2), "c");
    assert_eq!(request.parameter(5), "");
}

#[test]
fn parameter_zero_is_empty() {
    assert_eq!(ActionRequest::new("a b").parameter(0), "");
}

#[test]
fn repeated_whitespace_is_collapsed() {
    let request = ActionRequest::new("  log-event \t  warn   ");
    assert_eq!(request.unparsed(), "log-event \t  warn");
    assert_eq!(request.name(), "log-event");
    assert_eq!(request.parameters(), ["warn"]);
}

#[test]
fn parsing_is_repeatable() {
    assert_eq!(
        ActionRequest::new("add-comment hello world"),
        ActionRequest::new("add-comment hello world")
    );
}

#[test]
fn display_is_unparsed() {
    let request = ActionRequest::new(" In Progress ");
    assert_eq!(request.to_string(), "In Progress");
}
