// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::collections::HashSet;

#[test]
fn equality_covers_key_and_value() {
    assert_eq!(Property::new("k", "v"), Property::new("k", "v"));
    assert_ne!(Property::new("k", "v"), Property::new("k", "w"));
    assert_ne!(Property::new("k", "v"), Property::new("j", "v"));
    assert_ne!(Property::new("k", "v"), Property::unset("k"));
    assert_eq!(Property::unset("k"), Property::unset("k"));
}

#[test]
fn hashing_collapses_equal_properties() {
    let set: HashSet<Property> = [
        Property::new("k", "v"),
        Property::new("k", "v"),
        Property::unset("k"),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn display_shows_key_and_value() {
    assert_eq!(Property::new("issue", "42").to_string(), "[issue = 42]");
    assert_eq!(Property::unset("topic").to_string(), "[topic]");
}

#[test]
fn set_keeps_repeated_keys_in_order() {
    let mut set = PropertySet::new();
    set.insert(ASSOCIATION, "subject");
    set.insert(ISSUE, "42");
    set.insert(ASSOCIATION, "somewhere");

    assert_eq!(set.first(ASSOCIATION), Some("subject"));
    assert_eq!(
        set.values(ASSOCIATION).collect::<Vec<_>>(),
        vec!["subject", "somewhere"]
    );
    assert_eq!(set.len(), 3);
}

#[test]
fn insert_skips_empty_values() {
    let mut set = PropertySet::new();
    set.insert("topic", "");
    set.insert_opt::<String>("owner-name", None);
    set.insert_opt("change-number", Some(17));
    assert_eq!(set.len(), 1);
    assert_eq!(set.first("change-number"), Some("17"));
}

#[test]
fn without_drops_named_keys() {
    let set: PropertySet = [
        Property::new(ISSUE, "1"),
        Property::new(ASSOCIATION, "body"),
        Property::new("project", "p"),
    ]
    .into_iter()
    .collect();

    let stripped = set.without(&[ISSUE, ASSOCIATION]);
    assert_eq!(stripped.as_slice(), &[Property::new("project", "p")]);
}
