// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Key/value facts derived from repository events.
//!
//! A [`Property`] is the atomic unit rules match against. A [`PropertySet`]
//! is the bag of properties describing one (event, issue) pair; keys may
//! repeat, e.g. one `association` entry per occurrence tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of the property naming the issue a property set belongs to.
pub const ISSUE: &str = "issue";

/// Key of the properties recording where an issue occurs in a commit message.
pub const ASSOCIATION: &str = "association";

/// An immutable key/value pair. Equality and hashing cover both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Property {
    key: String,
    value: Option<String>,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Property {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// A property whose value is absent.
    pub fn unset(key: impl Into<String>) -> Self {
        Property {
            key: key.into(),
            value: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "[{} = {}]", self.key, value),
            None => write!(f, "[{}]", self.key),
        }
    }
}

/// Ordered bag of properties for one (event, issue) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertySet(Vec<Property>);

impl PropertySet {
    pub fn new() -> Self {
        PropertySet::default()
    }

    pub fn push(&mut self, property: Property) {
        self.0.push(property);
    }

    /// Add `key = value`, skipping empty values.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.0.push(Property::new(key, value));
        }
    }

    /// Add `key = value` when `value` is present and non-empty.
    pub fn insert_opt<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value.to_string());
        }
    }

    /// First value stored under `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|p| p.key == key)
            .and_then(Property::value)
    }

    /// All values stored under `key`, in insertion order.
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |p| p.key == key)
            .filter_map(Property::value)
    }

    /// Copy of this set without any property under one of `keys`.
    pub fn without(&self, keys: &[&str]) -> PropertySet {
        PropertySet(
            self.0
                .iter()
                .filter(|p| !keys.contains(&p.key.as_str()))
                .cloned()
                .collect(),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Property] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Property> for PropertySet {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        PropertySet(iter.into_iter().collect())
    }
}

impl Extend<Property> for PropertySet {
    fn extend<I: IntoIterator<Item = Property>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PropertySet {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for PropertySet {
    type Item = Property;
    type IntoIter = std::vec::IntoIter<Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
#[path = "property_tests.rs"]
mod tests;
