// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn explicit_path_is_loaded() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("site.toml");
    fs::write(&path, "name = \"trouble\"\nrules-dir = \"rules\"\n").unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.name, "trouble");
    assert_eq!(config.rules_dir, tmp.path().join("rules"));
}

#[test]
fn missing_explicit_path_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let result = load_config(Some(&tmp.path().join("missing.toml")));
    assert!(matches!(result, Err(Error::ConfigNotFound(_))));
}

#[test]
fn invalid_file_is_a_config_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("its.toml");
    fs::write(&path, "[projects.p]\nenabled = \"sometimes\"\n").unwrap();
    assert!(matches!(load_config(Some(&path)), Err(Error::Config(_))));
}

#[test]
fn default_path_ends_in_its_toml() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with("its/its.toml"));
    }
}
