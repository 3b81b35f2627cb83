// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const SITE: &str = r#"
name = "trouble"

[projects."All-Projects"]
issue-pattern = "(?i)bug[ #]?(\\d+)"

[projects.tools]
enabled = true
association = "mandatory"

[projects.docs]
enabled = true
association = "suggested"
"#;

pub const RULES: &str = r#"
[rule "merged"]
    event-type = change-merged
    action = add-standard-comment
    action = "Resolve Issue"

[rule "opened"]
    event-type = patchset-created
    association = added@subject
    action = add-comment Work started
"#;

/// `its` with the environment isolated from the caller's config.
pub fn its(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("its");
    cmd.env_remove("ITS_CONFIG")
        .env_remove("ITS_LOG")
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path());
    cmd
}

/// A temp dir holding `its.toml` and an `actions.config` rule file.
pub fn site() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("its.toml");
    fs::write(&config, SITE).unwrap();
    fs::write(temp.path().join("actions.config"), RULES).unwrap();
    (temp, config)
}
