// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::ITS_CONFIG, "ITS_CONFIG");
    assert_eq!(vars::ITS_LOG, "ITS_LOG");
}

#[test]
fn test_config_path() {
    std::env::set_var("ITS_CONFIG", "/etc/its/its.toml");
    assert_eq!(config_path(), Some(PathBuf::from("/etc/its/its.toml")));

    std::env::set_var("ITS_CONFIG", "");
    assert_eq!(config_path(), None);

    std::env::remove_var("ITS_CONFIG");
    assert_eq!(config_path(), None);
}
