// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating and loading the site configuration.
//!
//! The file is taken from `--config`, else `ITS_CONFIG`, else
//! `<config dir>/its/its.toml`. Only the last may be missing, in which case
//! defaults apply.

use std::path::{Path, PathBuf};

use its_core::ItsConfig;
use tracing::debug;

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "its";
const CONFIG_FILE_NAME: &str = "its.toml";

/// The default config file location under the user's config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the config from an explicit path, or from the default locations.
pub fn load_config(explicit: Option<&Path>) -> Result<ItsConfig> {
    if let Some(path) = explicit.map(Path::to_path_buf).or_else(env::config_path) {
        return load_required(&path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_required(&path),
        _ => {
            debug!("no config file, using defaults");
            Ok(ItsConfig::default())
        }
    }
}

fn load_required(path: &Path) -> Result<ItsConfig> {
    if !path.exists() {
        return Err(Error::ConfigNotFound(path.display().to_string()));
    }
    debug!("loading config from {}", path.display());
    Ok(ItsConfig::load(path)?)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
