// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Site and per-project configuration.
//!
//! Configuration is read from a TOML file:
//! - `name`: tracker name, selects `actions-<name>.config`
//! - `rules-dir` / `templates-dir`: where rule files and comment templates live
//! - `[projects."<name>"]`: enablement, branch scope, issue pattern and
//!   association policy, inherited along `parent` links
//! - `[comment-links."<name>"]`: named issue patterns; a project without its
//!   own `issue-pattern` uses the one its `comment-link` names
//!
//! Projects without an explicit `parent` inherit from `All-Projects` when
//! it is configured.

use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use regex::Regex;
use tracing::{debug, error, warn};

use crate::error::{Error, Result};
use crate::event::RepoEvent;
use crate::issue_extractor::IssueExtractor;

/// Root of the project inheritance tree.
pub const ALL_PROJECTS: &str = "All-Projects";

const DEFAULT_NAME: &str = "its";
const DEFAULT_GROUP: i64 = 1;
const TEMPLATES_DIR: &str = "templates";

/// Whether the integration runs for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "RawEnabled")]
pub enum EnabledMode {
    #[default]
    False,
    True,
    /// Enabled, and child projects cannot switch it off.
    Enforced,
}

impl EnabledMode {
    pub fn is_on(self) -> bool {
        matches!(self, EnabledMode::True | EnabledMode::Enforced)
    }
}

impl FromStr for EnabledMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "false" => Ok(EnabledMode::False),
            "true" => Ok(EnabledMode::True),
            "enforced" => Ok(EnabledMode::Enforced),
            _ => Err(Error::InvalidEnabled(s.to_string())),
        }
    }
}

impl fmt::Display for EnabledMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnabledMode::False => write!(f, "false"),
            EnabledMode::True => write!(f, "true"),
            EnabledMode::Enforced => write!(f, "enforced"),
        }
    }
}

/// `enabled` accepts a boolean or a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEnabled {
    Bool(bool),
    Text(String),
}

impl TryFrom<RawEnabled> for EnabledMode {
    type Error = Error;

    fn try_from(raw: RawEnabled) -> Result<Self> {
        match raw {
            RawEnabled::Bool(true) => Ok(EnabledMode::True),
            RawEnabled::Bool(false) => Ok(EnabledMode::False),
            RawEnabled::Text(text) => text.parse(),
        }
    }
}

/// How strictly commits must reference an existing issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum AssociationPolicy {
    #[default]
    Optional,
    Suggested,
    Mandatory,
}

impl FromStr for AssociationPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "optional" => Ok(AssociationPolicy::Optional),
            "suggested" => Ok(AssociationPolicy::Suggested),
            "mandatory" => Ok(AssociationPolicy::Mandatory),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}

impl TryFrom<String> for AssociationPolicy {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for AssociationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssociationPolicy::Optional => write!(f, "optional"),
            AssociationPolicy::Suggested => write!(f, "suggested"),
            AssociationPolicy::Mandatory => write!(f, "mandatory"),
        }
    }
}

/// One `[projects."<name>"]` table. Absent fields are inherited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProjectConfig {
    pub parent: Option<String>,
    pub enabled: Option<EnabledMode>,
    pub branches: Option<Vec<String>>,
    pub issue_pattern: Option<String>,
    pub issue_pattern_group: Option<i64>,
    pub association: Option<AssociationPolicy>,
    pub comment_link: Option<String>,
}

/// A named issue pattern shared between projects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommentLink {
    #[serde(rename = "match")]
    pub pattern: String,
}

/// Effective settings of a project after inheritance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    pub enabled: EnabledMode,
    pub branches: Vec<String>,
    pub issue_pattern: Option<String>,
    pub issue_pattern_group: i64,
    pub association: AssociationPolicy,
    pub comment_link: String,
}

/// Site configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ItsConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_dir")]
    pub rules_dir: PathBuf,
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
    #[serde(default)]
    pub projects: BTreeMap<String, ProjectConfig>,
    #[serde(default)]
    pub comment_links: BTreeMap<String, CommentLink>,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ItsConfig {
    fn default() -> Self {
        ItsConfig {
            name: default_name(),
            rules_dir: default_dir(),
            templates_dir: None,
            projects: BTreeMap::new(),
            comment_links: BTreeMap::new(),
        }
    }
}

impl ItsConfig {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("failed to parse config: {}", e)))
    }

    /// Load a config file. Relative directories resolve against its folder.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let mut config = ItsConfig::parse(&content)?;

        let base = path.parent().unwrap_or(Path::new("."));
        config.rules_dir = resolve(base, &config.rules_dir);
        config.templates_dir = config.templates_dir.map(|dir| resolve(base, &dir));
        Ok(config)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.templates_dir
            .clone()
            .unwrap_or_else(|| self.rules_dir.join(TEMPLATES_DIR))
    }

    /// Configured tables from `project` up to the root.
    fn ancestry<'a>(&'a self, project: &'a str) -> Vec<&'a ProjectConfig> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(project);

        while let Some(name) = current {
            if !seen.insert(name) {
                warn!("project inheritance cycle at {}", name);
                break;
            }
            let table = self.projects.get(name);
            if let Some(table) = table {
                chain.push(table);
            }
            current = match table.and_then(|t| t.parent.as_deref()) {
                Some(parent) => Some(parent),
                None if name != ALL_PROJECTS && self.projects.contains_key(ALL_PROJECTS) => {
                    Some(ALL_PROJECTS)
                }
                None => None,
            };
        }
        chain
    }

    /// Effective settings of `project`.
    pub fn settings(&self, project: &str) -> ProjectSettings {
        self.resolve_settings(&self.ancestry(project))
    }

    /// Whether the integration runs for `ref_name` of `project`.
    ///
    /// An ancestor with `enabled = "enforced"` whose branch list matches
    /// wins. Otherwise the inherited value must be on and the inherited
    /// branch list must match.
    pub fn is_enabled(&self, project: &str, ref_name: &str) -> bool {
        let chain = self.ancestry(project);
        if chain.is_empty() {
            debug!("no configuration applies to project {}", project);
            return false;
        }

        for level in (0..chain.len()).rev() {
            if chain[level].enabled == Some(EnabledMode::Enforced) {
                let branches = inherited(&chain[level..], |t| t.branches.as_ref());
                if branches_match(branches.map(Vec::as_slice).unwrap_or_default(), ref_name) {
                    return true;
                }
            }
        }

        let settings = self.resolve_settings(&chain);
        settings.enabled.is_on() && branches_match(&settings.branches, ref_name)
    }

    pub fn is_enabled_for_event(&self, event: &RepoEvent) -> bool {
        match (event.project(), event.ref_name()) {
            (Some(project), Some(ref_name)) => self.is_enabled(project, &ref_name),
            _ => {
                debug!("ignoring {} event", event.type_name());
                false
            }
        }
    }

    /// Issue extractor for `project`. Invalid patterns disable extraction.
    pub fn issue_extractor(&self, project: &str) -> IssueExtractor {
        let settings = self.settings(project);
        let Some(pattern) = settings.issue_pattern else {
            debug!("no issue pattern configured for {}", project);
            return IssueExtractor::disabled();
        };
        match IssueExtractor::compile(&pattern, settings.issue_pattern_group) {
            Ok(extractor) => extractor,
            Err(e) => {
                error!("issue pattern for {} is invalid: {}", project, e);
                IssueExtractor::disabled()
            }
        }
    }

    fn resolve_settings(&self, chain: &[&ProjectConfig]) -> ProjectSettings {
        let comment_link = inherited(chain, |t| t.comment_link.as_ref())
            .cloned()
            .unwrap_or_else(|| self.name.clone());
        let issue_pattern = inherited(chain, |t| t.issue_pattern.as_ref())
            .cloned()
            .or_else(|| {
                self.comment_links
                    .get(&comment_link)
                    .map(|link| link.pattern.clone())
            });

        ProjectSettings {
            enabled: inherited(chain, |t| t.enabled.as_ref())
                .copied()
                .unwrap_or_default(),
            branches: inherited(chain, |t| t.branches.as_ref())
                .cloned()
                .unwrap_or_default(),
            issue_pattern,
            issue_pattern_group: inherited(chain, |t| t.issue_pattern_group.as_ref())
                .copied()
                .unwrap_or(DEFAULT_GROUP),
            association: inherited(chain, |t| t.association.as_ref())
                .copied()
                .unwrap_or_default(),
            comment_link,
        }
    }

    pub fn association_policy(&self, project: &str) -> AssociationPolicy {
        self.settings(project).association
    }

    pub fn comment_link(&self, project: &str) -> String {
        self.settings(project).comment_link
    }
}

fn resolve(base: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        base.join(dir)
    }
}

fn inherited<'a, T: ?Sized, F>(chain: &[&'a ProjectConfig], field: F) -> Option<&'a T>
where
    F: Fn(&'a ProjectConfig) -> Option<&'a T>,
{
    chain.iter().find_map(|table| field(*table))
}

/// An empty list matches every ref.
pub fn branches_match(patterns: &[String], ref_name: &str) -> bool {
    patterns.is_empty() || patterns.iter().any(|p| branch_matches(p, ref_name))
}

/// Match one pattern: `^regex`, `refs/prefix/*`, or an exact ref.
pub fn branch_matches(pattern: &str, ref_name: &str) -> bool {
    if let Some(regex) = pattern.strip_prefix('^') {
        if !regex.starts_with("refs/") {
            warn!("ignoring branch pattern {}: must start with ^refs/", pattern);
            return false;
        }
        return match Regex::new(&format!("^(?:{})$", regex)) {
            Ok(re) => re.is_match(ref_name),
            Err(e) => {
                warn!("ignoring branch pattern {}: {}", pattern, e);
                false
            }
        };
    }

    if !pattern.starts_with("refs/") {
        warn!("ignoring branch pattern {}: must start with refs/", pattern);
        return false;
    }
    match pattern.strip_suffix('*') {
        Some(prefix) if prefix.ends_with('/') => ref_name.starts_with(prefix),
        _ => pattern == ref_name,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
