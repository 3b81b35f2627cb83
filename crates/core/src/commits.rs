// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Access to commit data held by the repository host.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Commit lookups the engine needs while extracting properties.
pub trait CommitSource: Send + Sync {
    /// Full commit message of `revision`.
    fn commit_message(&self, project: &str, revision: &str) -> Result<String>;

    /// Revision of the patch set preceding `patch_set` of a change, if any.
    fn previous_revision(
        &self,
        project: &str,
        change_number: u64,
        patch_set: u32,
    ) -> Result<Option<String>>;

    /// Commits reachable from `revision` that are newer than the last tag,
    /// newest first. Includes `revision` itself.
    fn commits_since_last_tag(&self, project: &str, revision: &str) -> Result<Vec<String>>;
}

/// An in-memory commit graph.
///
/// Commits form a first-parent chain; tags stop the walk in
/// [`CommitSource::commits_since_last_tag`].
#[derive(Debug, Clone, Default)]
pub struct MemoryCommits {
    messages: HashMap<String, String>,
    parents: HashMap<String, String>,
    tags: Vec<String>,
    patch_sets: HashMap<(u64, u32), String>,
}

impl MemoryCommits {
    pub fn new() -> Self {
        MemoryCommits::default()
    }

    /// Record a commit and its first parent.
    pub fn commit(mut self, revision: &str, parent: Option<&str>, message: &str) -> Self {
        self.messages
            .insert(revision.to_string(), message.to_string());
        if let Some(parent) = parent {
            self.parents
                .insert(revision.to_string(), parent.to_string());
        }
        self
    }

    pub fn tag(mut self, revision: &str) -> Self {
        self.tags.push(revision.to_string());
        self
    }

    /// Record the revision uploaded as patch set `patch_set` of a change.
    pub fn patch_set(mut self, change_number: u64, patch_set: u32, revision: &str) -> Self {
        self.patch_sets
            .insert((change_number, patch_set), revision.to_string());
        self
    }
}

impl CommitSource for MemoryCommits {
    fn commit_message(&self, _project: &str, revision: &str) -> Result<String> {
        self.messages
            .get(revision)
            .cloned()
            .ok_or_else(|| Error::Commit(format!("unknown revision {}", revision)))
    }

    fn previous_revision(
        &self,
        _project: &str,
        change_number: u64,
        patch_set: u32,
    ) -> Result<Option<String>> {
        if patch_set <= 1 {
            return Ok(None);
        }
        Ok(self
            .patch_sets
            .get(&(change_number, patch_set - 1))
            .cloned())
    }

    fn commits_since_last_tag(&self, _project: &str, revision: &str) -> Result<Vec<String>> {
        if !self.messages.contains_key(revision) {
            return Err(Error::Commit(format!("unknown revision {}", revision)));
        }

        let mut commits = Vec::new();
        let mut current = Some(revision);
        while let Some(rev) = current {
            if self.tags.iter().any(|t| t == rev) || commits.iter().any(|c| c == rev) {
                break;
            }
            commits.push(rev.to_string());
            current = self.parents.get(rev).map(String::as_str);
        }
        Ok(commits)
    }
}

#[cfg(test)]
#[path = "commits_tests.rs"]
mod tests;
