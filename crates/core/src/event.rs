// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Repository events as delivered by the code-review host.
//!
//! Events use the host's stream-event JSON shape, tagged by `type`. Tags
//! outside the handled set deserialize to [`RepoEvent::Unknown`].

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A user account attached to an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// The change a change event refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeAttribute {
    pub project: String,
    pub branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// The Change-Id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<AccountAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wip: Option<bool>,
    #[serde(
        default,
        rename = "isPrivate",
        skip_serializing_if = "Option::is_none"
    )]
    pub private: Option<bool>,
}

/// The patch set a change event refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchSetAttribute {
    pub number: u32,
    pub revision: String,
    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader: Option<AccountAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AccountAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_insertions: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_deletions: Option<i64>,
}

/// A review label vote on a comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalAttribute {
    #[serde(rename = "type")]
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A ref moving from `old_rev` to `new_rev`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefUpdateAttribute {
    pub old_rev: String,
    pub new_rev: String,
    pub ref_name: String,
    pub project: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchSetCreated {
    pub change: ChangeAttribute,
    pub patch_set: PatchSetAttribute,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader: Option<AccountAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_created_on: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAdded {
    pub change: ChangeAttribute,
    pub patch_set: PatchSetAttribute,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AccountAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub approvals: Vec<ApprovalAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_created_on: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeMerged {
    pub change: ChangeAttribute,
    pub patch_set: PatchSetAttribute,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitter: Option<AccountAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_rev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_created_on: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeAbandoned {
    pub change: ChangeAttribute,
    pub patch_set: PatchSetAttribute,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abandoner: Option<AccountAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_created_on: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRestored {
    pub change: ChangeAttribute,
    pub patch_set: PatchSetAttribute,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restorer: Option<AccountAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_created_on: Option<i64>,
}

/// Shared shape of the work-in-progress and private state events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStateChanged {
    pub change: ChangeAttribute,
    pub patch_set: PatchSetAttribute,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changer: Option<AccountAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_created_on: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefUpdated {
    pub ref_update: RefUpdateAttribute,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitter: Option<AccountAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_created_on: Option<i64>,
}

/// The closed set of events the engine reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RepoEvent {
    PatchsetCreated(PatchSetCreated),
    CommentAdded(CommentAdded),
    ChangeMerged(ChangeMerged),
    ChangeAbandoned(ChangeAbandoned),
    ChangeRestored(ChangeRestored),
    WipStateChanged(ChangeStateChanged),
    PrivateStateChanged(ChangeStateChanged),
    RefUpdated(RefUpdated),
    #[serde(other)]
    Unknown,
}

impl RepoEvent {
    /// Parse a single stream-event JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The `type` tag (e.g., "patchset-created").
    pub fn type_name(&self) -> &'static str {
        match self {
            RepoEvent::PatchsetCreated(_) => "patchset-created",
            RepoEvent::CommentAdded(_) => "comment-added",
            RepoEvent::ChangeMerged(_) => "change-merged",
            RepoEvent::ChangeAbandoned(_) => "change-abandoned",
            RepoEvent::ChangeRestored(_) => "change-restored",
            RepoEvent::WipStateChanged(_) => "wip-state-changed",
            RepoEvent::PrivateStateChanged(_) => "private-state-changed",
            RepoEvent::RefUpdated(_) => "ref-updated",
            RepoEvent::Unknown => "unknown",
        }
    }

    /// The host's event class name, kept for rules written against it.
    pub fn class_name(&self) -> &'static str {
        match self {
            RepoEvent::PatchsetCreated(_) => "com.google.gerrit.server.events.PatchSetCreatedEvent",
            RepoEvent::CommentAdded(_) => "com.google.gerrit.server.events.CommentAddedEvent",
            RepoEvent::ChangeMerged(_) => "com.google.gerrit.server.events.ChangeMergedEvent",
            RepoEvent::ChangeAbandoned(_) => "com.google.gerrit.server.events.ChangeAbandonedEvent",
            RepoEvent::ChangeRestored(_) => "com.google.gerrit.server.events.ChangeRestoredEvent",
            RepoEvent::WipStateChanged(_) => "com.google.gerrit.server.events.WorkInProgressStateChangedEvent",
            RepoEvent::PrivateStateChanged(_) => "com.google.gerrit.server.events.PrivateStateChangedEvent",
            RepoEvent::RefUpdated(_) => "com.google.gerrit.server.events.RefUpdatedEvent",
            RepoEvent::Unknown => "",
        }
    }

    /// Change and patch set of change events.
    pub fn change(&self) -> Option<(&ChangeAttribute, &PatchSetAttribute)> {
        match self {
            RepoEvent::PatchsetCreated(e) => Some((&e.change, &e.patch_set)),
            RepoEvent::CommentAdded(e) => Some((&e.change, &e.patch_set)),
            RepoEvent::ChangeMerged(e) => Some((&e.change, &e.patch_set)),
            RepoEvent::ChangeAbandoned(e) => Some((&e.change, &e.patch_set)),
            RepoEvent::ChangeRestored(e) => Some((&e.change, &e.patch_set)),
            RepoEvent::WipStateChanged(e) | RepoEvent::PrivateStateChanged(e) => {
                Some((&e.change, &e.patch_set))
            }
            RepoEvent::RefUpdated(_) | RepoEvent::Unknown => None,
        }
    }

    pub fn project(&self) -> Option<&str> {
        match self {
            RepoEvent::RefUpdated(e) => Some(&e.ref_update.project),
            _ => self.change().map(|(change, _)| change.project.as_str()),
        }
    }

    /// Full ref name the event applies to (e.g., "refs/heads/main").
    pub fn ref_name(&self) -> Option<String> {
        match self {
            RepoEvent::RefUpdated(e) => Some(e.ref_update.ref_name.clone()),
            _ => self
                .change()
                .map(|(change, _)| full_branch_name(&change.branch)),
        }
    }

    pub fn created_on(&self) -> Option<i64> {
        match self {
            RepoEvent::PatchsetCreated(e) => e.event_created_on,
            RepoEvent::CommentAdded(e) => e.event_created_on,
            RepoEvent::ChangeMerged(e) => e.event_created_on,
            RepoEvent::ChangeAbandoned(e) => e.event_created_on,
            RepoEvent::ChangeRestored(e) => e.event_created_on,
            RepoEvent::WipStateChanged(e) | RepoEvent::PrivateStateChanged(e) => {
                e.event_created_on
            }
            RepoEvent::RefUpdated(e) => e.event_created_on,
            RepoEvent::Unknown => None,
        }
    }
}

/// Expand a short branch name to `refs/heads/<branch>`.
pub fn full_branch_name(branch: &str) -> String {
    if branch.starts_with("refs/") {
        branch.to_string()
    } else {
        format!("refs/heads/{}", branch)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
