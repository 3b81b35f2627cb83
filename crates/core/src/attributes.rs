// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Event attributes flattened into properties.

use chrono::{DateTime, SecondsFormat};

use crate::event::{
    AccountAttribute, ApprovalAttribute, ChangeAttribute, PatchSetAttribute, RefUpdateAttribute,
};
use crate::property::PropertySet;

/// Add `<role>-name`, `<role>-email` and `<role>-username`.
pub fn add_account(props: &mut PropertySet, role: &str, account: Option<&AccountAttribute>) {
    let Some(account) = account else {
        return;
    };
    props.insert_opt(&format!("{}-name", role), account.name.as_deref());
    props.insert_opt(&format!("{}-email", role), account.email.as_deref());
    props.insert_opt(&format!("{}-username", role), account.username.as_deref());
}

pub fn add_change(props: &mut PropertySet, change: &ChangeAttribute) {
    props.insert("project", change.project.as_str());
    props.insert("branch", change.branch.as_str());
    props.insert_opt("topic", change.topic.as_deref());
    props.insert_opt("change-id", change.id.as_deref());
    props.insert_opt("change-number", change.number);
    props.insert_opt("subject", change.subject.as_deref());
    props.insert_opt("change-url", change.url.as_deref());
    props.insert_opt("status", change.status.as_deref());
    props.insert_opt("wip", change.wip);
    props.insert_opt("private", change.private);
    add_account(props, "owner", change.owner.as_ref());
}

pub fn add_patch_set(props: &mut PropertySet, patch_set: &PatchSetAttribute) {
    props.insert("patch-set-number", patch_set.number.to_string());
    props.insert("revision", patch_set.revision.as_str());
    props.insert_opt("ref", patch_set.ref_name.as_deref());
    props.insert_opt("created-on", patch_set.created_on.and_then(timestamp));
    props.insert_opt("kind", patch_set.kind.as_deref());
    props.insert_opt("insertions", patch_set.size_insertions);
    props.insert_opt("deletions", patch_set.size_deletions);
    add_account(props, "uploader", patch_set.uploader.as_ref());
    add_account(props, "author", patch_set.author.as_ref());
}

/// One `approval-<Label>` property per vote.
pub fn add_approvals(props: &mut PropertySet, approvals: &[ApprovalAttribute]) {
    for approval in approvals {
        props.insert(&format!("approval-{}", approval.label), approval.value.as_str());
    }
}

pub fn add_ref_update(props: &mut PropertySet, update: &RefUpdateAttribute) {
    props.insert("project", update.project.as_str());
    props.insert("ref", update.ref_name.as_str());
    props.insert("revision", update.new_rev.as_str());
    props.insert("revision-old", update.old_rev.as_str());
}

/// Unix seconds as an RFC 3339 timestamp.
pub fn timestamp(seconds: i64) -> Option<String> {
    DateTime::from_timestamp(seconds, 0).map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
}

#[cfg(test)]
#[path = "attributes_tests.rs"]
mod tests;
