// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Turning repository events into per-issue property sets.

use tracing::{debug, error};

use crate::attributes::{
    add_account, add_approvals, add_change, add_patch_set, add_ref_update, timestamp,
};
use crate::commits::CommitSource;
use crate::event::{ChangeAttribute, PatchSetAttribute, RepoEvent};
use crate::issue_extractor::{mark_added, IssueExtractor, Occurrences};
use crate::property::{PropertySet, ASSOCIATION, ISSUE};

const NULL_REVISION: &str = "0000000000000000000000000000000000000000";

/// Builds one property set per issue an event refers to.
pub struct PropertyExtractor<'a> {
    its_name: &'a str,
    issues: &'a IssueExtractor,
    commits: Option<&'a dyn CommitSource>,
}

impl<'a> PropertyExtractor<'a> {
    pub fn new(
        its_name: &'a str,
        issues: &'a IssueExtractor,
        commits: Option<&'a dyn CommitSource>,
    ) -> Self {
        PropertyExtractor {
            its_name,
            issues,
            commits,
        }
    }

    /// Property sets for `event`, one per referenced issue.
    ///
    /// Every set carries the event's common properties plus `issue` and one
    /// `association` per occurrence tag. Events without issues yield nothing.
    pub fn extract(&self, event: &RepoEvent) -> Vec<PropertySet> {
        let mut common = PropertySet::new();
        common.insert("event", event.class_name());
        common.insert("event-type", event.type_name());
        common.insert("its-name", self.its_name);
        common.insert_opt("event-created-on", event.created_on().and_then(timestamp));

        let occurrences = match event {
            RepoEvent::PatchsetCreated(e) => {
                if e.patch_set.uploader.is_none() {
                    add_account(&mut common, "uploader", e.uploader.as_ref());
                }
                self.change_issues(&mut common, &e.change, &e.patch_set)
            }
            RepoEvent::CommentAdded(e) => {
                add_account(&mut common, "commenter", e.author.as_ref());
                common.insert_opt("comment", e.comment.as_deref());
                add_approvals(&mut common, &e.approvals);
                self.change_issues(&mut common, &e.change, &e.patch_set)
            }
            RepoEvent::ChangeMerged(e) => {
                add_account(&mut common, "submitter", e.submitter.as_ref());
                self.change_issues(&mut common, &e.change, &e.patch_set)
            }
            RepoEvent::ChangeAbandoned(e) => {
                add_account(&mut common, "abandoner", e.abandoner.as_ref());
                common.insert_opt("reason", e.reason.as_deref());
                self.change_issues(&mut common, &e.change, &e.patch_set)
            }
            RepoEvent::ChangeRestored(e) => {
                add_account(&mut common, "restorer", e.restorer.as_ref());
                common.insert_opt("reason", e.reason.as_deref());
                self.change_issues(&mut common, &e.change, &e.patch_set)
            }
            RepoEvent::WipStateChanged(e) | RepoEvent::PrivateStateChanged(e) => {
                add_account(&mut common, "changer", e.changer.as_ref());
                self.change_issues(&mut common, &e.change, &e.patch_set)
            }
            RepoEvent::RefUpdated(e) => {
                add_account(&mut common, "submitter", e.submitter.as_ref());
                add_ref_update(&mut common, &e.ref_update);
                if e.ref_update.new_rev == NULL_REVISION {
                    debug!("{} was deleted, no issues", e.ref_update.ref_name);
                    Occurrences::new()
                } else {
                    let message = self.commit_message(&e.ref_update.project, &e.ref_update.new_rev);
                    self.issues.extract_with_occurrences(&message)
                }
            }
            RepoEvent::Unknown => {
                debug!("no properties for unknown event");
                Occurrences::new()
            }
        };

        occurrences
            .into_iter()
            .map(|(issue, tags)| {
                let mut props = common.clone();
                props.insert(ISSUE, issue);
                for tag in tags {
                    props.insert(ASSOCIATION, tag);
                }
                props
            })
            .collect()
    }

    fn change_issues(
        &self,
        common: &mut PropertySet,
        change: &ChangeAttribute,
        patch_set: &PatchSetAttribute,
    ) -> Occurrences {
        add_change(common, change);
        add_patch_set(common, patch_set);

        let message = match &change.commit_message {
            Some(message) => message.clone(),
            None => self.commit_message(&change.project, &patch_set.revision),
        };
        let mut occurrences = self.issues.extract_with_occurrences(&message);
        if occurrences.is_empty() {
            return occurrences;
        }

        let previous = self
            .previous_revision(change, patch_set)
            .map(|revision| self.commit_message(&change.project, &revision))
            .map(|message| self.issues.extract_with_occurrences(&message));
        mark_added(&mut occurrences, previous.as_ref());
        occurrences
    }

    fn previous_revision(
        &self,
        change: &ChangeAttribute,
        patch_set: &PatchSetAttribute,
    ) -> Option<String> {
        if patch_set.number <= 1 {
            return None;
        }
        let (commits, number) = (self.commits?, change.number?);
        match commits.previous_revision(&change.project, number, patch_set.number) {
            Ok(revision) => revision,
            Err(e) => {
                error!(
                    "could not resolve patch set before {} of change {}: {}",
                    patch_set.number, number, e
                );
                None
            }
        }
    }

    /// Commit message of `revision`, empty when it cannot be read.
    fn commit_message(&self, project: &str, revision: &str) -> String {
        let Some(commits) = self.commits else {
            debug!("no commit source, cannot read {}", revision);
            return String::new();
        };
        commits
            .commit_message(project, revision)
            .unwrap_or_else(|e| {
                error!("could not read commit {} in {}: {}", revision, project, e);
                String::new()
            })
    }
}

#[cfg(test)]
#[path = "property_extractor_tests.rs"]
mod tests;
