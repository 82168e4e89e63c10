//! Common assertion helpers for test output validation

#![allow(dead_code)]

use git_stager::core::{git::Vcs, git_status::Group, status_model::StatusModel};
use predicates::prelude::*;

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks for the error prefix used on stderr
pub fn has_error_prefix() -> impl Predicate<str> {
    predicates::str::contains("✕ Error:")
}

/// Paths listed in one group, in display order
pub fn paths_in<V: Vcs>(model: &StatusModel<V>, group: Group) -> Vec<String> {
    model
        .entries_in(group)
        .map(|entry| entry.path.to_string_lossy().into_owned())
        .collect()
}
