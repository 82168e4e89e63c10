//! Shared helpers for git-stager integration tests
//!
//! Everything here drives a real `git` binary in throwaway repositories.

pub mod assertions;
pub mod fixtures;
pub mod repository;
