//! Predefined repository scenarios
//!
//! Each fixture leaves files in a known mix of staged, unstaged and
//! untracked states.

#![allow(dead_code)]

use super::repository::*;
use git_stager::core::error::Result;

/// Three committed files, all modified, plus two untracked ones
pub fn create_multi_file_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_test_files(&repo.path, &["file1.txt", "file2.txt", "file3.txt"])?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    modify_test_files(&repo.path, &["file1.txt", "file2.txt", "file3.txt"])?;
    create_test_files(&repo.path, &["file4.txt", "file5.txt"])?;

    Ok(repo)
}

/// One file in each group, and one file that is partially staged
///
/// ```text
/// M  staged.txt
/// MM partial.txt
///  M unstaged.txt
/// ?? untracked.txt
/// ```
pub fn create_mixed_state_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_test_files(&repo.path, &["partial.txt", "staged.txt", "unstaged.txt"])?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    create_file(&repo.path, "staged.txt", "staged change\n")?;
    git_add(&repo.path, "staged.txt")?;

    create_file(&repo.path, "partial.txt", "first change\n")?;
    git_add(&repo.path, "partial.txt")?;
    create_file(&repo.path, "partial.txt", "second change\n")?;

    create_file(&repo.path, "unstaged.txt", "worktree change\n")?;
    create_file(&repo.path, "untracked.txt", "new\n")?;

    Ok(repo)
}
