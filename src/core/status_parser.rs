//! Parsing of `git status --porcelain=v1 -z` output into status rows.
//!
//! This module provides [`StatusParser`] which turns the raw status query
//! output into grouped [`FileEntry`] rows. It is lenient by contract: a record
//! that does not have the `XY PATH` shape is skipped and logged, never fatal.
//!
//! # Record Forms
//! Records are NUL-terminated and paths are never quoted, so any byte sequence
//! git accepts as a file name comes through unchanged.
//! - **Plain**: ` M src/main.rs\0`, `?? new.txt\0`
//! - **Renames/copies**: `R  new.rs\0old.rs\0`, the source path in its own record
//!
//! # Ordering
//! Rows come out grouped Staged, Unstaged, Untracked. Within a group the order
//! is the order git reported; nothing is re-sorted by path.

use crate::core::{
    git_status::StatusCode,
    state::FileEntry,
};
use std::path::PathBuf;

pub struct StatusParser;

impl StatusParser {
    /// Parse full status output into rows in display order
    pub fn parse(output: &[u8]) -> Vec<FileEntry> {
        let mut entries = Vec::new();
        let mut records = output.split(|&b| b == b'\0').filter(|r| !r.is_empty());

        while let Some(record) = records.next() {
            match Self::parse_record(record, &mut records) {
                Some(rows) => entries.extend(rows),
                None => log::warn!(
                    "Skipping unparseable status record: {:?}",
                    String::from_utf8_lossy(record)
                ),
            }
        }

        // Stable sort keeps git's order inside each group
        entries.sort_by_key(|entry| entry.group);
        entries
    }

    /// Parse one record into the rows it contributes, pulling the source path
    /// of a rename or copy from `rest`.
    /// Returns `None` when the record does not have the expected shape.
    fn parse_record<'a>(
        record: &[u8],
        rest: &mut impl Iterator<Item = &'a [u8]>,
    ) -> Option<Vec<FileEntry>> {
        if record.len() < 4 || record[2] != b' ' {
            return None;
        }
        let code = std::str::from_utf8(&record[..2]).ok()?;
        let code = StatusCode::parse(code)?;

        let path = path_from_bytes(&record[3..]);
        let orig_path = if code.has_orig_path() {
            Some(path_from_bytes(rest.next()?))
        } else {
            None
        };

        let groups = code.groups();
        if groups.is_empty() {
            return None;
        }

        Some(
            groups
                .into_iter()
                .map(|group| {
                    FileEntry::new(code, path.clone(), group).with_orig_path(orig_path.clone())
                })
                .collect(),
        )
    }
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}
