// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bulk loading of committed notes
//!
//! Every `*.json` file in the notes directory is read and decoded on its own.
//! A file that cannot be read or decoded is skipped and reported; only a
//! directory that cannot be listed fails the whole scan.

use crate::error::StoreError;
use crate::fs::NoteFs;
use crate::paths::NotePaths;
use std::io;
use std::path::PathBuf;
use vn_core::{codec, CodecError, Note};

/// Why a candidate file was left out of a scan
#[derive(Debug)]
pub enum SkipReason {
    Unreadable(io::Error),
    Undecodable(CodecError),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Unreadable(e) => write!(f, "unreadable: {}", e),
            SkipReason::Undecodable(e) => write!(f, "undecodable: {}", e),
        }
    }
}

#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Result of scanning the notes directory
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Loaded notes, in scan order
    pub notes: Vec<Note>,
    pub skipped: Vec<SkippedFile>,
}

/// Load every committed note under `paths`.
pub fn load_all<F: NoteFs>(fs: &F, paths: &NotePaths) -> Result<ScanReport, StoreError> {
    let notes_dir = paths.notes_dir();
    let entries = fs
        .read_dir(notes_dir)
        .map_err(|source| StoreError::DirectoryUnreadable {
            path: notes_dir.to_path_buf(),
            source,
        })?;

    tracing::debug!(entries = entries.len(), dir = %notes_dir.display(), "scanning notes");

    let mut report = ScanReport::default();
    for entry in entries {
        if entry.is_dir || !NotePaths::is_note_file(&entry.path) {
            continue;
        }

        let bytes = match fs.read(&entry.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(file = %entry.path.display(), error = %e, "skipping unreadable note");
                report.skipped.push(SkippedFile {
                    path: entry.path,
                    reason: SkipReason::Unreadable(e),
                });
                continue;
            }
        };

        let note = match codec::decode(&bytes) {
            Ok(note) => note,
            Err(e) => {
                tracing::warn!(file = %entry.path.display(), error = %e, "skipping malformed note");
                report.skipped.push(SkippedFile {
                    path: entry.path,
                    reason: SkipReason::Undecodable(e),
                });
                continue;
            }
        };

        if NotePaths::id_from_path(&entry.path).as_deref() != Some(note.id.as_str()) {
            tracing::warn!(
                file = %entry.path.display(),
                id = %note.id,
                "note id does not match its file name"
            );
        }

        tracing::trace!(id = %note.id, title = %note.title, "loaded note");
        report.notes.push(note);
    }

    Ok(report)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
