// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Atomic single-file commit
//!
//! A note is written to its staging path, read back and length-checked, then
//! renamed over its final path. The rename is the commit point: readers see
//! either the previous file (or none) or the complete new one. A failure
//! before the rename leaves the final file untouched; the staging file is
//! left behind and overwritten by the next save of the same id.

use crate::error::{StoreError, VerifyFailure};
use crate::fs::NoteFs;
use crate::paths::NotePaths;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use vn_core::NoteId;

/// Durability settings for a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitOptions {
    /// Flush the staging file and the directory entry to stable storage
    pub fsync: bool,
}

impl Default for CommitOptions {
    fn default() -> Self {
        Self { fsync: true }
    }
}

/// Outcome of a successful commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReceipt {
    pub id: NoteId,
    pub path: PathBuf,
    pub bytes: u64,
    pub elapsed: Duration,
}

/// Durably replace the committed content of `id` with `bytes`.
pub fn commit<F: NoteFs>(
    fs: &F,
    paths: &NotePaths,
    id: &NoteId,
    bytes: &[u8],
    options: CommitOptions,
) -> Result<CommitReceipt, StoreError> {
    let start = Instant::now();
    let expected = bytes.len() as u64;
    let final_path = paths.final_path(id);
    let staging_path = paths.staging_path(id);

    fs.create_dir_all(paths.notes_dir())
        .map_err(|source| StoreError::DirectoryUnavailable {
            path: paths.notes_dir().to_path_buf(),
            source,
        })?;

    fs.write(&staging_path, bytes, options.fsync)
        .map_err(|source| StoreError::WriteFailed {
            id: id.clone(),
            path: staging_path.clone(),
            source,
        })?;

    // Catches truncation that a successful write call did not report
    let written = fs
        .read(&staging_path)
        .map_err(|e| StoreError::VerificationFailed {
            id: id.clone(),
            path: staging_path.clone(),
            failure: VerifyFailure::Unreadable(e),
        })?;
    let actual = written.len() as u64;
    if actual != expected {
        tracing::warn!(
            %id,
            expected,
            actual,
            path = %staging_path.display(),
            "staging file size mismatch, leaving it for inspection"
        );
        return Err(StoreError::VerificationFailed {
            id: id.clone(),
            path: staging_path,
            failure: VerifyFailure::LengthMismatch { expected, actual },
        });
    }

    fs.rename(&staging_path, &final_path)
        .map_err(|source| StoreError::CommitFailed {
            id: id.clone(),
            path: final_path.clone(),
            source,
        })?;

    if options.fsync {
        // The rename already happened; a failed directory sync only weakens
        // durability across power loss
        if let Err(e) = fs.sync_dir(paths.notes_dir()) {
            tracing::warn!(%id, error = %e, "failed to sync notes directory after commit");
        }
    }

    let committed = fs
        .file_len(&final_path)
        .map_err(|e| StoreError::PostCommitMismatch {
            id: id.clone(),
            path: final_path.clone(),
            failure: VerifyFailure::Unreadable(e),
        })?;
    if committed != expected {
        return Err(StoreError::PostCommitMismatch {
            id: id.clone(),
            path: final_path,
            failure: VerifyFailure::LengthMismatch {
                expected,
                actual: committed,
            },
        });
    }

    let elapsed = start.elapsed();
    tracing::debug!(
        %id,
        bytes = expected,
        elapsed_ms = elapsed.as_millis() as u64,
        "committed"
    );

    Ok(CommitReceipt {
        id: id.clone(),
        path: final_path,
        bytes: expected,
        elapsed,
    })
}

#[cfg(test)]
#[path = "atomic_tests.rs"]
mod tests;
