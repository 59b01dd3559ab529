// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Note store facade
//!
//! The store is stateless between calls: every operation goes straight to the
//! notes directory. There is no in-process locking; concurrent saves of the
//! same id race at the filesystem and the last rename wins.

use crate::atomic::{self, CommitReceipt};
use crate::config::StoreConfig;
use crate::error::{InputError, StoreError};
use crate::fs::{NoteFs, OsFs};
use crate::paths::NotePaths;
use crate::scan::{self, ScanReport};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use vn_core::{codec, Note, NoteId};

/// Directory-backed note store
#[derive(Debug, Clone)]
pub struct NoteStore<F: NoteFs = OsFs> {
    fs: F,
    root: PathBuf,
    paths: NotePaths,
    config: StoreConfig,
}

impl NoteStore<OsFs> {
    /// Open a store rooted at `root`, reading `<root>/config.toml` if present
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        let config = StoreConfig::load(&root)?;
        Self::open_with(OsFs, root, config)
    }
}

impl<F: NoteFs> NoteStore<F> {
    /// Open a store over an explicit filesystem adapter.
    ///
    /// Creates the root and its `notes` subdirectory. Failure to create either
    /// is fatal: a store with no usable directory is never returned.
    pub fn open_with(fs: F, root: impl Into<PathBuf>, config: StoreConfig) -> Result<Self, StoreError> {
        let root = root.into();
        let paths = NotePaths::for_root(&root);

        for dir in [root.as_path(), paths.notes_dir()] {
            fs.create_dir_all(dir)
                .map_err(|source| StoreError::DirectoryUnavailable {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        tracing::info!(
            root = %root.display(),
            notes_dir = %paths.notes_dir().display(),
            fsync = config.fsync,
            "note store opened"
        );

        let store = Self {
            fs,
            root,
            paths,
            config,
        };

        if store.config.purge_staging_on_open {
            // Leftovers are harmless; failing to clear them must not block startup
            if let Err(e) = store.purge_staging() {
                tracing::warn!(error = %e, "failed to purge staging files on open");
            }
        }

        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn notes_dir(&self) -> &Path {
        self.paths.notes_dir()
    }

    pub fn paths(&self) -> &NotePaths {
        &self.paths
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Save a serialized note.
    ///
    /// The input is decoded and its id validated before the filesystem is
    /// touched; the note is then re-encoded canonically and committed.
    pub fn save(&self, input: &[u8]) -> Result<CommitReceipt, StoreError> {
        tracing::debug!(input_len = input.len(), "save called");

        let note = codec::decode(input).map_err(|e| {
            tracing::warn!(error = %e, "rejecting malformed note");
            StoreError::MalformedInput(InputError::Codec(e))
        })?;
        self.save_note(&note)
    }

    /// Save a note the caller already holds in typed form
    pub fn save_note(&self, note: &Note) -> Result<CommitReceipt, StoreError> {
        let id = note.note_id().map_err(|e| {
            tracing::warn!(error = %e, "rejecting unusable note id");
            StoreError::from(e)
        })?;

        let span = tracing::info_span!("store.save", %id);
        let _guard = span.enter();

        tracing::debug!(title = %note.title, content_len = note.content.len(), "saving note");

        let bytes = codec::encode(note).map_err(StoreError::Encode)?;
        let result = atomic::commit(
            &self.fs,
            &self.paths,
            &id,
            &bytes,
            self.config.commit_options(),
        );

        match &result {
            Ok(receipt) => tracing::info!(
                bytes = receipt.bytes,
                elapsed_ms = receipt.elapsed.as_millis() as u64,
                "note saved"
            ),
            Err(e) => tracing::error!(error = %e, "save failed"),
        }

        result
    }

    /// Scan the notes directory, keeping a record of skipped files
    pub fn scan(&self) -> Result<ScanReport, StoreError> {
        let span = tracing::info_span!("store.load_all");
        let _guard = span.enter();

        let start = Instant::now();
        let report = scan::load_all(&self.fs, &self.paths)?;

        tracing::info!(
            loaded = report.notes.len(),
            skipped = report.skipped.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "notes loaded"
        );
        Ok(report)
    }

    /// All committed notes, in unspecified order
    pub fn load_all(&self) -> Result<Vec<Note>, StoreError> {
        Ok(self.scan()?.notes)
    }

    /// All committed notes as a JSON array (`[]` when there are none)
    pub fn load_all_json(&self) -> Result<Vec<u8>, StoreError> {
        let notes = self.load_all()?;
        codec::encode_list(&notes).map_err(StoreError::Encode)
    }

    /// Delete a note. Deletion is final.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let id = NoteId::parse(id)?;

        let span = tracing::info_span!("store.delete", %id);
        let _guard = span.enter();

        let path = self.paths.final_path(&id);
        match self.fs.remove_file(&path) {
            Ok(()) => {
                tracing::info!("note deleted");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("note not found");
                Err(StoreError::NotFound { id })
            }
            Err(source) => {
                tracing::error!(error = %source, "delete failed");
                Err(StoreError::DeleteFailed { id, path, source })
            }
        }
    }

    /// Remove staging files left behind by failed saves, returning how many
    /// were removed.
    pub fn purge_staging(&self) -> Result<usize, StoreError> {
        let notes_dir = self.paths.notes_dir();
        let entries = self
            .fs
            .read_dir(notes_dir)
            .map_err(|source| StoreError::DirectoryUnreadable {
                path: notes_dir.to_path_buf(),
                source,
            })?;

        let mut removed = 0;
        for entry in entries {
            if entry.is_dir || !NotePaths::is_staging_file(&entry.path) {
                continue;
            }
            match self.fs.remove_file(&entry.path) {
                Ok(()) => removed += 1,
                Err(e) => {
                    tracing::warn!(file = %entry.path.display(), error = %e, "failed to remove staging file")
                }
            }
        }

        if removed > 0 {
            tracing::info!(removed, "purged staging files");
        }
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
