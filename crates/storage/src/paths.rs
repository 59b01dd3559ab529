// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Note id to on-disk path resolution
//!
//! Committed notes live at `<notes>/<id>.json`; in-flight writes are staged at
//! `<notes>/<id>.json.tmp`. Both sit in the same directory so the commit
//! rename never crosses a volume.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use vn_core::NoteId;

/// Extension of committed note files
pub const NOTE_EXTENSION: &str = "json";

/// Appended to a note's final file name to form its staging name
pub const STAGING_SUFFIX: &str = ".tmp";

/// Name of the notes subdirectory under the store root
pub const NOTES_DIR: &str = "notes";

/// Path resolver for a single flat notes directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePaths {
    notes_dir: PathBuf,
}

impl NotePaths {
    pub fn new(notes_dir: impl Into<PathBuf>) -> Self {
        Self {
            notes_dir: notes_dir.into(),
        }
    }

    /// Resolver for the `notes` subdirectory of a store root
    pub fn for_root(root: &Path) -> Self {
        Self::new(root.join(NOTES_DIR))
    }

    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    pub fn final_path(&self, id: &NoteId) -> PathBuf {
        self.notes_dir
            .join(format!("{}.{}", id.as_str(), NOTE_EXTENSION))
    }

    pub fn staging_path(&self, id: &NoteId) -> PathBuf {
        let mut name = OsString::from(self.final_path(id));
        name.push(STAGING_SUFFIX);
        PathBuf::from(name)
    }

    /// Whether a directory entry name follows the committed-note convention
    pub fn is_note_file(path: &Path) -> bool {
        path.extension().is_some_and(|e| e == NOTE_EXTENSION)
    }

    /// Whether a directory entry name is a leftover staging file
    pub fn is_staging_file(path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        name.strip_suffix(STAGING_SUFFIX)
            .is_some_and(|stem| Self::is_note_file(Path::new(stem)))
    }

    /// The id a committed note file is named after
    pub fn id_from_path(path: &Path) -> Option<String> {
        if !Self::is_note_file(path) {
            return None;
        }
        path.file_stem().map(|s| s.to_string_lossy().to_string())
    }
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
