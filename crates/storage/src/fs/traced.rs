// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced filesystem wrapper for consistent observability

use super::{DirEntry, NoteFs};
use std::io;
use std::path::Path;

/// Wrapper that adds tracing to any NoteFs
#[derive(Debug, Clone)]
pub struct TracedFs<F> {
    inner: F,
}

impl<F> TracedFs<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: NoteFs> NoteFs for TracedFs<F> {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let result = self.inner.create_dir_all(path);
        match &result {
            Ok(()) => tracing::trace!(path = %path.display(), "fs.create_dir_all"),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "fs.create_dir_all failed")
            }
        }
        result
    }

    fn write(&self, path: &Path, bytes: &[u8], sync: bool) -> io::Result<()> {
        let span = tracing::debug_span!("fs.write", path = %path.display());
        let _guard = span.enter();

        tracing::debug!(bytes = bytes.len(), sync, "writing");

        let start = std::time::Instant::now();
        let result = self.inner.write(path, bytes, sync);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "written"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "write failed"
            ),
        }

        result
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let result = self.inner.read(path);
        match &result {
            Ok(bytes) => tracing::trace!(path = %path.display(), bytes = bytes.len(), "fs.read"),
            // Readers decide whether a failed read matters
            Err(e) => tracing::debug!(path = %path.display(), error = %e, "fs.read failed"),
        }
        result
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let span = tracing::debug_span!("fs.rename", from = %from.display(), to = %to.display());
        let _guard = span.enter();

        let result = self.inner.rename(from, to);
        match &result {
            Ok(()) => tracing::debug!("renamed"),
            Err(e) => tracing::error!(error = %e, "rename failed"),
        }
        result
    }

    fn file_len(&self, path: &Path) -> io::Result<u64> {
        let result = self.inner.file_len(path);
        tracing::trace!(path = %path.display(), len = ?result.as_ref().ok(), "fs.file_len");
        result
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let span = tracing::debug_span!("fs.read_dir", path = %path.display());
        let _guard = span.enter();

        let result = self.inner.read_dir(path);
        match &result {
            Ok(entries) => tracing::debug!(count = entries.len(), "listed"),
            Err(e) => tracing::error!(error = %e, "list failed"),
        }
        result
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let span = tracing::debug_span!("fs.remove_file", path = %path.display());
        let _guard = span.enter();

        let result = self.inner.remove_file(path);
        // NotFound is often expected (note already gone)
        match &result {
            Ok(()) => tracing::debug!("removed"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("remove skipped, file absent")
            }
            Err(e) => tracing::warn!(error = %e, "remove failed"),
        }
        result
    }

    fn sync_dir(&self, path: &Path) -> io::Result<()> {
        let result = self.inner.sync_dir(path);
        match &result {
            Ok(()) => tracing::trace!(path = %path.display(), "fs.sync_dir"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "fs.sync_dir failed"),
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
