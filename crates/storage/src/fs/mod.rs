// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem adapters
//!
//! Every filesystem effect of the store goes through [`NoteFs`], so tracing
//! and fault injection can be layered on at construction.

mod os;
mod traced;

pub use os::OsFs;
pub use traced::TracedFs;

#[cfg(test)]
mod fault;
#[cfg(test)]
pub use fault::{Fault, FaultFs, FsCall, FsOp};

use std::io;
use std::path::{Path, PathBuf};

/// A directory listing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl DirEntry {
    /// Build an entry from a listed path and its type lookup.
    ///
    /// An entry renamed or removed after the listing yields `None`. Any other
    /// lookup failure is reported as a file, so the reader of that file records
    /// the failure for that entry alone.
    pub fn from_listing(path: PathBuf, is_dir: io::Result<bool>) -> Option<Self> {
        match is_dir {
            Ok(is_dir) => Some(Self { path, is_dir }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(_) => Some(Self {
                path,
                is_dir: false,
            }),
        }
    }
}

/// Blocking filesystem operations used by the store
pub trait NoteFs: Clone + Send + Sync + 'static {
    /// Create a directory and all missing parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create or truncate `path` and write `bytes`; with `sync`, flush to
    /// stable storage before returning
    fn write(&self, path: &Path, bytes: &[u8], sync: bool) -> io::Result<()>;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace `to` with `from` in one step
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Size in bytes of the file at `path`
    fn file_len(&self, path: &Path) -> io::Result<u64>;

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Persist directory metadata (entry renames) to stable storage
    fn sync_dir(&self, path: &Path) -> io::Result<()>;
}
