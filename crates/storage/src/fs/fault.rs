// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fault-injecting filesystem adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{DirEntry, NoteFs, OsFs};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Filesystem operation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    CreateDir,
    Write,
    Read,
    Rename,
    FileLen,
    ReadDir,
    RemoveFile,
    SyncDir,
}

/// Recorded filesystem call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsCall {
    CreateDir { path: PathBuf },
    Write { path: PathBuf, bytes: usize },
    Read { path: PathBuf },
    Rename { from: PathBuf, to: PathBuf },
    FileLen { path: PathBuf },
    ReadDir { path: PathBuf },
    RemoveFile { path: PathBuf },
    SyncDir { path: PathBuf },
}

impl FsCall {
    pub fn op(&self) -> FsOp {
        match self {
            FsCall::CreateDir { .. } => FsOp::CreateDir,
            FsCall::Write { .. } => FsOp::Write,
            FsCall::Read { .. } => FsOp::Read,
            FsCall::Rename { .. } => FsOp::Rename,
            FsCall::FileLen { .. } => FsOp::FileLen,
            FsCall::ReadDir { .. } => FsOp::ReadDir,
            FsCall::RemoveFile { .. } => FsOp::RemoveFile,
            FsCall::SyncDir { .. } => FsOp::SyncDir,
        }
    }
}

/// What an injected fault does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// Fail the call with this error kind, without touching the disk
    Error(io::ErrorKind),
    /// Report a successful write but persist only the first `n` bytes
    ShortWrite(usize),
    /// Let the call succeed, then append stray bytes to the resulting file
    TamperAfter,
    /// During a listing, delete the named entry after it is listed, as a
    /// concurrent rename would, so its type lookup finds nothing
    VanishEntry(String),
}

#[derive(Debug, Clone)]
struct Rule {
    op: FsOp,
    path_fragment: Option<String>,
    fault: Fault,
    once: bool,
}

/// Host filesystem adapter with scripted faults and call recording
#[derive(Debug, Clone, Default)]
pub struct FaultFs {
    inner: OsFs,
    rules: Arc<Mutex<Vec<Rule>>>,
    calls: Arc<Mutex<Vec<FsCall>>>,
}

impl FaultFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `fault` to every call of `op`
    pub fn inject(&self, op: FsOp, fault: Fault) {
        self.push_rule(op, None, fault, false);
    }

    /// Apply `fault` to calls of `op` whose path contains `fragment`
    pub fn inject_on(&self, op: FsOp, fragment: &str, fault: Fault) {
        self.push_rule(op, Some(fragment.to_string()), fault, false);
    }

    /// Apply `fault` to the next call of `op` only
    pub fn inject_once(&self, op: FsOp, fault: Fault) {
        self.push_rule(op, None, fault, true);
    }

    /// Remove all pending faults
    pub fn clear(&self) {
        self.rules.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<FsCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn ops(&self) -> Vec<FsOp> {
        self.calls().iter().map(FsCall::op).collect()
    }

    fn push_rule(&self, op: FsOp, path_fragment: Option<String>, fault: Fault, once: bool) {
        self.rules
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Rule {
                op,
                path_fragment,
                fault,
                once,
            });
    }

    fn record(&self, call: FsCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }

    fn fault_for(&self, op: FsOp, path: &Path) -> Option<Fault> {
        let mut rules = self.rules.lock().unwrap_or_else(|e| e.into_inner());
        let path = path.to_string_lossy();
        let index = rules.iter().position(|r| {
            r.op == op
                && r.path_fragment
                    .as_deref()
                    .map_or(true, |fragment| path.contains(fragment))
        })?;
        if rules[index].once {
            Some(rules.remove(index).fault)
        } else {
            Some(rules[index].fault.clone())
        }
    }
}

fn injected(op: FsOp, kind: io::ErrorKind) -> io::Error {
    io::Error::new(kind, format!("injected {:?} fault", op))
}

fn tamper(path: &Path) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).open(path)?;
    file.write_all(b"\n// tampered\n")
}

impl NoteFs for FaultFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.record(FsCall::CreateDir {
            path: path.to_path_buf(),
        });
        match self.fault_for(FsOp::CreateDir, path) {
            Some(Fault::Error(kind)) => Err(injected(FsOp::CreateDir, kind)),
            _ => self.inner.create_dir_all(path),
        }
    }

    fn write(&self, path: &Path, bytes: &[u8], sync: bool) -> io::Result<()> {
        self.record(FsCall::Write {
            path: path.to_path_buf(),
            bytes: bytes.len(),
        });
        match self.fault_for(FsOp::Write, path) {
            Some(Fault::Error(kind)) => Err(injected(FsOp::Write, kind)),
            Some(Fault::ShortWrite(n)) => {
                self.inner.write(path, &bytes[..n.min(bytes.len())], sync)
            }
            Some(Fault::TamperAfter) => {
                self.inner.write(path, bytes, sync)?;
                tamper(path)
            }
            Some(Fault::VanishEntry(_)) | None => self.inner.write(path, bytes, sync),
        }
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.record(FsCall::Read {
            path: path.to_path_buf(),
        });
        match self.fault_for(FsOp::Read, path) {
            Some(Fault::Error(kind)) => Err(injected(FsOp::Read, kind)),
            _ => self.inner.read(path),
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.record(FsCall::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
        match self.fault_for(FsOp::Rename, to) {
            Some(Fault::Error(kind)) => Err(injected(FsOp::Rename, kind)),
            Some(Fault::TamperAfter) => {
                self.inner.rename(from, to)?;
                tamper(to)
            }
            _ => self.inner.rename(from, to),
        }
    }

    fn file_len(&self, path: &Path) -> io::Result<u64> {
        self.record(FsCall::FileLen {
            path: path.to_path_buf(),
        });
        match self.fault_for(FsOp::FileLen, path) {
            Some(Fault::Error(kind)) => Err(injected(FsOp::FileLen, kind)),
            _ => self.inner.file_len(path),
        }
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        self.record(FsCall::ReadDir {
            path: path.to_path_buf(),
        });
        match self.fault_for(FsOp::ReadDir, path) {
            Some(Fault::Error(kind)) => Err(injected(FsOp::ReadDir, kind)),
            Some(Fault::VanishEntry(name)) => {
                let mut entries = Vec::new();
                for entry in self.inner.read_dir(path)? {
                    let vanished = entry.path.file_name().is_some_and(|n| n == name.as_str());
                    let is_dir = if vanished {
                        self.inner.remove_file(&entry.path)?;
                        Err(io::Error::new(io::ErrorKind::NotFound, "entry vanished"))
                    } else {
                        Ok(entry.is_dir)
                    };
                    entries.extend(DirEntry::from_listing(entry.path, is_dir));
                }
                Ok(entries)
            }
            _ => self.inner.read_dir(path),
        }
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.record(FsCall::RemoveFile {
            path: path.to_path_buf(),
        });
        match self.fault_for(FsOp::RemoveFile, path) {
            Some(Fault::Error(kind)) => Err(injected(FsOp::RemoveFile, kind)),
            _ => self.inner.remove_file(path),
        }
    }

    fn sync_dir(&self, path: &Path) -> io::Result<()> {
        self.record(FsCall::SyncDir {
            path: path.to_path_buf(),
        });
        match self.fault_for(FsOp::SyncDir, path) {
            Some(Fault::Error(kind)) => Err(injected(FsOp::SyncDir, kind)),
            _ => self.inner.sync_dir(path),
        }
    }
}

#[cfg(test)]
#[path = "fault_tests.rs"]
mod tests;
