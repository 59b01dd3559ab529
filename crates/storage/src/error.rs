// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the note store

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use vn_core::{CodecError, IdError, NoteId};

/// Why an input could not be turned into a storable note
#[derive(Debug, Error)]
pub enum InputError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Id(#[from] IdError),
}

/// Why written bytes could not be confirmed
#[derive(Debug, Error)]
pub enum VerifyFailure {
    #[error("could not read back file: {0}")]
    Unreadable(#[source] io::Error),
    #[error("size mismatch: expected {expected} bytes, found {actual}")]
    LengthMismatch { expected: u64, actual: u64 },
}

/// Errors returned by store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("malformed note input: {0}")]
    MalformedInput(#[from] InputError),

    #[error("directory unavailable at {path}: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read notes directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write staging file for note {id} at {path}: {source}")]
    WriteFailed {
        id: NoteId,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("staging file for note {id} at {path} failed verification: {failure}")]
    VerificationFailed {
        id: NoteId,
        path: PathBuf,
        #[source]
        failure: VerifyFailure,
    },

    #[error("failed to commit note {id} to {path}: {source}")]
    CommitFailed {
        id: NoteId,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("note {id} at {path} changed after commit: {failure}")]
    PostCommitMismatch {
        id: NoteId,
        path: PathBuf,
        #[source]
        failure: VerifyFailure,
    },

    #[error("note not found: {id}")]
    NotFound { id: NoteId },

    #[error("failed to delete note {id} at {path}: {source}")]
    DeleteFailed {
        id: NoteId,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode notes: {0}")]
    Encode(#[source] CodecError),

    #[error("invalid store config at {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl StoreError {
    /// The note the failed operation was about, if any
    pub fn note_id(&self) -> Option<&NoteId> {
        match self {
            StoreError::WriteFailed { id, .. }
            | StoreError::VerificationFailed { id, .. }
            | StoreError::CommitFailed { id, .. }
            | StoreError::PostCommitMismatch { id, .. }
            | StoreError::NotFound { id }
            | StoreError::DeleteFailed { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

impl From<IdError> for StoreError {
    fn from(e: IdError) -> Self {
        StoreError::MalformedInput(InputError::Id(e))
    }
}
