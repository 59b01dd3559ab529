// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Note identifiers
//!
//! Ids are caller-supplied and used verbatim as filename stems, so anything
//! that could escape the notes directory is rejected up front.

use std::fmt;
use thiserror::Error;

/// Reasons an id cannot be used as a filename stem
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("note id is empty")]
    Empty,
    #[error("note id {0:?} contains a path separator")]
    Separator(String),
    #[error("note id {0:?} contains a NUL byte")]
    Nul(String),
    #[error("note id {0:?} is a relative directory reference")]
    DirectoryReference(String),
}

/// Validated note identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(String);

impl NoteId {
    /// Validate a raw id.
    pub fn parse(raw: impl Into<String>) -> Result<Self, IdError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(IdError::Empty);
        }
        if raw == "." || raw == ".." {
            return Err(IdError::DirectoryReference(raw));
        }
        if raw.contains(|c: char| c == '/' || c == '\\') {
            return Err(IdError::Separator(raw));
        }
        if raw.contains('\0') {
            return Err(IdError::Nul(raw));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for NoteId {
    type Error = IdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        NoteId::parse(s)
    }
}

impl TryFrom<String> for NoteId {
    type Error = IdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        NoteId::parse(s)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
