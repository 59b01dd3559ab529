// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Store errors are translated into a `VnError` that says what went wrong,
//! why it might have happened, and how to fix it.

use std::fmt;
use std::path::Path;
use vn_storage::{InputError, StoreError};

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct VnError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl VnError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for VnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for VnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl VnError {
    /// Error for deleting a note that does not exist.
    pub fn note_not_found(id: &str) -> Self {
        VnError::new(format!("Note '{}' not found", id))
            .with_context("The note may already have been deleted")
            .with_suggestion("List stored notes: vn list")
    }

    /// Error for input that is not a usable note.
    pub fn malformed_input(detail: impl fmt::Display) -> Self {
        VnError::new("Input is not a valid note")
            .with_context(detail.to_string())
            .with_suggestion(
                "Provide a JSON object with a non-empty \"id\" containing no path separators",
            )
    }

    /// Error for when the store directories cannot be created.
    pub fn directory_unavailable(path: &Path) -> Self {
        VnError::new(format!("Cannot create store directory {}", path.display()))
            .with_context("A regular file may be in the way, or the parent is not writable")
            .with_suggestion("Choose another location with --root or VOIDNOTES_HOME")
    }

    /// Error for an unreadable or invalid `config.toml`.
    pub fn invalid_config(path: &Path, message: &str) -> Self {
        VnError::new(format!("Invalid store config {}", path.display()))
            .with_context(message.to_string())
            .with_suggestion("Supported keys: fsync, purge_staging_on_open")
    }

    /// Error for when no default store location can be determined.
    pub fn no_home_dir() -> Self {
        VnError::new("Cannot determine where to keep notes")
            .with_context("No home directory was found for the current user")
            .with_suggestion("Set VOIDNOTES_HOME or pass --root <dir>")
    }

    /// Error for when the note input could not be read.
    pub fn unreadable_input(origin: &str) -> Self {
        VnError::new(format!("Failed to read note from {}", origin))
    }
}

impl From<StoreError> for VnError {
    fn from(err: StoreError) -> Self {
        let vn = match &err {
            StoreError::MalformedInput(InputError::Codec(e)) => VnError::malformed_input(e),
            StoreError::MalformedInput(InputError::Id(e)) => VnError::malformed_input(e),
            StoreError::DirectoryUnavailable { path, .. } => VnError::directory_unavailable(path),
            StoreError::NotFound { id } => VnError::note_not_found(id.as_str()),
            StoreError::Config { path, message } => VnError::invalid_config(path, message),
            StoreError::WriteFailed { .. }
            | StoreError::VerificationFailed { .. }
            | StoreError::CommitFailed { .. }
            | StoreError::PostCommitMismatch { .. } => VnError::new(err.to_string())
                .with_context("The previously saved version of the note is unchanged")
                .with_suggestion("Check free space and permissions, then save again"),
            StoreError::DirectoryUnreadable { .. } | StoreError::DeleteFailed { .. } => {
                VnError::new(err.to_string()).with_suggestion("Check directory permissions")
            }
            StoreError::Encode(_) => VnError::new(err.to_string()),
        };
        vn.with_source(err)
    }
}
