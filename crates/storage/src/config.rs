// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store configuration
//!
//! Read from `<root>/config.toml` when present:
//!
//! ```toml
//! fsync = true
//! purge_staging_on_open = false
//! ```

use crate::atomic::CommitOptions;
use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Flush staging files and the notes directory to stable storage
    pub fsync: bool,
    /// Remove leftover staging files when the store is opened
    pub purge_staging_on_open: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            fsync: true,
            purge_staging_on_open: false,
        }
    }
}

impl StoreConfig {
    pub const FILE_NAME: &'static str = "config.toml";

    /// Load `<root>/config.toml`, falling back to defaults when it is absent.
    ///
    /// A root that is not yet a directory has no config; creating it is left
    /// to the store so that failure surfaces as `DirectoryUnavailable`.
    pub fn load(root: &Path) -> Result<Self, StoreError> {
        if !root.is_dir() {
            return Ok(Self::default());
        }
        let path = root.join(Self::FILE_NAME);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(StoreError::Config {
                    path,
                    message: e.to_string(),
                })
            }
        };
        Self::parse(&content).map_err(|e| StoreError::Config {
            path,
            message: e.to_string(),
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn commit_options(&self) -> CommitOptions {
        CommitOptions { fsync: self.fsync }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
