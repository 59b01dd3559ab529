// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store root resolution
//!
//! `--root` wins, then `$VOIDNOTES_HOME`, then the platform's per-user data
//! location.

use crate::error::VnError;
use std::ffi::OsString;
use std::path::PathBuf;

pub const HOME_ENV: &str = "VOIDNOTES_HOME";

/// Resolve the store root from the command line and environment
pub fn resolve_root(explicit: Option<PathBuf>) -> Result<PathBuf, VnError> {
    choose_root(explicit, std::env::var_os(HOME_ENV), default_root())
}

fn choose_root(
    explicit: Option<PathBuf>,
    env: Option<OsString>,
    fallback: Option<PathBuf>,
) -> Result<PathBuf, VnError> {
    explicit
        .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or(fallback)
        .ok_or_else(VnError::no_home_dir)
}

#[cfg(windows)]
fn default_root() -> Option<PathBuf> {
    dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("AppData").join("Local")))
        .map(|base| base.join("VoidNotes"))
}

#[cfg(target_os = "macos")]
fn default_root() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join("Library")
            .join("Application Support")
            .join("VoidNotes")
    })
}

#[cfg(not(any(windows, target_os = "macos")))]
fn default_root() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".voidnotes"))
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod tests;
