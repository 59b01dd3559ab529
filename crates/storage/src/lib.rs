// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Directory-backed note storage with atomic single-file commits

pub mod atomic;
pub mod config;
pub mod error;
pub mod fs;
pub mod paths;
pub mod scan;
pub mod store;

pub use atomic::{commit, CommitOptions, CommitReceipt};
pub use config::StoreConfig;
pub use error::{InputError, StoreError, VerifyFailure};
pub use fs::{DirEntry, NoteFs, OsFs, TracedFs};
pub use paths::NotePaths;
pub use scan::{load_all, ScanReport, SkipReason, SkippedFile};
pub use store::NoteStore;
