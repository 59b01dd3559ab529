// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod delete;
pub mod list;
pub mod paths;
pub mod purge;
pub mod save;

use vn_storage::{NoteStore, OsFs, TracedFs};

/// The store every command runs against
pub type Store = NoteStore<TracedFs<OsFs>>;
