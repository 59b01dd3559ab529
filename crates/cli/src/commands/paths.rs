// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Show where the store keeps its files

use super::Store;
use anyhow::Result;

pub fn handle(store: &Store) -> Result<()> {
    println!("root:  {}", store.root().display());
    println!("notes: {}", store.notes_dir().display());
    println!("log:   {}", crate::logging::log_path().display());
    Ok(())
}
