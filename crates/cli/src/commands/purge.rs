// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remove staging files left behind by interrupted saves

use super::Store;
use crate::error::VnError;
use anyhow::Result;

pub fn handle(store: &Store) -> Result<()> {
    let removed = store.purge_staging().map_err(VnError::from)?;
    match removed {
        0 => println!("No staging files"),
        1 => println!("Removed 1 staging file"),
        n => println!("Removed {} staging files", n),
    }
    Ok(())
}
