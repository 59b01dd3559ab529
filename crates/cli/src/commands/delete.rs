// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::Store;
use crate::error::VnError;
use anyhow::Result;

#[derive(clap::Args)]
pub struct DeleteArgs {
    /// Id of the note to delete
    id: String,
}

pub fn handle(args: DeleteArgs, store: &Store) -> Result<()> {
    store.delete(&args.id).map_err(VnError::from)?;
    println!("Deleted note {}", args.id);
    Ok(())
}
