// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Print every stored note as a JSON array

use super::Store;
use crate::error::VnError;
use anyhow::Result;
use std::io::Write;
use vn_core::codec;

#[derive(clap::Args)]
pub struct ListArgs {
    /// Pretty-print the array
    #[arg(long)]
    pretty: bool,
}

pub fn handle(args: ListArgs, store: &Store) -> Result<()> {
    let report = store.scan().map_err(VnError::from)?;

    for skipped in &report.skipped {
        eprintln!(
            "warning: skipped {}: {}",
            skipped.path.display(),
            skipped.reason
        );
    }

    let bytes = if args.pretty {
        serde_json::to_vec_pretty(&report.notes)?
    } else {
        codec::encode_list(&report.notes)?
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&bytes)?;
    writeln!(stdout)?;
    Ok(())
}
