// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Save a note from an argument, a file, or stdin

use super::Store;
use crate::error::VnError;
use anyhow::Result;
use std::io::Read;
use std::path::PathBuf;

#[derive(clap::Args)]
pub struct SaveArgs {
    /// Note JSON (reads stdin when omitted or `-`)
    #[arg(conflicts_with = "file")]
    json: Option<String>,

    /// Read the note JSON from a file
    #[arg(long, short)]
    file: Option<PathBuf>,
}

pub fn handle(args: SaveArgs, store: &Store) -> Result<()> {
    let input = read_input(&args)?;
    let receipt = store.save(&input).map_err(VnError::from)?;

    println!("Saved note {} ({} bytes)", receipt.id, receipt.bytes);
    Ok(())
}

fn read_input(args: &SaveArgs) -> Result<Vec<u8>, VnError> {
    if let Some(path) = &args.file {
        let origin = path.display().to_string();
        return std::fs::read(path).map_err(|e| input_error(&origin, e));
    }

    match args.json.as_deref() {
        Some(json) if json != "-" => Ok(json.as_bytes().to_vec()),
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| input_error("stdin", e))?;
            Ok(buf)
        }
    }
}

fn input_error(origin: &str, e: std::io::Error) -> VnError {
    VnError::unreadable_input(origin)
        .with_context(e.to_string())
        .with_source(e)
}
