// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! vn - VoidNotes CLI

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod error;
mod logging;
mod platform;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{delete, list, paths, purge, save, Store};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use vn_storage::{NoteStore, OsFs, StoreConfig, TracedFs};

use crate::error::VnError;

#[derive(Parser)]
#[command(
    name = "vn",
    version,
    about = "VoidNotes - durable note storage"
)]
struct Cli {
    /// Store root directory (defaults to $VOIDNOTES_HOME or the platform data dir)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a note
    Save(save::SaveArgs),
    /// Print all notes as a JSON array
    List(list::ListArgs),
    /// Delete a note
    Delete(delete::DeleteArgs),
    /// Show the store locations
    Paths,
    /// Remove leftover staging files
    PurgeStaging,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging is best effort; the store works without it
    let log_guard = match logging::setup_logging(cli.verbose) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {:#}", e);
            None
        }
    };

    info!(version = env!("CARGO_PKG_VERSION"), "vn starting");

    let code = match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{:#}", e), "command failed");
            match e.downcast_ref::<VnError>() {
                Some(vn) => eprint!("{}", vn),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    };

    info!("vn exiting");
    drop(log_guard);
    code
}

fn run(cli: Cli) -> Result<()> {
    let store = open_store(cli.root)?;

    match cli.command {
        Commands::Save(args) => save::handle(args, &store),
        Commands::List(args) => list::handle(args, &store),
        Commands::Delete(args) => delete::handle(args, &store),
        Commands::Paths => paths::handle(&store),
        Commands::PurgeStaging => purge::handle(&store),
    }
}

fn open_store(root: Option<PathBuf>) -> Result<Store, VnError> {
    let root = platform::resolve_root(root)?;
    let config = StoreConfig::load(&root)?;
    Ok(NoteStore::open_with(TracedFs::new(OsFs), root, config)?)
}
