// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vn-core: data model for the VoidNotes note store
//!
//! This crate provides:
//! - The `Note` entity and its fixed JSON shape
//! - `NoteId`, a validated identifier safe to use as a filename stem
//! - The codec converting notes to and from bytes

pub mod codec;
pub mod id;
pub mod note;

pub use codec::CodecError;
pub use id::{IdError, NoteId};
pub use note::Note;
