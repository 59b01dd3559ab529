// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Note <-> bytes conversion
//!
//! Files hold one pretty-printed JSON object per note. Listings are a compact
//! JSON array. Unknown fields are ignored on decode so newer writers stay
//! readable.

use crate::note::Note;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid note JSON: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode note: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Encode a single note for storage
pub fn encode(note: &Note) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec_pretty(note).map_err(CodecError::Encode)
}

/// Decode a single note
pub fn decode(bytes: &[u8]) -> Result<Note, CodecError> {
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}

/// Encode a listing; an empty slice encodes as `[]`
pub fn encode_list(notes: &[Note]) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(notes).map_err(CodecError::Encode)
}

pub fn decode_list(bytes: &[u8]) -> Result<Vec<Note>, CodecError> {
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
