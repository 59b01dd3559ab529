// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::path::Path;

pub const SCENARIO: &str = r#"{"id":"abc","title":"T","content":"C","createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}"#;

/// `vn` pointed at an isolated store root
pub fn vn(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vn").expect("vn binary should build");
    cmd.arg("--root")
        .arg(root)
        .env_remove("VOIDNOTES_HOME")
        .env_remove("RUST_LOG");
    cmd
}

/// Run `vn list` and parse its output
pub fn list(root: &Path) -> Vec<Value> {
    let output = vn(root).arg("list").output().expect("vn list should run");
    assert!(output.status.success(), "vn list failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("vn list should print a JSON array")
}

pub fn ids(notes: &[Value]) -> Vec<String> {
    let mut ids: Vec<String> = notes
        .iter()
        .filter_map(|n| n["id"].as_str().map(str::to_string))
        .collect();
    ids.sort();
    ids
}
