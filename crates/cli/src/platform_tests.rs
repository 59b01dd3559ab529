// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    explicit_wins = { Some("/cli"), Some("/env"), Some("/default"), "/cli" },
    env_beats_default = { None, Some("/env"), Some("/default"), "/env" },
    empty_env_ignored = { None, Some(""), Some("/default"), "/default" },
    default_when_unset = { None, None, Some("/default"), "/default" },
)]
fn root_precedence(
    explicit: Option<&str>,
    env: Option<&str>,
    fallback: Option<&str>,
    expected: &str,
) {
    let root = choose_root(
        explicit.map(PathBuf::from),
        env.map(OsString::from),
        fallback.map(PathBuf::from),
    )
    .unwrap();
    assert_eq!(root, PathBuf::from(expected));
}

#[test]
fn no_location_is_an_error() {
    let err = choose_root(None, None, None).unwrap_err();
    assert!(err.to_string().contains("VOIDNOTES_HOME"));
}

#[cfg(not(any(windows, target_os = "macos")))]
#[test]
fn default_root_is_dot_voidnotes_in_home() {
    if let Some(home) = dirs::home_dir() {
        assert_eq!(default_root(), Some(home.join(".voidnotes")));
    }
}
