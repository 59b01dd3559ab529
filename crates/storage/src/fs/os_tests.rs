// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::PathBuf;

#[test]
fn read_dir_lists_files_and_directories() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.json"), b"{}").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();

    let mut entries = OsFs.read_dir(dir.path()).unwrap();
    entries.sort_by(|x, y| x.path.cmp(&y.path));

    assert_eq!(
        entries,
        vec![
            DirEntry {
                path: dir.path().join("a.json"),
                is_dir: false,
            },
            DirEntry {
                path: dir.path().join("sub"),
                is_dir: true,
            },
        ]
    );
}

#[test]
fn entry_gone_before_type_lookup_is_dropped() {
    let lookup = Err(io::Error::new(io::ErrorKind::NotFound, "renamed away"));
    assert_eq!(DirEntry::from_listing(PathBuf::from("a.json.tmp"), lookup), None);
}

#[test]
fn failed_type_lookup_is_treated_as_file() {
    let lookup = Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
    assert_eq!(
        DirEntry::from_listing(PathBuf::from("a.json"), lookup),
        Some(DirEntry {
            path: PathBuf::from("a.json"),
            is_dir: false,
        })
    );
}
