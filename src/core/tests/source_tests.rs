// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Directory source tests

use std::fs;
use tempfile::TempDir;

use crate::core::{DirectorySource, FsSource};

#[test]
fn test_fs_source_lists_all_entries() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("file.txt"), "content").unwrap();
    fs::write(temp_dir.path().join(".dotfile"), "").unwrap();
    fs::create_dir(temp_dir.path().join("nested")).unwrap();

    let mut names = FsSource.list(temp_dir.path()).unwrap();
    names.sort();

    assert_eq!(names, [".dotfile", "file.txt", "nested"]);
}

#[test]
fn test_fs_source_does_not_recurse() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("nested")).unwrap();
    fs::write(temp_dir.path().join("nested").join("inner.txt"), "").unwrap();

    let names = FsSource.list(temp_dir.path()).unwrap();

    assert_eq!(names, ["nested"]);
}

#[test]
fn test_fs_source_empty_folder() {
    let temp_dir = TempDir::new().unwrap();

    let names = FsSource.list(temp_dir.path()).unwrap();

    assert!(names.is_empty());
}

#[test]
fn test_fs_source_missing_folder() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    assert!(FsSource.list(&missing).is_err());
}

#[test]
fn test_fs_source_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("file.txt");
    fs::write(&file, "").unwrap();

    assert!(FsSource.list(&file).is_err());
}

#[cfg(target_os = "linux")]
#[test]
fn test_fs_source_keeps_raw_names() {
    use crate::core::FolderListing;
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(OsStr::from_bytes(b"\xff")), "").unwrap();
    fs::write(temp_dir.path().join(OsStr::from_bytes(b"\xfe")), "").unwrap();

    let mut names = FsSource.list(temp_dir.path()).unwrap();
    names.sort();
    assert_eq!(names, [OsStr::from_bytes(b"\xfe"), OsStr::from_bytes(b"\xff")]);

    let mut listing = FolderListing::new(temp_dir.path());
    listing.rescan();
    listing.set_selection_by_index([0]);

    assert_eq!(listing.entry_count(), 2);
    assert_eq!(listing.selected(), [OsStr::from_bytes(b"\xfe")]);
    assert_eq!(listing.selection_summary(), "\u{FFFD}");
}
