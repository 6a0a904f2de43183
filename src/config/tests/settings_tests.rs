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


//! Settings tests
//!
//! Tests for start folder resolution

use std::path::{Path, PathBuf};

use crate::config::{expand_path, install_dir, Settings};
use crate::core::SelectionMode;

#[test]
fn test_explicit_folder_used() {
    let settings = Settings::resolve(Some(Path::new("/srv/data")), false).unwrap();

    assert_eq!(settings.start_folder, PathBuf::from("/srv/data"));
    assert_eq!(settings.mode, SelectionMode::Multiple);
}

#[test]
fn test_single_flag_sets_mode() {
    let settings = Settings::resolve(Some(Path::new("/srv/data")), true).unwrap();

    assert_eq!(settings.mode, SelectionMode::Single);
}

#[test]
fn test_default_folder_is_install_dir() {
    let settings = Settings::resolve(None, false).unwrap();
    let exe = std::env::current_exe().unwrap();

    assert_eq!(Some(settings.start_folder.as_path()), exe.parent());
}

#[test]
fn test_install_dir_is_directory() {
    let dir = install_dir().unwrap();

    assert!(dir.is_dir(), "Install dir should exist: {}", dir.display());
}

#[test]
fn test_tilde_expanded() {
    let expanded = expand_path(Path::new("~/notes")).unwrap();

    assert!(!expanded.starts_with("~"), "Tilde should be expanded: {}", expanded.display());
    assert!(expanded.ends_with("notes"));
}

#[test]
fn test_plain_path_unchanged() {
    let expanded = expand_path(Path::new("relative/dir")).unwrap();

    assert_eq!(expanded, PathBuf::from("relative/dir"));
}

#[test]
fn test_with_mode() {
    let settings = Settings::new("/tmp").with_mode(SelectionMode::Single);

    assert_eq!(settings.start_folder, PathBuf::from("/tmp"));
    assert_eq!(settings.mode, SelectionMode::Single);
}
