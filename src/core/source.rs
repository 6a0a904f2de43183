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


//! src/core/source.rs
//!
//! Directory-listing primitive used by the folder model
//!
//! The model never touches the filesystem directly. It asks a
//! `DirectorySource` for the names inside a folder, which keeps the
//! scanning logic testable with an in-memory source.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

/// Lists the entry names of a directory.
///
/// Implementations return names in whatever order the underlying listing
/// produces them; sorting is the model's job.
pub trait DirectorySource {
    /// Returns every entry name in `path`, or the read failure.
    fn list(&self, path: &Path) -> io::Result<Vec<OsString>>;
}

/// `DirectorySource` backed by `std::fs::read_dir`
///
/// Every entry is reported: files, subdirectories, symlinks and hidden
/// entries alike. Names are kept as the raw `OsString` the OS returned,
/// so two names that are not valid UTF-8 never collapse into one.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsSource;

impl DirectorySource for FsSource {
    fn list(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(path)? {
            let entry = entry?;
            names.push(entry.file_name());
        }

        Ok(names)
    }
}

impl<S: DirectorySource + ?Sized> DirectorySource for &S {
    fn list(&self, path: &Path) -> io::Result<Vec<OsString>> {
        (**self).list(path)
    }
}
