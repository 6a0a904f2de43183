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


//! src/core/listing.rs
//!
//! Folder listing model
//!
//! `FolderListing` owns the current folder, the sorted names found in it
//! and the user's selection. It knows nothing about widgets: a shell calls
//! its operations when the user refreshes, picks a folder or changes the
//! selection, and reads back the labels it needs.
//!
//! # Invariants
//!
//! - `entries` is the result of exactly one scan of `path`, sorted ascending
//!   by raw name bytes
//! - every selected name is a member of `entries`
//! - every scan clears the selection

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::error::{ListingError, ScanFailure};
use super::source::{DirectorySource, FsSource};
use super::types::{ListingState, SelectionMode};

/// A scanned folder and the current selection within it
///
/// # Example
///
/// ```no_run
/// use folder_view::core::FolderListing;
///
/// let mut listing = FolderListing::new("/tmp");
/// listing.rescan();
/// listing.set_selection(["b.txt", "a.txt"]);
/// println!("Files ({})", listing.entry_count());
/// println!("{}", listing.selection_summary());
/// ```
#[derive(Debug)]
pub struct FolderListing<S: DirectorySource = FsSource> {
    path: PathBuf,
    entries: Vec<OsString>,
    selection: HashSet<OsString>,
    mode: SelectionMode,
    state: ListingState,
    source: S,
}

impl FolderListing<FsSource> {
    /// Creates an unscanned listing for `path` over the real filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_source(path, FsSource)
    }
}

impl<S: DirectorySource> FolderListing<S> {
    /// Creates an unscanned listing for `path` backed by `source`
    ///
    /// Relative paths are made absolute against the working directory.
    /// Nothing is read until `rescan()` or `set_folder()` is called.
    pub fn with_source(path: impl Into<PathBuf>, source: S) -> Self {
        let path = path.into();
        let path = std::path::absolute(&path).unwrap_or(path);

        Self {
            path,
            entries: Vec::new(),
            selection: HashSet::new(),
            mode: SelectionMode::default(),
            state: ListingState::Empty,
            source,
        }
    }

    /// Switches to `new_path` and scans it
    ///
    /// # Errors
    ///
    /// Returns `ListingError::InvalidPath` if `new_path` cannot be listed.
    /// The current folder, entries and selection are left untouched in
    /// that case, so the caller can keep showing the previous folder.
    pub fn set_folder(&mut self, new_path: impl AsRef<Path>) -> Result<(), ListingError> {
        let requested = new_path.as_ref();
        let path = std::path::absolute(requested).map_err(|source| ListingError::InvalidPath {
            path: requested.to_path_buf(),
            source,
        })?;

        let names = match self.source.list(&path) {
            Ok(names) => names,
            Err(source) => {
                warn!(folder = %path.display(), error = %source, "Rejected folder change");
                return Err(ListingError::InvalidPath { path, source });
            }
        };

        info!(folder = %path.display(), "Folder changed");
        self.path = path;
        self.replace_entries(names);
        Ok(())
    }

    /// Re-reads the current folder
    ///
    /// Never fails. If the folder can no longer be read, the listing shows
    /// zero entries until the next successful scan.
    pub fn rescan(&mut self) {
        let names = match self.scan() {
            Ok(names) => names,
            Err(failure) => {
                warn!(error = %failure, "Scan failed, showing empty folder");
                Vec::new()
            }
        };

        self.replace_entries(names);
    }

    /// Replaces the selection with the names that exist in the listing
    ///
    /// Unknown names are dropped. In `Single` mode only the first known
    /// name (in argument order) is kept.
    pub fn set_selection<I>(&mut self, names: I)
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        let mut selection = HashSet::new();

        for name in names {
            let name = name.as_ref();
            if !self.contains(name) {
                continue;
            }
            selection.insert(name.to_os_string());
            if self.mode == SelectionMode::Single {
                break;
            }
        }

        self.selection = selection;
    }

    /// Replaces the selection by row position
    ///
    /// Positions past the end of the listing are dropped.
    pub fn set_selection_by_index<I>(&mut self, indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        let names: Vec<OsString> = indices
            .into_iter()
            .filter_map(|index| self.entries.get(index).cloned())
            .collect();

        self.set_selection(names);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selected names joined by newlines, in listing order
    ///
    /// Returns an empty string when nothing is selected. Names that are
    /// not valid UTF-8 are shown lossily.
    pub fn selection_summary(&self) -> String {
        self.selected()
            .iter()
            .map(|name| name.to_string_lossy())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Selected names in listing order
    pub fn selected(&self) -> Vec<&OsStr> {
        self.entries
            .iter()
            .filter(|name| self.selection.contains(name.as_os_str()))
            .map(OsString::as_os_str)
            .collect()
    }

    pub fn is_selected(&self, name: impl AsRef<OsStr>) -> bool {
        self.selection.contains(name.as_ref())
    }

    /// Number of entries found by the most recent scan
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[OsString] {
        &self.entries
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> ListingState {
        self.state
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Changes the selection mode
    ///
    /// Moving to `Single` keeps only the first selected entry in listing
    /// order.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;

        if mode == SelectionMode::Single && self.selection.len() > 1 {
            let first = self.selected().first().map(|name| name.to_os_string());
            self.selection = first.into_iter().collect();
        }
    }

    fn contains(&self, name: &OsStr) -> bool {
        self.entries
            .binary_search_by(|entry| entry.as_encoded_bytes().cmp(name.as_encoded_bytes()))
            .is_ok()
    }

    fn scan(&self) -> Result<Vec<OsString>, ScanFailure> {
        self.source
            .list(&self.path)
            .map_err(|source| ScanFailure::Unreadable {
                path: self.path.clone(),
                source,
            })
    }

    fn replace_entries(&mut self, mut names: Vec<OsString>) {
        names.sort_by(|a, b| a.as_encoded_bytes().cmp(b.as_encoded_bytes()));
        debug!(folder = %self.path.display(), count = names.len(), "Scanned folder");

        self.entries = names;
        self.selection.clear();
        self.state = ListingState::Scanned;
    }
}
