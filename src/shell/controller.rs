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


//! Controller - Mediates between the folder model and a shell
//!
//! # Responsibilities
//!
//! - Own the session's single `FolderListing`
//! - Forward refresh, folder change and selection events to it
//! - Provide display labels in shell-friendly form
//!
//! # Architecture
//!
//! The Controller holds the model but knows nothing about how the shell
//! draws. Methods take `&self` so one controller can be shared between
//! several event handlers through an `Rc`.

use std::cell::RefCell;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Settings;
use crate::core::{DirectorySource, FolderListing, FsSource, ListingError, SelectionMode};

/// Controller coordinating the folder model and its shell
pub struct Controller<S: DirectorySource = FsSource> {
    /// The listing shown by the shell
    listing: RefCell<FolderListing<S>>,
}

impl Controller<FsSource> {
    /// Creates a Controller for the configured start folder
    ///
    /// The folder is scanned straight away. An unreadable start folder is
    /// not an error; it simply lists zero entries.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use folder_view::config::Settings;
    /// use folder_view::shell::Controller;
    ///
    /// let controller = Controller::new(&Settings::new("/tmp"));
    /// println!("{}", controller.column_title());
    /// ```
    pub fn new(settings: &Settings) -> Self {
        let mut listing = FolderListing::new(settings.start_folder.clone());
        listing.set_mode(settings.mode);
        Self::with_listing(listing)
    }
}

impl<S: DirectorySource> Controller<S> {
    /// Wraps an existing listing and performs the initial scan
    pub fn with_listing(mut listing: FolderListing<S>) -> Self {
        listing.rescan();
        Self {
            listing: RefCell::new(listing),
        }
    }

    /// Re-reads the current folder
    ///
    /// # Returns
    ///
    /// Number of entries found
    pub fn refresh(&self) -> usize {
        let mut listing = self.listing.borrow_mut();
        listing.rescan();
        listing.entry_count()
    }

    /// Switches to another folder
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of entries in the new folder
    /// * `Err(ListingError)` - Folder unusable; the previous folder stays
    ///   listed
    pub fn open_folder(&self, path: &Path) -> Result<usize, ListingError> {
        let mut listing = self.listing.borrow_mut();
        listing.set_folder(path)?;
        Ok(listing.entry_count())
    }

    /// Applies a selection change reported by name
    pub fn select<I>(&self, names: I)
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        self.listing.borrow_mut().set_selection(names);
        debug!(selected = self.listing.borrow().selected().len(), "Selection changed");
    }

    /// Applies a selection change reported by row position
    pub fn select_rows<I>(&self, rows: I)
    where
        I: IntoIterator<Item = usize>,
    {
        self.listing.borrow_mut().set_selection_by_index(rows);
        debug!(selected = self.listing.borrow().selected().len(), "Selection changed");
    }

    pub fn clear_selection(&self) {
        self.listing.borrow_mut().clear_selection();
    }

    pub fn set_mode(&self, mode: SelectionMode) {
        self.listing.borrow_mut().set_mode(mode);
    }

    pub fn mode(&self) -> SelectionMode {
        self.listing.borrow().mode()
    }

    /// Column header text, e.g. `Files (12)`
    pub fn column_title(&self) -> String {
        format!("Files ({})", self.listing.borrow().entry_count())
    }

    /// Selection label text: selected names, one per line
    pub fn selection_label(&self) -> String {
        self.listing.borrow().selection_summary()
    }

    /// Returns the current folder
    pub fn folder(&self) -> PathBuf {
        self.listing.borrow().path().to_path_buf()
    }

    /// Returns the current entries with their selection flag
    ///
    /// Names that are not valid UTF-8 are shown lossily; rows stay
    /// distinct even when their display text is the same.
    pub fn rows(&self) -> Vec<(String, bool)> {
        let listing = self.listing.borrow();
        listing
            .entries()
            .iter()
            .map(|name| (name.to_string_lossy().into_owned(), listing.is_selected(name)))
            .collect()
    }

    pub fn entry_count(&self) -> usize {
        self.listing.borrow().entry_count()
    }
}
