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


//! src/core/mod.rs
//!
//! Folder listing model
//!
//! This module contains everything needed to turn a directory into a
//! sorted, selectable list of names:
//! - `FolderListing`: current folder, entries and selection
//! - `DirectorySource`: the directory-listing primitive the model reads from
//! - Selection mode and listing state types
//!
//! Nothing in here depends on how the list is displayed, so the whole
//! model can be unit tested without a terminal or a display server.

pub mod error;
pub mod listing;
pub mod source;
pub mod types;

pub use error::{ListingError, SelectionModeError};
pub use listing::FolderListing;
pub use source::{DirectorySource, FsSource};
pub use types::{ListingState, SelectionMode};

#[cfg(test)]
mod tests;
