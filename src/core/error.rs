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


use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A selection mode name that could not be parsed.
#[derive(Debug, Error, Eq, PartialEq)]
#[error("Unknown selection mode: {0} (expected single or multiple)")]
pub struct SelectionModeError(pub String);

/// Errors surfaced by `FolderListing`.
///
/// Only an explicit folder change can fail. Failures while rescanning the
/// current folder never leave the model; see [`ScanFailure`].
#[derive(Debug, Error)]
pub enum ListingError {
    /// The requested folder cannot be listed.
    #[error("Not a readable directory: {path}: {source}")]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure while reading a folder that is already current.
///
/// Absorbed inside the model and normalised to an empty entry list.
#[derive(Debug, Error)]
pub(crate) enum ScanFailure {
    #[error("Failed to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
