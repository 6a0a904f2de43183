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


//! src/core/types.rs
//!
//! Small value types shared by the folder listing model
//!
//! - `SelectionMode`: How many entries a selection may hold
//! - `ListingState`: Whether the listing has been scanned yet

use std::fmt;
use std::str::FromStr;

use super::error::SelectionModeError;

/// Selection model used by the hosting view
///
/// Multi-select views report any number of rows; single-select views
/// report at most one.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SelectionMode {
    /// At most one selected entry
    Single,
    /// Any number of selected entries
    #[default]
    Multiple,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Single => write!(f, "single"),
            SelectionMode::Multiple => write!(f, "multiple"),
        }
    }
}

impl FromStr for SelectionMode {
    type Err = SelectionModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" | "browse" => Ok(SelectionMode::Single),
            "multiple" | "multi" => Ok(SelectionMode::Multiple),
            other => Err(SelectionModeError(other.to_string())),
        }
    }
}

/// Lifecycle of a `FolderListing`
///
/// A listing starts `Empty` and moves to `Scanned` after the first scan,
/// whether or not that scan could read the directory. There is no way
/// back to `Empty`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ListingState {
    /// No scan has happened yet
    Empty,
    /// Entries reflect the most recent scan (possibly zero entries)
    Scanned,
}

impl fmt::Display for ListingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingState::Empty => write!(f, "empty"),
            ListingState::Scanned => write!(f, "scanned"),
        }
    }
}
