// Copyright 2025 bakri (tidynest@proton.me)
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


//! Folder View
//!
//! A folder listing model with a terminal shell: list a directory's entry
//! names, select some of them, and switch folders.
//!
//! # Features
//!
//! - **Sorted Listing:** Every entry (files, folders, hidden) in plain
//!   case-sensitive order
//! - **Selection Tracking:** Selections always refer to listed entries
//! - **Graceful Rescans:** An unreadable folder shows zero entries instead
//!   of failing
//! - **Safe Folder Changes:** A rejected folder leaves the previous listing
//!   in place
//!
//! # Architecture
//!
//! - **`core`:** The model (`FolderListing`, directory sources, errors)
//! - **`config`:** Startup settings (start folder, selection mode)
//! - **`shell`:** Controller and line-oriented terminal shell
//!
//! # Examples
//!
//! ## Listing a folder
//!
//! ```no_run
//! use folder_view::core::FolderListing;
//!
//! let mut listing = FolderListing::new("/tmp");
//! listing.rescan();
//! println!("Files ({})", listing.entry_count());
//! for name in listing.entries() {
//!     println!("{}", name.to_string_lossy());
//! }
//! ```
//!
//! ## Changing folders and selecting
//!
//! ```no_run
//! use folder_view::core::FolderListing;
//!
//! let mut listing = FolderListing::new("/tmp");
//! listing.set_folder("/etc")?;
//! listing.set_selection(["passwd", "hosts"]);
//! assert_eq!(listing.selection_summary(), "hosts\npasswd");
//! # Ok::<(), folder_view::core::ListingError>(())
//! ```
//!
//! ## Running the shell
//!
//! ```no_run
//! use folder_view::config::Settings;
//! use folder_view::shell::{Controller, Session};
//!
//! let controller = Controller::new(&Settings::new("/tmp"));
//! let stdin = std::io::stdin();
//! Session::new(&controller, std::io::stdout()).run(stdin.lock())?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod config;
pub mod core;
pub mod shell;

// Re-export commonly used types for convenience
pub use crate::core::{FolderListing, ListingError, SelectionMode};
