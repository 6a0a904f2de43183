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


//! Terminal shell over the folder model
//!
//! # Architecture
//!
//! - **Model**: `FolderListing` (in the `core` module)
//! - **View**: text written by `Session`
//! - **Controller**: Mediates between Model and View (in `controller.rs`)
//!
//! # Module Structure
//!
//! ```text
//! shell/
//! ├── mod.rs          // This file - exports
//! ├── actions.rs      // Command parsing (refresh, open, select, ...)
//! ├── controller.rs   // Controller
//! └── session.rs      // Read-eval-print loop
//! ```

pub mod actions;
pub mod controller;
pub mod session;

pub use {actions::Action, controller::Controller, session::Session};

#[cfg(test)]
mod tests;
