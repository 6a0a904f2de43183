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

/// Errors that can occur while resolving startup settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The running executable could not be located.
    #[error("Cannot locate the running executable: {0}")]
    ExecutableNotFound(#[source] io::Error),

    /// The executable path has no parent directory.
    #[error("Executable has no parent directory: {0}")]
    NoParentDir(PathBuf),

    /// Folder argument is not valid UTF-8, so `~` cannot be expanded.
    #[error("Invalid path encoding: {0}")]
    InvalidEncoding(PathBuf),
}
