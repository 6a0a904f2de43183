//! Startup settings for the folder browser.
//!
//! Resolves which folder the listing opens on and which selection mode the
//! shell uses. Key rules:
//!
//! - **Explicit folder**: `~` is expanded, relative paths are kept relative
//!   until the listing makes them absolute
//! - **Default folder**: the directory holding the running executable
//! - **Selection mode**: multiple unless single selection is requested
//!
//! # Example
//!
//! ```no_run
//! use folder_view::config::Settings;
//! use std::path::Path;
//!
//! let settings = Settings::resolve(Some(Path::new("~/Documents")), false)?;
//! println!("Opening {}", settings.start_folder.display());
//! # Ok::<(), folder_view::config::ConfigError>(())
//! ```

pub mod error;

use std::env;
use std::path::{Path, PathBuf};

use crate::core::SelectionMode;

pub use error::ConfigError;

/// Resolved startup settings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    /// Folder listed when the shell starts.
    pub start_folder: PathBuf,
    /// Selection mode applied to the listing.
    pub mode: SelectionMode,
}

impl Settings {
    /// Creates settings for `start_folder` with multiple selection.
    pub fn new(start_folder: impl Into<PathBuf>) -> Self {
        Self {
            start_folder: start_folder.into(),
            mode: SelectionMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builds settings from command-line values.
    ///
    /// # Arguments
    ///
    /// * `folder` - Folder requested by the user, if any
    /// * `single` - Whether to restrict the selection to one entry
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEncoding` if `folder` is not UTF-8.
    /// Returns `ConfigError::ExecutableNotFound` or `ConfigError::NoParentDir`
    /// if no folder was given and the install directory cannot be found.
    pub fn resolve(folder: Option<&Path>, single: bool) -> Result<Self, ConfigError> {
        let start_folder = match folder {
            Some(folder) => expand_path(folder)?,
            None => install_dir()?,
        };

        let mode = if single {
            SelectionMode::Single
        } else {
            SelectionMode::Multiple
        };

        Ok(Self::new(start_folder).with_mode(mode))
    }
}

/// Expands a leading `~` to the user's home directory.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEncoding` if the path is not valid UTF-8.
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidEncoding(path.to_path_buf()))?;

    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// Directory containing the running executable.
pub fn install_dir() -> Result<PathBuf, ConfigError> {
    let exe = env::current_exe().map_err(ConfigError::ExecutableNotFound)?;

    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| ConfigError::NoParentDir(exe.clone()))
}

#[cfg(test)]
mod tests;
