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


//! Shell actions
//!
//! Parses one line of user input into an `Action`. These are the terminal
//! counterparts of the menu items and selection events a windowed shell
//! would wire up: refresh, open folder, selection change.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::{SelectionMode, SelectionModeError};

/// A single shell command
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Print the listing
    List,
    /// Rescan the current folder
    Refresh,
    /// Change to another folder
    Open(PathBuf),
    /// Select entries by name
    Select(Vec<String>),
    /// Select entries by row position
    Rows(Vec<usize>),
    /// Drop the selection
    Clear,
    /// Change the selection mode
    Mode(SelectionMode),
    /// Print the selection summary
    Summary,
    Help,
    Quit,
}

/// Reasons a line could not be parsed
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ActionError {
    #[error("Unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("Not a row number: {0}")]
    InvalidRow(String),

    #[error(transparent)]
    InvalidMode(#[from] SelectionModeError),
}

/// Usage text printed by `help`
pub const HELP: &str = "\
Commands:
  list                 show the folder listing
  refresh              rescan the current folder
  open <folder>        list another folder (~ is expanded)
  select <name>...     select entries by name
  rows <n>...          select entries by row number (from 0)
  clear                clear the selection
  mode single|multiple change the selection mode
  summary              show the selected names
  help                 show this text
  quit                 leave";

impl Action {
    /// Parses a line of input
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Action))` - A command
    /// * `Ok(None)` - Blank line
    /// * `Err(ActionError)` - Unrecognised or malformed command
    pub fn parse(line: &str) -> Result<Option<Self>, ActionError> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let action = match command.to_lowercase().as_str() {
            "" => return Ok(None),
            "list" | "ls" => Action::List,
            "refresh" => Action::Refresh,
            "open" | "cd" => {
                if rest.is_empty() {
                    return Err(ActionError::MissingArgument("open"));
                }
                // Folder names may contain spaces, so keep the rest verbatim
                Action::Open(PathBuf::from(rest))
            }
            "select" => Action::Select(rest.split_whitespace().map(String::from).collect()),
            "rows" => {
                let rows = rest
                    .split_whitespace()
                    .map(|row| row.parse().map_err(|_| ActionError::InvalidRow(row.to_string())))
                    .collect::<Result<Vec<usize>, _>>()?;
                Action::Rows(rows)
            }
            "clear" => Action::Clear,
            "mode" => {
                if rest.is_empty() {
                    return Err(ActionError::MissingArgument("mode"));
                }
                Action::Mode(rest.parse()?)
            }
            "summary" => Action::Summary,
            "help" | "?" => Action::Help,
            "quit" | "exit" | "q" => Action::Quit,
            other => return Err(ActionError::UnknownCommand(other.to_string())),
        };

        Ok(Some(action))
    }
}
