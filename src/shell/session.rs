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


//! Line-oriented terminal shell
//!
//! Reads `Action`s from any `BufRead`, applies them through the
//! `Controller`, and writes the resulting labels to any `Write`. After a
//! folder change or refresh the listing is reprinted; after a selection
//! change the selection label is.

use std::io::{self, BufRead, Write};

use colored::*;
use tracing::warn;

use crate::config::expand_path;
use crate::core::DirectorySource;
use crate::shell::actions::{Action, HELP};
use crate::shell::Controller;

/// Whether the session should keep reading input
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal shell over a shared `Controller`
pub struct Session<'a, S: DirectorySource, W: Write> {
    controller: &'a Controller<S>,
    out: W,
    prompt: Option<&'static str>,
}

impl<'a, S: DirectorySource, W: Write> Session<'a, S, W> {
    pub fn new(controller: &'a Controller<S>, out: W) -> Self {
        Self {
            controller,
            out,
            prompt: None,
        }
    }

    /// Prints `prompt` before reading each line
    pub fn with_prompt(mut self, prompt: &'static str) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// Runs until `quit` or end of input
    ///
    /// Prints the listing once on start. Malformed commands are reported
    /// and skipped.
    ///
    /// # Errors
    ///
    /// Returns an I/O error only if reading input or writing output fails.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        self.print_listing()?;

        let mut lines = input.lines();
        loop {
            if let Some(prompt) = self.prompt {
                write!(self.out, "{}", prompt)?;
                self.out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            match Action::parse(&line) {
                Ok(None) => continue,
                Ok(Some(action)) => {
                    if self.execute(action)? == Flow::Quit {
                        break;
                    }
                }
                Err(e) => writeln!(self.out, "{} {}", "✗".red(), e)?,
            }
        }

        Ok(())
    }

    /// Applies one action and prints its result
    pub fn execute(&mut self, action: Action) -> io::Result<Flow> {
        match action {
            Action::List => self.print_listing()?,
            Action::Refresh => {
                self.controller.refresh();
                self.print_listing()?;
            }
            Action::Open(path) => self.open(&path)?,
            Action::Select(names) => {
                self.controller.select(names);
                self.print_summary()?;
            }
            Action::Rows(rows) => {
                self.controller.select_rows(rows);
                self.print_summary()?;
            }
            Action::Clear => {
                self.controller.clear_selection();
                self.print_summary()?;
            }
            Action::Mode(mode) => {
                self.controller.set_mode(mode);
                writeln!(self.out, "{} Selection mode: {}", "✓".green(), mode)?;
                self.print_summary()?;
            }
            Action::Summary => self.print_summary()?,
            Action::Help => writeln!(self.out, "{}", HELP)?,
            Action::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Consumes the session, returning the output sink
    pub fn into_inner(self) -> W {
        self.out
    }

    fn open(&mut self, path: &std::path::Path) -> io::Result<()> {
        let path = match expand_path(path) {
            Ok(path) => path,
            Err(e) => return writeln!(self.out, "{} {}", "✗".red(), e),
        };

        match self.controller.open_folder(&path) {
            Ok(_) => self.print_listing(),
            Err(e) => {
                warn!(error = %e, "Folder change rejected");
                writeln!(self.out, "{} {}", "✗".red(), e)?;
                writeln!(
                    self.out,
                    "  Still showing {}",
                    self.controller.folder().display()
                )
            }
        }
    }

    fn print_listing(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {}",
            self.controller.column_title().bold(),
            self.controller.folder().display().to_string().dimmed()
        )?;

        for (row, (name, selected)) in self.controller.rows().into_iter().enumerate() {
            let marker = if selected { "*".green() } else { " ".normal() };
            writeln!(self.out, "{} {:>3}  {}", marker, row, name)?;
        }

        Ok(())
    }

    fn print_summary(&mut self) -> io::Result<()> {
        let label = self.controller.selection_label();
        if label.is_empty() {
            writeln!(self.out, "{}", "(nothing selected)".dimmed())
        } else {
            writeln!(self.out, "{}", label)
        }
    }
}
