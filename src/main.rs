//! CLI entry point for folder-view
//!
//! Provides command-line interface for listing a folder, selecting
//! entries, and launching the interactive shell.

use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use folder_view::config::Settings;
use folder_view::shell::{Action, Controller, Session};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "folder-view")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Folder to list (defaults to the program's own directory)
    #[arg(short, long, global = true)]
    folder: Option<PathBuf>,

    /// Allow at most one selected entry
    #[arg(long, global = true)]
    single: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the folder's entries
    List,

    /// Select entries by name and print the selection
    Select {
        /// Entry names to select
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Browse interactively (default)
    Browse,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let settings = Settings::resolve(cli.folder.as_deref(), cli.single)?;
    let controller = Controller::new(&settings);

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::List => list_folder(&controller)?,
        Commands::Select { names } => select_entries(&controller, names)?,
        Commands::Browse => browse(&controller)?,
    }

    Ok(())
}

/// Installs the stderr log subscriber
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Print the listing once
fn list_folder(controller: &Controller) -> anyhow::Result<()> {
    Session::new(controller, io::stdout()).execute(Action::List)?;
    Ok(())
}

/// Select entries and print the selection label
fn select_entries(controller: &Controller, names: Vec<String>) -> anyhow::Result<()> {
    let requested = names.len();
    controller.select(names);

    let label = controller.selection_label();
    if label.is_empty() {
        println!(
            "{} None of the {} name{} found in {}",
            "✗".red().bold(),
            requested,
            if requested == 1 { " was" } else { "s were" },
            controller.folder().display()
        );
        std::process::exit(1);
    }

    println!("{}", label);
    Ok(())
}

/// Run the interactive shell on stdin/stdout
fn browse(controller: &Controller) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new(controller, io::stdout());
    if stdin.is_terminal() {
        println!("{}", "Folder View - type 'help' for commands".bold());
        session = session.with_prompt("> ");
    }

    session
        .run(stdin.lock())
        .map_err(|e| anyhow::anyhow!("Shell I/O failed: {}", e))?;

    println!("Goodbye.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_select_requires_names() {
        let result = Cli::try_parse_from(["folder-view", "select"]);

        assert!(result.is_err(), "select without names should be rejected");
    }

    #[test]
    fn test_select_parses_names() {
        let cli = Cli::try_parse_from(["folder-view", "select", "b.txt", "a.txt"]).unwrap();

        match cli.command {
            Some(Commands::Select { names }) => assert_eq!(names, ["b.txt", "a.txt"]),
            _ => panic!("Expected select command"),
        }
    }

    #[test]
    fn test_browse_is_default() {
        let cli = Cli::try_parse_from(["folder-view", "--folder", "/tmp"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.folder, Some(PathBuf::from("/tmp")));
    }
}
