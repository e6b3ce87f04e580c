use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "calvault")]
#[command(about = "Inspect and maintain a directory-backed calendar store")]
pub struct Cli {
    /// Store root directory (overrides `storage.root` from the configuration)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List calendars, creating the default calendar if there are none
    Calendars,
    /// Create a calendar (or rewrite its manifest if it exists)
    Create {
        /// Calendar id; unsafe file name characters are replaced
        id: String,
    },
    /// List the objects in a calendar, sorted by UID
    Objects {
        /// Calendar id (defaults to the configured default calendar)
        calendar: Option<String>,
    },
    /// Print one object as iCalendar text
    Show {
        /// Object path, e.g. "me/abc123.ics"
        path: String,
    },
    /// Store every object found in an iCalendar file
    Import {
        /// Target calendar id
        calendar: String,
        /// File holding one or more VCALENDAR blocks
        file: PathBuf,
    },
    /// Delete an object by UID or path
    Delete {
        /// Calendar id
        calendar: String,
        /// Object UID or path, e.g. "abc123" or "me/abc123.ics"
        object: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_root_after_subcommand() {
        let cli = Cli::try_parse_from(["calvault", "objects", "work", "--root", "/tmp/cal"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/cal")));
        assert!(matches!(cli.command, Command::Objects { calendar: Some(ref c) } if c == "work"));
    }
}
