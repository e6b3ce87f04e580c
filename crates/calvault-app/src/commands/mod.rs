//! Subcommand implementations.
//!
//! Commands write their report to `out` so they can be driven against an
//! in-memory buffer.

mod calendars;
mod objects;

use std::io::Write;

use anyhow::Result;
use calvault_store::CalendarRepository;

pub use calendars::{create, list_calendars};
pub use objects::{delete, import, list_objects, show};

use crate::cli::Command;

/// ## Summary
/// Runs one subcommand against `repo`.
///
/// ## Errors
/// Returns an error if the store operation fails or a named calendar or
/// object does not exist.
pub fn run(repo: &dyn CalendarRepository, command: Command, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Calendars => list_calendars(repo, out),
        Command::Create { id } => create(repo, &id, out),
        Command::Objects { calendar } => list_objects(repo, calendar.as_deref(), out),
        Command::Show { path } => show(repo, &path, out),
        Command::Import { calendar, file } => import(repo, &calendar, &file, out),
        Command::Delete { calendar, object } => delete(repo, &calendar, &object, out),
    }
}
