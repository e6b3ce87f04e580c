use std::io::Write;

use anyhow::{Result, bail};
use calvault_store::CalendarRepository;

/// ## Summary
/// Prints one line per calendar: its id and, when set, its display name.
///
/// ## Errors
/// Returns an error if the store cannot be listed or the output written.
pub fn list_calendars(repo: &dyn CalendarRepository, out: &mut dyn Write) -> Result<()> {
    for calendar in repo.calendars()? {
        match calendar.header.name.as_deref() {
            Some(name) => writeln!(out, "{}\t{name}", calendar.id)?,
            None => writeln!(out, "{}", calendar.id)?,
        }
    }
    Ok(())
}

/// ## Summary
/// Creates a calendar and prints the id it was stored under.
///
/// ## Errors
/// Returns an error if `id` has no usable characters or the store fails.
pub fn create(repo: &dyn CalendarRepository, id: &str, out: &mut dyn Write) -> Result<()> {
    let Some(calendar) = repo.create_calendar(Some(id))? else {
        bail!("calendar id {id:?} is empty after removing unsafe characters");
    };
    tracing::debug!(calendar_id = %calendar.id, "Created calendar from CLI");
    writeln!(out, "{}", calendar.id)?;
    Ok(())
}
