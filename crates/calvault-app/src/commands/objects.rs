use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use calvault_rfc::rfc::ical::component::{
    Calendar, CalendarObject, parse_calendars, write_calendar,
};
use calvault_store::{CalendarInfo, CalendarRepository};

fn require_calendar(repo: &dyn CalendarRepository, id: Option<&str>) -> Result<CalendarInfo> {
    match repo.calendar_by_id(id)? {
        Some(calendar) => Ok(calendar),
        None => bail!("calendar {:?} does not exist", id.unwrap_or_default()),
    }
}

fn summary(object: &CalendarObject) -> Option<&str> {
    match object {
        CalendarObject::Event(event) => event.summary.as_deref(),
        CalendarObject::ToDo(todo) => todo.summary.as_deref(),
        CalendarObject::Journal(entry) => entry.summary.as_deref(),
        CalendarObject::FreeBusy(_) => None,
    }
}

/// ## Summary
/// Prints one `KIND<TAB>UID<TAB>SUMMARY` line per object.
///
/// ## Errors
/// Returns an error if the calendar does not exist or an object file is
/// malformed.
pub fn list_objects(
    repo: &dyn CalendarRepository,
    calendar: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    let calendar = require_calendar(repo, calendar)?;
    for object in repo.objects(&calendar)? {
        writeln!(
            out,
            "{}\t{}\t{}",
            object.kind(),
            object.uid(),
            summary(&object).unwrap_or_default()
        )?;
    }
    Ok(())
}

/// ## Summary
/// Prints the object at `path` wrapped in a fresh calendar.
///
/// ## Errors
/// Returns an error if the object does not exist or cannot be read.
pub fn show(repo: &dyn CalendarRepository, path: &str, out: &mut dyn Write) -> Result<()> {
    let Some(object) = repo.object_by_path(path)? else {
        bail!("no object at {path:?}");
    };
    write_calendar(out, &Calendar::with_object(object))?;
    Ok(())
}

/// ## Summary
/// Saves every event, to-do, free-busy block and journal entry in `file`
/// to `calendar`, replacing objects with the same UID.
///
/// ## Errors
/// Returns an error if the file cannot be parsed, the calendar does not
/// exist, or an object cannot be saved.
pub fn import(
    repo: &dyn CalendarRepository,
    calendar: &str,
    file: &Path,
    out: &mut dyn Write,
) -> Result<()> {
    let calendar = require_calendar(repo, Some(calendar))?;
    let reader = BufReader::new(
        File::open(file).with_context(|| format!("failed to open {}", file.display()))?,
    );
    let parsed =
        parse_calendars(reader).with_context(|| format!("failed to parse {}", file.display()))?;

    let mut imported = 0usize;
    for object in parsed.into_iter().flat_map(Calendar::into_objects) {
        repo.save_object(&calendar, &object)
            .with_context(|| format!("failed to save object {:?}", object.uid()))?;
        imported += 1;
    }

    tracing::info!(calendar_id = %calendar.id, imported, "Import finished");
    writeln!(out, "imported {imported} object(s) into {}", calendar.id)?;
    Ok(())
}

/// ## Summary
/// Deletes an object. Deleting a missing object succeeds silently.
///
/// ## Errors
/// Returns an error if the calendar does not exist or the store fails.
pub fn delete(
    repo: &dyn CalendarRepository,
    calendar: &str,
    object: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let calendar = require_calendar(repo, Some(calendar))?;
    repo.delete_object(&calendar, object)?;
    writeln!(out, "deleted {object}")?;
    Ok(())
}
