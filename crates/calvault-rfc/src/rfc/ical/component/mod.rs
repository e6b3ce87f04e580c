//! Typed calendar components and their codecs.
//!
//! Every codec follows the same pattern: read properties until `END` (or the
//! end of the stream), match each name against the closed `PropertyName`
//! set, convert and assign recognized ones, and ignore the rest. Nested
//! blocks go to the child codec when the component owns such children and
//! are skipped otherwise. Conversion errors are not caught and abort the
//! component.

mod alarm;
mod calendar;
mod event;
mod freebusy;
mod journal;
mod kind;
mod timezone;
mod todo;

use std::io::{BufRead, Write};

pub use alarm::Alarm;
pub use calendar::{
    Calendar, CalendarObject, parse_calendars, parse_calendars_with, to_ics_string, write_calendar,
};
pub use event::Event;
pub use freebusy::FreeBusy;
pub use journal::JournalEntry;
pub use kind::ComponentKind;
pub use timezone::{TimeZone, TimeZoneDetail};
pub use todo::ToDo;

use crate::error::RfcResult;
use crate::rfc::ical::build::PropertyWriter;
use crate::rfc::ical::core::{ContentLine, DateOrDateTime, DateTime, Recurrence, UtcOffset};
use crate::rfc::ical::parse::{
    ParseResult, PropertyReader, parse_date_or_datetime, parse_datetime, parse_integer,
    parse_utc_offset, split_text_list, unescape_text,
};

/// A component that reads itself from a property stream and writes itself
/// back.
pub trait Component {
    /// ## Summary
    /// Populates `self` from a reader positioned just after the component's
    /// `BEGIN` line, consuming through its `END` line.
    ///
    /// ## Errors
    /// Returns an error if reading fails or a recognized property has a
    /// malformed value.
    fn deserialize<R: BufRead>(
        &mut self,
        reader: &mut PropertyReader<R>,
        factory: &dyn ComponentFactory,
    ) -> RfcResult<()>;

    /// ## Summary
    /// Writes the component, including its `BEGIN` and `END` lines.
    ///
    /// ## Errors
    /// Returns an error if writing fails or the component violates a
    /// serialization precondition.
    fn serialize<W: Write>(&self, writer: &mut PropertyWriter<W>) -> RfcResult<()>;
}

/// Supplies fresh sub-entities to the codecs while they deserialize.
///
/// Every method has a default; implement only the ones to override.
pub trait ComponentFactory {
    fn new_recurrence(&self) -> Recurrence {
        Recurrence::new()
    }

    fn new_time_zone(&self) -> TimeZone {
        TimeZone::default()
    }

    /// Creates an observance for the block tag that opened it.
    fn new_time_zone_detail(&self, kind: &str) -> TimeZoneDetail {
        TimeZoneDetail::new(kind)
    }

    fn new_event(&self) -> Event {
        Event::default()
    }

    fn new_todo(&self) -> ToDo {
        ToDo::default()
    }

    fn new_free_busy(&self) -> FreeBusy {
        FreeBusy::default()
    }

    fn new_journal_entry(&self) -> JournalEntry {
        JournalEntry::default()
    }

    fn new_alarm(&self) -> Alarm {
        Alarm::default()
    }
}

/// Factory that builds every sub-entity with its `Default`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFactory;

impl ComponentFactory for DefaultFactory {}

fn text_value(line: &ContentLine) -> String {
    unescape_text(&line.raw_value)
}

fn text_list_value(line: &ContentLine) -> Vec<String> {
    split_text_list(&line.raw_value)
}

fn datetime_value(line: &ContentLine) -> ParseResult<DateTime> {
    parse_datetime(&line.raw_value, line.tzid(), line.line, line.value_column)
}

fn date_value(line: &ContentLine) -> ParseResult<DateOrDateTime> {
    parse_date_or_datetime(
        &line.raw_value,
        line.value_type(),
        line.tzid(),
        line.line,
        line.value_column,
    )
}

fn offset_value(line: &ContentLine) -> ParseResult<UtcOffset> {
    parse_utc_offset(line.raw_value.trim(), line.line, line.value_column)
}

fn integer_value(line: &ContentLine) -> ParseResult<i32> {
    parse_integer(&line.raw_value, line.line, line.value_column)
}

fn recurrence_value(line: &ContentLine, factory: &dyn ComponentFactory) -> ParseResult<Recurrence> {
    let mut rule = factory.new_recurrence();
    rule.deserialize(line)?;
    Ok(rule)
}

/// Treats an empty string as absent.
fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}
