//! `VCALENDAR` and the whole-file entry points.

use std::io::{BufRead, Write};

use calvault_core::constants::{ICALENDAR_VERSION, PRODUCT_ID};

use super::{
    Component, ComponentFactory, ComponentKind, DefaultFactory, Event, FreeBusy, JournalEntry,
    TimeZone, ToDo, text_value,
};
use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::build::PropertyWriter;
use crate::rfc::ical::core::PropertyName;
use crate::rfc::ical::parse::PropertyReader;

/// A `VCALENDAR` block.
///
/// `Default` leaves every header empty, which is what reading starts from.
/// Use [`Calendar::new`] for a calendar that is about to be written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    pub version: Option<String>,
    pub prod_id: Option<String>,
    /// `CALSCALE`
    pub scale: Option<String>,
    pub method: Option<String>,
    /// `X-WR-CALNAME`
    pub name: Option<String>,
    pub time_zones: Vec<TimeZone>,
    pub events: Vec<Event>,
    pub todos: Vec<ToDo>,
    pub free_busy: Vec<FreeBusy>,
    pub journal_entries: Vec<JournalEntry>,
}

impl Calendar {
    /// Creates an empty calendar carrying the default `VERSION` and `PRODID`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: Some(ICALENDAR_VERSION.to_string()),
            prod_id: Some(PRODUCT_ID.to_string()),
            ..Self::default()
        }
    }

    /// Creates a fresh calendar holding a single object.
    #[must_use]
    pub fn with_object(object: CalendarObject) -> Self {
        let mut calendar = Self::new();
        calendar.add_object(object);
        calendar
    }

    pub fn add_object(&mut self, object: CalendarObject) {
        match object {
            CalendarObject::Event(event) => self.events.push(event),
            CalendarObject::ToDo(todo) => self.todos.push(todo),
            CalendarObject::FreeBusy(free_busy) => self.free_busy.push(free_busy),
            CalendarObject::Journal(entry) => self.journal_entries.push(entry),
        }
    }

    /// Whether the calendar holds no objects. Timezones are not counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
            && self.todos.is_empty()
            && self.free_busy.is_empty()
            && self.journal_entries.is_empty()
    }

    /// Consumes the calendar, yielding events, then to-dos, then free-busy
    /// blocks, then journal entries.
    #[must_use]
    pub fn into_objects(self) -> Vec<CalendarObject> {
        self.events
            .into_iter()
            .map(CalendarObject::Event)
            .chain(self.todos.into_iter().map(CalendarObject::ToDo))
            .chain(self.free_busy.into_iter().map(CalendarObject::FreeBusy))
            .chain(self.journal_entries.into_iter().map(CalendarObject::Journal))
            .collect()
    }
}

impl Component for Calendar {
    fn deserialize<R: BufRead>(
        &mut self,
        reader: &mut PropertyReader<R>,
        factory: &dyn ComponentFactory,
    ) -> RfcResult<()> {
        while let Some(line) = reader.next_property()? {
            match PropertyName::parse(&line.name) {
                Some(PropertyName::End) => break,
                Some(PropertyName::Begin) => match ComponentKind::parse(&line.raw_value) {
                    ComponentKind::Timezone => {
                        let mut tz = factory.new_time_zone();
                        tz.deserialize(reader, factory)?;
                        self.time_zones.push(tz);
                    }
                    ComponentKind::Event => {
                        let mut event = factory.new_event();
                        event.deserialize(reader, factory)?;
                        self.events.push(event);
                    }
                    ComponentKind::Todo => {
                        let mut todo = factory.new_todo();
                        todo.deserialize(reader, factory)?;
                        self.todos.push(todo);
                    }
                    ComponentKind::FreeBusy => {
                        let mut free_busy = factory.new_free_busy();
                        free_busy.deserialize(reader, factory)?;
                        self.free_busy.push(free_busy);
                    }
                    ComponentKind::Journal => {
                        let mut entry = factory.new_journal_entry();
                        entry.deserialize(reader, factory)?;
                        self.journal_entries.push(entry);
                    }
                    _ => reader.skip_block()?,
                },
                Some(PropertyName::Version) => self.version = Some(line.raw_value),
                Some(PropertyName::ProdId) => self.prod_id = Some(line.raw_value),
                Some(PropertyName::CalScale) => self.scale = Some(line.raw_value),
                Some(PropertyName::Method) => self.method = Some(line.raw_value),
                Some(PropertyName::CalendarName) => self.name = Some(text_value(&line)),
                Some(_) | None => {}
            }
        }
        Ok(())
    }

    fn serialize<W: Write>(&self, writer: &mut PropertyWriter<W>) -> RfcResult<()> {
        writer.begin_block(ComponentKind::Calendar.as_str())?;
        writer.property(PropertyName::Version, self.version.as_ref())?;
        writer.property(PropertyName::ProdId, self.prod_id.as_ref())?;
        writer.property(PropertyName::CalScale, self.scale.as_ref())?;
        writer.property(PropertyName::Method, self.method.as_ref())?;
        writer.text_property(PropertyName::CalendarName, self.name.as_deref())?;
        for tz in &self.time_zones {
            tz.serialize(writer)?;
        }
        for event in &self.events {
            event.serialize(writer)?;
        }
        for todo in &self.todos {
            todo.serialize(writer)?;
        }
        for free_busy in &self.free_busy {
            free_busy.serialize(writer)?;
        }
        for entry in &self.journal_entries {
            entry.serialize(writer)?;
        }
        writer.end_block(ComponentKind::Calendar.as_str())
    }
}

/// A storable calendar object: the unit saved to one `<uid>.ics` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarObject {
    Event(Event),
    ToDo(ToDo),
    FreeBusy(FreeBusy),
    Journal(JournalEntry),
}

impl CalendarObject {
    #[must_use]
    pub fn uid(&self) -> &str {
        match self {
            Self::Event(event) => &event.uid,
            Self::ToDo(todo) => &todo.uid,
            Self::FreeBusy(free_busy) => &free_busy.uid,
            Self::Journal(entry) => &entry.uid,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Event(_) => ComponentKind::Event,
            Self::ToDo(_) => ComponentKind::Todo,
            Self::FreeBusy(_) => ComponentKind::FreeBusy,
            Self::Journal(_) => ComponentKind::Journal,
        }
    }

    /// ## Summary
    /// Writes the wrapped component.
    ///
    /// ## Errors
    /// Returns an error if writing fails.
    pub fn serialize<W: Write>(&self, writer: &mut PropertyWriter<W>) -> RfcResult<()> {
        match self {
            Self::Event(event) => event.serialize(writer),
            Self::ToDo(todo) => todo.serialize(writer),
            Self::FreeBusy(free_busy) => free_busy.serialize(writer),
            Self::Journal(entry) => entry.serialize(writer),
        }
    }
}

/// ## Summary
/// Reads every `VCALENDAR` block from a stream, building sub-entities with
/// [`DefaultFactory`].
///
/// ## Errors
/// Returns an error if reading fails or any recognized property is malformed.
pub fn parse_calendars<R: BufRead>(reader: R) -> RfcResult<Vec<Calendar>> {
    parse_calendars_with(reader, &DefaultFactory)
}

/// ## Summary
/// Reads every `VCALENDAR` block from a stream.
///
/// Other top-level blocks are skipped and stray top-level properties are
/// ignored. An empty stream yields an empty collection.
///
/// ## Errors
/// Returns an error if reading fails or any recognized property is malformed.
#[tracing::instrument(skip_all)]
pub fn parse_calendars_with<R: BufRead>(
    reader: R,
    factory: &dyn ComponentFactory,
) -> RfcResult<Vec<Calendar>> {
    let mut reader = PropertyReader::new(reader);
    let mut calendars = Vec::new();

    while let Some(line) = reader.next_property()? {
        if PropertyName::parse(&line.name) != Some(PropertyName::Begin) {
            continue;
        }
        if ComponentKind::parse(&line.raw_value) == ComponentKind::Calendar {
            let mut calendar = Calendar::default();
            calendar.deserialize(&mut reader, factory)?;
            calendars.push(calendar);
        } else {
            tracing::trace!(kind = %line.raw_value, "Skipping top-level block");
            reader.skip_block()?;
        }
    }

    tracing::debug!(count = calendars.len(), "Parsed calendars");
    Ok(calendars)
}

/// ## Summary
/// Writes a calendar to a byte sink and flushes it.
///
/// ## Errors
/// Returns an error if writing fails or a component violates a serialization
/// precondition.
pub fn write_calendar<W: Write + ?Sized>(sink: &mut W, calendar: &Calendar) -> RfcResult<()> {
    let mut writer = PropertyWriter::new(sink);
    calendar.serialize(&mut writer)?;
    writer.flush()
}

/// ## Summary
/// Serializes a calendar to a string.
///
/// ## Errors
/// Returns an error if a component violates a serialization precondition.
pub fn to_ics_string(calendar: &Calendar) -> RfcResult<String> {
    let mut buf = Vec::new();
    write_calendar(&mut buf, calendar)?;
    String::from_utf8(buf)
        .map_err(|_| RfcError::InvariantViolation("serialized calendar is not UTF-8"))
}
