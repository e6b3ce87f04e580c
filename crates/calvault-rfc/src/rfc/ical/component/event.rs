//! `VEVENT` (RFC 5545 §3.6.1).

use std::io::{BufRead, Write};

use super::{
    Alarm, Component, ComponentFactory, ComponentKind, date_value, datetime_value, integer_value,
    non_empty, recurrence_value, text_list_value, text_value,
};
use crate::error::RfcResult;
use crate::rfc::ical::build::PropertyWriter;
use crate::rfc::ical::core::{
    DateOrDateTime, DateTime, ParameterizedValue, PropertyName, Recurrence,
};
use crate::rfc::ical::parse::PropertyReader;

/// A scheduled event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    pub uid: String,
    pub dtstamp: Option<DateTime>,
    pub start: Option<DateOrDateTime>,
    pub end: Option<DateOrDateTime>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    /// `STATUS`, e.g. `CONFIRMED`.
    pub status: Option<String>,
    /// `CLASS`, e.g. `PRIVATE`.
    pub class: Option<String>,
    pub priority: Option<i32>,
    pub sequence: Option<i32>,
    pub created: Option<DateTime>,
    pub last_modified: Option<DateTime>,
    pub url: Option<String>,
    pub organizer: Option<ParameterizedValue>,
    pub attendees: Vec<ParameterizedValue>,
    /// Flattened from every `CATEGORIES` line.
    pub categories: Vec<String>,
    pub recurrences: Vec<Recurrence>,
    pub alarms: Vec<Alarm>,
}

impl Event {
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }
}

impl Component for Event {
    fn deserialize<R: BufRead>(
        &mut self,
        reader: &mut PropertyReader<R>,
        factory: &dyn ComponentFactory,
    ) -> RfcResult<()> {
        while let Some(line) = reader.next_property()? {
            match PropertyName::parse(&line.name) {
                Some(PropertyName::End) => break,
                Some(PropertyName::Begin) => {
                    if ComponentKind::parse(&line.raw_value) == ComponentKind::Alarm {
                        let mut alarm = factory.new_alarm();
                        alarm.deserialize(reader, factory)?;
                        self.alarms.push(alarm);
                    } else {
                        reader.skip_block()?;
                    }
                }
                Some(PropertyName::Uid) => self.uid = text_value(&line),
                Some(PropertyName::DtStamp) => self.dtstamp = Some(datetime_value(&line)?),
                Some(PropertyName::DtStart) => self.start = Some(date_value(&line)?),
                Some(PropertyName::DtEnd) => self.end = Some(date_value(&line)?),
                Some(PropertyName::Summary) => self.summary = Some(text_value(&line)),
                Some(PropertyName::Description) => self.description = Some(text_value(&line)),
                Some(PropertyName::Location) => self.location = Some(text_value(&line)),
                Some(PropertyName::Status) => self.status = Some(line.raw_value),
                Some(PropertyName::Class) => self.class = Some(line.raw_value),
                Some(PropertyName::Priority) => self.priority = Some(integer_value(&line)?),
                Some(PropertyName::Sequence) => self.sequence = Some(integer_value(&line)?),
                Some(PropertyName::Created) => self.created = Some(datetime_value(&line)?),
                Some(PropertyName::LastModified) => {
                    self.last_modified = Some(datetime_value(&line)?);
                }
                Some(PropertyName::Url) => self.url = Some(line.raw_value),
                Some(PropertyName::Organizer) => {
                    self.organizer = Some(ParameterizedValue::from_content_line(&line));
                }
                Some(PropertyName::Attendee) => {
                    self.attendees.push(ParameterizedValue::from_content_line(&line));
                }
                Some(PropertyName::Categories) => self.categories.extend(text_list_value(&line)),
                Some(PropertyName::RRule) => {
                    self.recurrences.push(recurrence_value(&line, factory)?);
                }
                Some(_) | None => {}
            }
        }
        Ok(())
    }

    fn serialize<W: Write>(&self, writer: &mut PropertyWriter<W>) -> RfcResult<()> {
        writer.begin_block(ComponentKind::Event.as_str())?;
        writer.text_property(PropertyName::Uid, non_empty(&self.uid))?;
        writer.datetime_property(PropertyName::DtStamp, self.dtstamp.as_ref())?;
        writer.date_property(PropertyName::DtStart, self.start.as_ref())?;
        writer.date_property(PropertyName::DtEnd, self.end.as_ref())?;
        writer.text_property(PropertyName::Summary, self.summary.as_deref())?;
        writer.text_property(PropertyName::Description, self.description.as_deref())?;
        writer.text_property(PropertyName::Location, self.location.as_deref())?;
        writer.property(PropertyName::Status, self.status.as_ref())?;
        writer.property(PropertyName::Class, self.class.as_ref())?;
        writer.property(PropertyName::Priority, self.priority)?;
        writer.property(PropertyName::Sequence, self.sequence)?;
        writer.datetime_property(PropertyName::Created, self.created.as_ref())?;
        writer.datetime_property(PropertyName::LastModified, self.last_modified.as_ref())?;
        writer.property(PropertyName::Url, self.url.as_ref())?;
        writer.parameterized_property(PropertyName::Organizer, self.organizer.as_ref())?;
        for attendee in &self.attendees {
            writer.parameterized_property(PropertyName::Attendee, Some(attendee))?;
        }
        writer.text_list_property(PropertyName::Categories, &self.categories)?;
        for rule in &self.recurrences {
            writer.recurrence_property(rule)?;
        }
        for alarm in &self.alarms {
            alarm.serialize(writer)?;
        }
        writer.end_block(ComponentKind::Event.as_str())
    }
}
