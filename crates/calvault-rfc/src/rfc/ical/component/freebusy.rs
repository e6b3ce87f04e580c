//! `VFREEBUSY` (RFC 5545 §3.6.4).

use std::io::{BufRead, Write};

use super::{
    Component, ComponentFactory, ComponentKind, date_value, datetime_value, non_empty, text_value,
};
use crate::error::RfcResult;
use crate::rfc::ical::build::PropertyWriter;
use crate::rfc::ical::core::{DateOrDateTime, DateTime, ParameterizedValue, PropertyName};
use crate::rfc::ical::parse::PropertyReader;

/// A block of free/busy time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreeBusy {
    pub uid: String,
    pub dtstamp: Option<DateTime>,
    pub start: Option<DateOrDateTime>,
    pub end: Option<DateOrDateTime>,
    pub organizer: Option<ParameterizedValue>,
    pub attendees: Vec<ParameterizedValue>,
    pub url: Option<String>,
    /// `FREEBUSY` lines: period lists kept verbatim with their `FBTYPE`.
    pub periods: Vec<ParameterizedValue>,
}

impl FreeBusy {
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }
}

impl Component for FreeBusy {
    fn deserialize<R: BufRead>(
        &mut self,
        reader: &mut PropertyReader<R>,
        _factory: &dyn ComponentFactory,
    ) -> RfcResult<()> {
        while let Some(line) = reader.next_property()? {
            match PropertyName::parse(&line.name) {
                Some(PropertyName::End) => break,
                Some(PropertyName::Begin) => reader.skip_block()?,
                Some(PropertyName::Uid) => self.uid = text_value(&line),
                Some(PropertyName::DtStamp) => self.dtstamp = Some(datetime_value(&line)?),
                Some(PropertyName::DtStart) => self.start = Some(date_value(&line)?),
                Some(PropertyName::DtEnd) => self.end = Some(date_value(&line)?),
                Some(PropertyName::Organizer) => {
                    self.organizer = Some(ParameterizedValue::from_content_line(&line));
                }
                Some(PropertyName::Attendee) => {
                    self.attendees.push(ParameterizedValue::from_content_line(&line));
                }
                Some(PropertyName::Url) => self.url = Some(line.raw_value),
                Some(PropertyName::FreeBusy) => {
                    self.periods.push(ParameterizedValue::from_content_line(&line));
                }
                Some(_) | None => {}
            }
        }
        Ok(())
    }

    fn serialize<W: Write>(&self, writer: &mut PropertyWriter<W>) -> RfcResult<()> {
        writer.begin_block(ComponentKind::FreeBusy.as_str())?;
        writer.text_property(PropertyName::Uid, non_empty(&self.uid))?;
        writer.datetime_property(PropertyName::DtStamp, self.dtstamp.as_ref())?;
        writer.date_property(PropertyName::DtStart, self.start.as_ref())?;
        writer.date_property(PropertyName::DtEnd, self.end.as_ref())?;
        writer.parameterized_property(PropertyName::Organizer, self.organizer.as_ref())?;
        for attendee in &self.attendees {
            writer.parameterized_property(PropertyName::Attendee, Some(attendee))?;
        }
        writer.property(PropertyName::Url, self.url.as_ref())?;
        for period in &self.periods {
            writer.parameterized_property(PropertyName::FreeBusy, Some(period))?;
        }
        writer.end_block(ComponentKind::FreeBusy.as_str())
    }
}
