//! `VJOURNAL` (RFC 5545 §3.6.3).

use std::io::{BufRead, Write};

use super::{
    Component, ComponentFactory, ComponentKind, date_value, datetime_value, integer_value,
    non_empty, recurrence_value, text_list_value, text_value,
};
use crate::error::RfcResult;
use crate::rfc::ical::build::PropertyWriter;
use crate::rfc::ical::core::{DateOrDateTime, DateTime, PropertyName, Recurrence};
use crate::rfc::ical::parse::PropertyReader;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalEntry {
    pub uid: String,
    pub dtstamp: Option<DateTime>,
    pub start: Option<DateOrDateTime>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub class: Option<String>,
    pub sequence: Option<i32>,
    pub created: Option<DateTime>,
    pub last_modified: Option<DateTime>,
    pub categories: Vec<String>,
    pub recurrences: Vec<Recurrence>,
}

impl JournalEntry {
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }
}

impl Component for JournalEntry {
    fn deserialize<R: BufRead>(
        &mut self,
        reader: &mut PropertyReader<R>,
        factory: &dyn ComponentFactory,
    ) -> RfcResult<()> {
        while let Some(line) = reader.next_property()? {
            match PropertyName::parse(&line.name) {
                Some(PropertyName::End) => break,
                Some(PropertyName::Begin) => reader.skip_block()?,
                Some(PropertyName::Uid) => self.uid = text_value(&line),
                Some(PropertyName::DtStamp) => self.dtstamp = Some(datetime_value(&line)?),
                Some(PropertyName::DtStart) => self.start = Some(date_value(&line)?),
                Some(PropertyName::Summary) => self.summary = Some(text_value(&line)),
                Some(PropertyName::Description) => self.description = Some(text_value(&line)),
                Some(PropertyName::Status) => self.status = Some(line.raw_value),
                Some(PropertyName::Class) => self.class = Some(line.raw_value),
                Some(PropertyName::Sequence) => self.sequence = Some(integer_value(&line)?),
                Some(PropertyName::Created) => self.created = Some(datetime_value(&line)?),
                Some(PropertyName::LastModified) => {
                    self.last_modified = Some(datetime_value(&line)?);
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
        writer.begin_block(ComponentKind::Journal.as_str())?;
        writer.text_property(PropertyName::Uid, non_empty(&self.uid))?;
        writer.datetime_property(PropertyName::DtStamp, self.dtstamp.as_ref())?;
        writer.date_property(PropertyName::DtStart, self.start.as_ref())?;
        writer.text_property(PropertyName::Summary, self.summary.as_deref())?;
        writer.text_property(PropertyName::Description, self.description.as_deref())?;
        writer.property(PropertyName::Status, self.status.as_ref())?;
        writer.property(PropertyName::Class, self.class.as_ref())?;
        writer.property(PropertyName::Sequence, self.sequence)?;
        writer.datetime_property(PropertyName::Created, self.created.as_ref())?;
        writer.datetime_property(PropertyName::LastModified, self.last_modified.as_ref())?;
        writer.text_list_property(PropertyName::Categories, &self.categories)?;
        for rule in &self.recurrences {
            writer.recurrence_property(rule)?;
        }
        writer.end_block(ComponentKind::Journal.as_str())
    }
}
