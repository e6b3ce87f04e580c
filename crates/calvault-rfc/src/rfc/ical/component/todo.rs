//! `VTODO` (RFC 5545 §3.6.2).

use std::io::{BufRead, Write};

use super::{
    Alarm, Component, ComponentFactory, ComponentKind, date_value, datetime_value, integer_value,
    non_empty, recurrence_value, text_list_value, text_value,
};
use crate::error::RfcResult;
use crate::rfc::ical::build::PropertyWriter;
use crate::rfc::ical::core::{DateOrDateTime, DateTime, PropertyName, Recurrence};
use crate::rfc::ical::parse::PropertyReader;

/// An action item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToDo {
    pub uid: String,
    pub dtstamp: Option<DateTime>,
    pub start: Option<DateOrDateTime>,
    pub due: Option<DateOrDateTime>,
    pub completed: Option<DateTime>,
    pub summary: Option<String>,
    pub description: Option<String>,
    /// `STATUS`, e.g. `NEEDS-ACTION` or `COMPLETED`.
    pub status: Option<String>,
    pub priority: Option<i32>,
    pub percent_complete: Option<i32>,
    pub sequence: Option<i32>,
    pub created: Option<DateTime>,
    pub last_modified: Option<DateTime>,
    pub categories: Vec<String>,
    pub recurrences: Vec<Recurrence>,
    pub alarms: Vec<Alarm>,
}

impl ToDo {
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }
}

impl Component for ToDo {
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
                Some(PropertyName::Due) => self.due = Some(date_value(&line)?),
                Some(PropertyName::Completed) => self.completed = Some(datetime_value(&line)?),
                Some(PropertyName::Summary) => self.summary = Some(text_value(&line)),
                Some(PropertyName::Description) => self.description = Some(text_value(&line)),
                Some(PropertyName::Status) => self.status = Some(line.raw_value),
                Some(PropertyName::Priority) => self.priority = Some(integer_value(&line)?),
                Some(PropertyName::PercentComplete) => {
                    self.percent_complete = Some(integer_value(&line)?);
                }
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
        writer.begin_block(ComponentKind::Todo.as_str())?;
        writer.text_property(PropertyName::Uid, non_empty(&self.uid))?;
        writer.datetime_property(PropertyName::DtStamp, self.dtstamp.as_ref())?;
        writer.date_property(PropertyName::DtStart, self.start.as_ref())?;
        writer.date_property(PropertyName::Due, self.due.as_ref())?;
        writer.datetime_property(PropertyName::Completed, self.completed.as_ref())?;
        writer.text_property(PropertyName::Summary, self.summary.as_deref())?;
        writer.text_property(PropertyName::Description, self.description.as_deref())?;
        writer.property(PropertyName::Status, self.status.as_ref())?;
        writer.property(PropertyName::Priority, self.priority)?;
        writer.property(PropertyName::PercentComplete, self.percent_complete)?;
        writer.property(PropertyName::Sequence, self.sequence)?;
        writer.datetime_property(PropertyName::Created, self.created.as_ref())?;
        writer.datetime_property(PropertyName::LastModified, self.last_modified.as_ref())?;
        writer.text_list_property(PropertyName::Categories, &self.categories)?;
        for rule in &self.recurrences {
            writer.recurrence_property(rule)?;
        }
        for alarm in &self.alarms {
            alarm.serialize(writer)?;
        }
        writer.end_block(ComponentKind::Todo.as_str())
    }
}
