//! `VALARM` (RFC 5545 §3.6.6).

use std::io::{BufRead, Write};

use super::{Component, ComponentFactory, ComponentKind, text_value};
use crate::error::RfcResult;
use crate::rfc::ical::build::PropertyWriter;
use crate::rfc::ical::core::{ParameterizedValue, PropertyName};
use crate::rfc::ical::parse::PropertyReader;

/// A reminder nested in an event or to-do.
///
/// `TRIGGER` is kept verbatim with its parameters, since it may be a
/// duration relative to the start or end, or an absolute date-time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alarm {
    /// `ACTION`, e.g. `DISPLAY` or `AUDIO`.
    pub action: Option<String>,
    pub trigger: Option<ParameterizedValue>,
    pub description: Option<String>,
    pub summary: Option<String>,
}

impl Component for Alarm {
    fn deserialize<R: BufRead>(
        &mut self,
        reader: &mut PropertyReader<R>,
        _factory: &dyn ComponentFactory,
    ) -> RfcResult<()> {
        while let Some(line) = reader.next_property()? {
            match PropertyName::parse(&line.name) {
                Some(PropertyName::End) => break,
                Some(PropertyName::Begin) => reader.skip_block()?,
                Some(PropertyName::Action) => self.action = Some(line.raw_value),
                Some(PropertyName::Trigger) => {
                    self.trigger = Some(ParameterizedValue::from_content_line(&line));
                }
                Some(PropertyName::Description) => self.description = Some(text_value(&line)),
                Some(PropertyName::Summary) => self.summary = Some(text_value(&line)),
                Some(_) | None => {}
            }
        }
        Ok(())
    }

    fn serialize<W: Write>(&self, writer: &mut PropertyWriter<W>) -> RfcResult<()> {
        writer.begin_block(ComponentKind::Alarm.as_str())?;
        writer.property(PropertyName::Action, self.action.as_ref())?;
        writer.parameterized_property(PropertyName::Trigger, self.trigger.as_ref())?;
        writer.text_property(PropertyName::Description, self.description.as_deref())?;
        writer.text_property(PropertyName::Summary, self.summary.as_deref())?;
        writer.end_block(ComponentKind::Alarm.as_str())
    }
}
