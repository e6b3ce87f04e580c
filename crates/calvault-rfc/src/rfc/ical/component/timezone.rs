//! `VTIMEZONE` and its `STANDARD` / `DAYLIGHT` observances (RFC 5545 §3.6.5).

use std::io::{BufRead, Write};

use super::{
    Component, ComponentFactory, ComponentKind, datetime_value, offset_value, recurrence_value,
    text_value,
};
use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::build::PropertyWriter;
use crate::rfc::ical::core::{DateTime, PropertyName, Recurrence, UtcOffset};
use crate::rfc::ical::parse::PropertyReader;

/// A timezone definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeZone {
    /// `TZID`
    pub id: Option<String>,
    /// `TZURL`
    pub url: Option<String>,
    pub last_modified: Option<DateTime>,
    /// Observances in the order they appeared.
    pub details: Vec<TimeZoneDetail>,
}

impl TimeZone {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

impl Component for TimeZone {
    fn deserialize<R: BufRead>(
        &mut self,
        reader: &mut PropertyReader<R>,
        factory: &dyn ComponentFactory,
    ) -> RfcResult<()> {
        while let Some(line) = reader.next_property()? {
            match PropertyName::parse(&line.name) {
                Some(PropertyName::End) => break,
                Some(PropertyName::Begin) => match ComponentKind::parse(&line.raw_value) {
                    ComponentKind::Standard | ComponentKind::Daylight => {
                        let mut detail = factory.new_time_zone_detail(&line.raw_value);
                        detail.deserialize(reader, factory)?;
                        self.details.push(detail);
                    }
                    _ => reader.skip_block()?,
                },
                Some(PropertyName::TzId) => self.id = Some(line.raw_value),
                Some(PropertyName::TzUrl) => self.url = Some(line.raw_value),
                Some(PropertyName::LastModified) => {
                    self.last_modified = Some(datetime_value(&line)?);
                }
                Some(_) | None => {}
            }
        }
        Ok(())
    }

    fn serialize<W: Write>(&self, writer: &mut PropertyWriter<W>) -> RfcResult<()> {
        writer.begin_block(ComponentKind::Timezone.as_str())?;
        writer.property(PropertyName::TzId, self.id.as_ref())?;
        writer.property(PropertyName::TzUrl, self.url.as_ref())?;
        writer.datetime_property(PropertyName::LastModified, self.last_modified.as_ref())?;
        for detail in &self.details {
            detail.serialize(writer)?;
        }
        writer.end_block(ComponentKind::Timezone.as_str())
    }
}

/// One `STANDARD` or `DAYLIGHT` observance of a timezone.
///
/// `kind` is the block tag that opened the observance and must be non-empty
/// to serialize. Each offset is written only when it is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeZoneDetail {
    /// Block tag, upper-cased.
    pub kind: String,
    /// `TZNAME`
    pub name: Option<String>,
    /// `TZID`
    pub id: Option<String>,
    /// `DTSTART`
    pub start: Option<DateTime>,
    /// `TZOFFSETFROM`
    pub offset_from: Option<UtcOffset>,
    /// `TZOFFSETTO`
    pub offset_to: Option<UtcOffset>,
    /// `RRULE` lines in encounter order.
    pub recurrences: Vec<Recurrence>,
}

impl TimeZoneDetail {
    #[must_use]
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.trim().to_ascii_uppercase(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn standard() -> Self {
        Self::new(ComponentKind::Standard.as_str())
    }

    #[must_use]
    pub fn daylight() -> Self {
        Self::new(ComponentKind::Daylight.as_str())
    }
}

impl Component for TimeZoneDetail {
    fn deserialize<R: BufRead>(
        &mut self,
        reader: &mut PropertyReader<R>,
        factory: &dyn ComponentFactory,
    ) -> RfcResult<()> {
        while let Some(line) = reader.next_property()? {
            match PropertyName::parse(&line.name) {
                Some(PropertyName::End) => break,
                Some(PropertyName::Begin) => reader.skip_block()?,
                Some(PropertyName::TzId) => self.id = Some(line.raw_value),
                Some(PropertyName::TzName) => self.name = Some(text_value(&line)),
                Some(PropertyName::DtStart) => self.start = Some(datetime_value(&line)?),
                Some(PropertyName::RRule) => {
                    self.recurrences.push(recurrence_value(&line, factory)?);
                }
                Some(PropertyName::TzOffsetFrom) => self.offset_from = Some(offset_value(&line)?),
                Some(PropertyName::TzOffsetTo) => self.offset_to = Some(offset_value(&line)?),
                Some(_) | None => {}
            }
        }
        Ok(())
    }

    fn serialize<W: Write>(&self, writer: &mut PropertyWriter<W>) -> RfcResult<()> {
        if self.kind.trim().is_empty() {
            return Err(RfcError::InvariantViolation(
                "timezone observance has no block kind",
            ));
        }

        writer.begin_block(&self.kind)?;
        writer.property(PropertyName::TzId, self.id.as_ref())?;
        writer.text_property(PropertyName::TzName, self.name.as_deref())?;
        writer.datetime_property(PropertyName::DtStart, self.start.as_ref())?;
        for rule in &self.recurrences {
            writer.recurrence_property(rule)?;
        }
        writer.property(PropertyName::TzOffsetFrom, self.offset_from)?;
        writer.property(PropertyName::TzOffsetTo, self.offset_to)?;
        writer.end_block(&self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::ical::component::DefaultFactory;

    fn read_detail(kind: &str, body: &str) -> RfcResult<TimeZoneDetail> {
        let mut reader = PropertyReader::new(body.as_bytes());
        let mut detail = TimeZoneDetail::new(kind);
        detail.deserialize(&mut reader, &DefaultFactory)?;
        Ok(detail)
    }

    fn write_detail(detail: &TimeZoneDetail) -> RfcResult<String> {
        let mut writer = PropertyWriter::new(Vec::new());
        detail.serialize(&mut writer)?;
        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }

    #[test]
    fn kind_is_normalized() {
        assert_eq!(TimeZoneDetail::new("daylight").kind, "DAYLIGHT");
    }

    #[test]
    fn reads_known_properties() {
        let detail = read_detail(
            "STANDARD",
            "dtstart:19701025T030000\r\n\
             TZOFFSETFROM:+0200\r\n\
             TzOffsetTo:+0100\r\n\
             TZNAME:CET\r\n\
             RRULE:FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU\r\n\
             END:STANDARD\r\n",
        )
        .unwrap();

        assert_eq!(detail.name.as_deref(), Some("CET"));
        assert_eq!(detail.offset_from.map(UtcOffset::as_seconds), Some(7200));
        assert_eq!(detail.offset_to.map(UtcOffset::as_seconds), Some(3600));
        assert_eq!(detail.recurrences.len(), 1);
        assert!(detail.start.as_ref().is_some_and(DateTime::is_floating));
    }

    #[test]
    fn writes_in_fixed_order() {
        let detail = read_detail(
            "daylight",
            "TZOFFSETTO:+0200\r\n\
             TZOFFSETFROM:+0100\r\n\
             RRULE:FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU\r\n\
             DTSTART:19700329T020000\r\n\
             TZNAME:CEST\r\n\
             TZID:Europe/Berlin\r\n\
             END:DAYLIGHT\r\n",
        )
        .unwrap();

        assert_eq!(
            write_detail(&detail).unwrap(),
            "BEGIN:DAYLIGHT\r\n\
             TZID:Europe/Berlin\r\n\
             TZNAME:CEST\r\n\
             DTSTART:19700329T020000\r\n\
             RRULE:FREQ=YEARLY;BYDAY=-1SU;BYMONTH=3\r\n\
             TZOFFSETFROM:+0100\r\n\
             TZOFFSETTO:+0200\r\n\
             END:DAYLIGHT\r\n"
        );
    }

    #[test]
    fn each_offset_is_gated_on_itself() {
        let mut detail = TimeZoneDetail::standard();
        detail.offset_to = UtcOffset::from_seconds(3600);

        let out = write_detail(&detail).unwrap();
        assert!(out.contains("TZOFFSETTO:+0100\r\n"));
        assert!(!out.contains("TZOFFSETFROM"));
    }

    #[test]
    fn empty_kind_fails_before_writing() {
        let mut writer = PropertyWriter::new(Vec::new());
        let err = TimeZoneDetail::default().serialize(&mut writer).unwrap_err();

        assert!(matches!(err, RfcError::InvariantViolation(_)));
        assert!(writer.into_inner().is_empty());
    }

    #[test]
    fn malformed_offset_aborts() {
        let err = read_detail("STANDARD", "TZOFFSETFROM:+25:00\r\nEND:STANDARD\r\n").unwrap_err();
        assert!(matches!(err, RfcError::ParseError(_)));
    }

    #[test]
    fn timezone_reads_observances_and_skips_unknown_blocks() {
        let body = "\
TZID:Europe/Berlin\r\n\
BEGIN:X-VENDOR\r\n\
TZNAME:ignored\r\n\
END:X-VENDOR\r\n\
BEGIN:STANDARD\r\n\
TZOFFSETFROM:+0200\r\n\
TZOFFSETTO:+0100\r\n\
END:STANDARD\r\n\
BEGIN:DAYLIGHT\r\n\
TZOFFSETFROM:+0100\r\n\
TZOFFSETTO:+0200\r\n\
END:DAYLIGHT\r\n\
END:VTIMEZONE\r\n";
        let mut reader = PropertyReader::new(body.as_bytes());
        let mut tz = TimeZone::default();
        tz.deserialize(&mut reader, &DefaultFactory).unwrap();

        assert_eq!(tz.id.as_deref(), Some("Europe/Berlin"));
        let kinds: Vec<&str> = tz.details.iter().map(|d| d.kind.as_str()).collect();
        assert_eq!(kinds, vec!["STANDARD", "DAYLIGHT"]);
    }
}
