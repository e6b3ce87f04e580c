//! Streaming property writer.

use std::fmt::Display;
use std::io::Write;

use super::escape::{escape_text, escape_text_list};
use super::fold::fold_line;
use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::core::{
    DateOrDateTime, DateTime, Parameter, ParameterizedValue, Parameters, PropertyName, Recurrence,
};

/// Emits block markers and property lines to a byte sink.
///
/// Every line is folded at 75 octets and terminated with CRLF. A line whose
/// unescaped value carries CR or LF is refused before anything of it is
/// written. Property
/// methods take an `Option` and write nothing for `None`, so a reader that
/// leaves absent properties at their default sees the same record again.
#[derive(Debug)]
pub struct PropertyWriter<W> {
    inner: W,
}

impl<W: Write> PropertyWriter<W> {
    #[must_use]
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// ## Errors
    /// Returns an error if the sink cannot be flushed.
    pub fn flush(&mut self) -> RfcResult<()> {
        self.inner.flush()?;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> RfcResult<()> {
        if line.contains(['\r', '\n']) {
            return Err(RfcError::InvariantViolation(
                "content line contains a line break",
            ));
        }
        self.inner.write_all(fold_line(line).as_bytes())?;
        Ok(())
    }

    /// Writes `BEGIN:<KIND>` with the kind upper-cased.
    ///
    /// ## Errors
    /// Returns an error if writing fails.
    pub fn begin_block(&mut self, kind: &str) -> RfcResult<()> {
        self.write_line(&format!("BEGIN:{}", kind.to_ascii_uppercase()))
    }

    /// Writes `END:<KIND>` with the kind upper-cased.
    ///
    /// ## Errors
    /// Returns an error if writing fails.
    pub fn end_block(&mut self, kind: &str) -> RfcResult<()> {
        self.write_line(&format!("END:{}", kind.to_ascii_uppercase()))
    }

    /// Writes `NAME:VALUE`, or nothing when `value` is `None`.
    ///
    /// The value is written through its `Display` implementation without
    /// escaping.
    ///
    /// ## Errors
    /// Returns an error if the value contains a line break or writing fails.
    pub fn property<V: Display>(&mut self, name: PropertyName, value: Option<V>) -> RfcResult<()> {
        self.property_with_params(name, &Parameters::new(), value)
    }

    /// Writes `NAME;PARAM=...:VALUE`, or nothing when `value` is `None`.
    ///
    /// ## Errors
    /// Returns an error if writing fails.
    pub fn property_with_params<V: Display>(
        &mut self,
        name: PropertyName,
        params: &Parameters,
        value: Option<V>,
    ) -> RfcResult<()> {
        let Some(value) = value else {
            return Ok(());
        };

        let mut line = String::from(name.as_str());
        for param in params.iter() {
            line.push(';');
            line.push_str(&param.to_string());
        }
        line.push(':');
        line.push_str(&value.to_string());

        self.write_line(&line)
    }

    /// Writes a TEXT property, escaping the value.
    ///
    /// ## Errors
    /// Returns an error if writing fails.
    pub fn text_property(&mut self, name: PropertyName, value: Option<&str>) -> RfcResult<()> {
        self.property(name, value.map(escape_text))
    }

    /// Writes a TEXT list property (e.g. `CATEGORIES`); an empty list writes
    /// nothing.
    ///
    /// ## Errors
    /// Returns an error if writing fails.
    pub fn text_list_property(&mut self, name: PropertyName, items: &[String]) -> RfcResult<()> {
        if items.is_empty() {
            return Ok(());
        }
        self.property(name, Some(escape_text_list(items)))
    }

    /// Writes a DATE-TIME property, adding `TZID` for zoned values.
    ///
    /// ## Errors
    /// Returns an error if writing fails.
    pub fn datetime_property(
        &mut self,
        name: PropertyName,
        value: Option<&DateTime>,
    ) -> RfcResult<()> {
        let Some(dt) = value else {
            return Ok(());
        };
        self.property_with_params(name, &datetime_params(dt), Some(dt))
    }

    /// Writes a DATE or DATE-TIME property. DATE values carry `VALUE=DATE`;
    /// zoned date-times carry `TZID`.
    ///
    /// ## Errors
    /// Returns an error if writing fails.
    pub fn date_property(
        &mut self,
        name: PropertyName,
        value: Option<&DateOrDateTime>,
    ) -> RfcResult<()> {
        match value {
            None => Ok(()),
            Some(DateOrDateTime::Date(_)) => {
                let params: Parameters = vec![Parameter::new("VALUE", "DATE")].into();
                self.property_with_params(name, &params, value)
            }
            Some(DateOrDateTime::DateTime(dt)) => self.datetime_property(name, Some(dt)),
        }
    }

    /// Writes a value that was carried through verbatim with its parameters.
    ///
    /// ## Errors
    /// Returns an error if writing fails.
    pub fn parameterized_property(
        &mut self,
        name: PropertyName,
        value: Option<&ParameterizedValue>,
    ) -> RfcResult<()> {
        let Some(value) = value else {
            return Ok(());
        };
        self.property_with_params(name, &value.params, Some(&value.value))
    }

    /// Writes one `RRULE` line, formatted by the rule itself.
    ///
    /// ## Errors
    /// Returns an error if writing fails.
    pub fn recurrence_property(&mut self, rule: &Recurrence) -> RfcResult<()> {
        self.property_with_params(PropertyName::RRule, &rule.params, Some(rule))
    }
}

fn datetime_params(dt: &DateTime) -> Parameters {
    dt.tzid()
        .map(|tzid| Parameter::new("TZID", tzid))
        .into_iter()
        .collect()
}
