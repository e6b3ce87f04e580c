//! Recurrence rule value type (RFC 5545 §3.3.10, §3.8.5.3).

use std::fmt;

use chrono::NaiveDate;

use super::{ContentLine, DateTime, Parameters};
use crate::rfc::ical::parse::{ParseResult, parse_rrule_into};

/// Recurrence frequency (RFC 5545 §3.3.10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Secondly => "SECONDLY",
            Self::Minutely => "MINUTELY",
            Self::Hourly => "HOURLY",
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    /// Parses a frequency from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "SECONDLY" => Self::Secondly,
            "MINUTELY" => Self::Minutely,
            "HOURLY" => Self::Hourly,
            "DAILY" => Self::Daily,
            "WEEKLY" => Self::Weekly,
            "MONTHLY" => Self::Monthly,
            "YEARLY" => Self::Yearly,
            _ => return None,
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Returns the two-letter abbreviation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "SU",
            Self::Monday => "MO",
            Self::Tuesday => "TU",
            Self::Wednesday => "WE",
            Self::Thursday => "TH",
            Self::Friday => "FR",
            Self::Saturday => "SA",
        }
    }

    /// Parses a weekday from a two-letter abbreviation (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "SU" => Self::Sunday,
            "MO" => Self::Monday,
            "TU" => Self::Tuesday,
            "WE" => Self::Wednesday,
            "TH" => Self::Thursday,
            "FR" => Self::Friday,
            "SA" => Self::Saturday,
            _ => return None,
        })
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weekday with optional occurrence number, as used in `BYDAY`.
///
/// - `MO`: every Monday
/// - `1MO`: first Monday of the period
/// - `-1FR`: last Friday of the period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayNum {
    /// Optional occurrence number (-53 to 53, excluding 0).
    pub ordinal: Option<i8>,
    pub weekday: Weekday,
}

impl WeekdayNum {
    #[must_use]
    pub const fn every(weekday: Weekday) -> Self {
        Self {
            ordinal: None,
            weekday,
        }
    }

    /// Creates a weekday occurrence with an ordinal, or `None` if the ordinal
    /// is 0 or outside -53..=53.
    #[must_use]
    pub fn nth(ordinal: i8, weekday: Weekday) -> Option<Self> {
        (ordinal != 0 && (-53..=53).contains(&ordinal)).then_some(Self {
            ordinal: Some(ordinal),
            weekday,
        })
    }
}

impl fmt::Display for WeekdayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.ordinal {
            write!(f, "{n}")?;
        }
        write!(f, "{}", self.weekday)
    }
}

/// UNTIL bound of a recurrence: a DATE or a DATE-TIME.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceUntil {
    Date(NaiveDate),
    DateTime(DateTime),
}

impl fmt::Display for RecurrenceUntil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.format("%Y%m%d")),
            Self::DateTime(dt) => write!(f, "{dt}"),
        }
    }
}

/// A recurrence rule attached through an `RRULE` property.
///
/// Rule parts this type does not model are kept in `extensions`, in the order
/// they were read, and written back after the known parts. The property's own
/// parameters travel in `params`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Recurrence {
    pub freq: Option<Frequency>,
    /// Interval between occurrences (default 1, omitted on write when 1).
    pub interval: Option<u32>,
    /// Mutually exclusive with `count`.
    pub until: Option<RecurrenceUntil>,
    /// Mutually exclusive with `until`.
    pub count: Option<u32>,
    pub wkst: Option<Weekday>,
    pub by_second: Vec<u8>,
    pub by_minute: Vec<u8>,
    pub by_hour: Vec<u8>,
    pub by_day: Vec<WeekdayNum>,
    pub by_monthday: Vec<i8>,
    pub by_yearday: Vec<i16>,
    pub by_weekno: Vec<i8>,
    pub by_month: Vec<u8>,
    pub by_setpos: Vec<i16>,
    /// Unrecognized `KEY=VALUE` parts, upper-cased keys.
    pub extensions: Vec<(String, String)>,
    /// Parameters of the `RRULE` property line.
    pub params: Parameters,
}

impl Recurrence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_freq(freq: Frequency) -> Self {
        Self {
            freq: Some(freq),
            ..Self::default()
        }
    }

    /// ## Summary
    /// Parses rule text and attaches the given parameters.
    ///
    /// ## Errors
    /// Returns an error if a rule part is malformed or `UNTIL` and `COUNT`
    /// both appear.
    pub fn parse(text: &str, params: Parameters) -> ParseResult<Self> {
        let mut recurrence = Self::new();
        parse_rrule_into(&mut recurrence, text, 0, 0)?;
        recurrence.params = params;
        Ok(recurrence)
    }

    /// ## Summary
    /// Populates this rule from an `RRULE` content line, replacing the
    /// parameters with the line's.
    ///
    /// ## Errors
    /// Returns an error if the value is not a valid recurrence rule.
    pub fn deserialize(&mut self, line: &ContentLine) -> ParseResult<()> {
        parse_rrule_into(self, &line.raw_value, line.line, line.value_column)?;
        self.params = line.params.clone();
        Ok(())
    }

    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets the count, clearing any until bound.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self.until = None;
        self
    }

    /// Sets the until bound, clearing any count.
    #[must_use]
    pub fn with_until(mut self, until: RecurrenceUntil) -> Self {
        self.until = Some(until);
        self.count = None;
        self
    }

    #[must_use]
    pub fn with_by_day(mut self, days: Vec<WeekdayNum>) -> Self {
        self.by_day = days;
        self
    }

    #[must_use]
    pub fn with_by_month(mut self, months: Vec<u8>) -> Self {
        self.by_month = months;
        self
    }
}

fn push_list<T: fmt::Display>(parts: &mut Vec<String>, key: &str, values: &[T]) {
    if values.is_empty() {
        return;
    }
    let joined: Vec<_> = values.iter().map(ToString::to_string).collect();
    parts.push(format!("{key}={}", joined.join(",")));
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if let Some(freq) = self.freq {
            parts.push(format!("FREQ={freq}"));
        }
        if let Some(interval) = self.interval
            && interval != 1
        {
            parts.push(format!("INTERVAL={interval}"));
        }
        if let Some(ref until) = self.until {
            parts.push(format!("UNTIL={until}"));
        }
        if let Some(count) = self.count {
            parts.push(format!("COUNT={count}"));
        }
        if let Some(wkst) = self.wkst {
            parts.push(format!("WKST={wkst}"));
        }

        push_list(&mut parts, "BYSECOND", &self.by_second);
        push_list(&mut parts, "BYMINUTE", &self.by_minute);
        push_list(&mut parts, "BYHOUR", &self.by_hour);
        push_list(&mut parts, "BYDAY", &self.by_day);
        push_list(&mut parts, "BYMONTHDAY", &self.by_monthday);
        push_list(&mut parts, "BYYEARDAY", &self.by_yearday);
        push_list(&mut parts, "BYWEEKNO", &self.by_weekno);
        push_list(&mut parts, "BYMONTH", &self.by_month);
        push_list(&mut parts, "BYSETPOS", &self.by_setpos);

        for (key, value) in &self.extensions {
            parts.push(format!("{key}={value}"));
        }

        f.write_str(&parts.join(";"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::ical::core::Parameter;

    #[test]
    fn recurrence_display_basic() {
        let rule = Recurrence::with_freq(Frequency::Daily).with_count(10);
        assert_eq!(rule.to_string(), "FREQ=DAILY;COUNT=10");
    }

    #[test]
    fn recurrence_display_weekly_byday() {
        let rule = Recurrence::with_freq(Frequency::Weekly).with_by_day(vec![
            WeekdayNum::every(Weekday::Monday),
            WeekdayNum::every(Weekday::Wednesday),
            WeekdayNum::every(Weekday::Friday),
        ]);
        assert_eq!(rule.to_string(), "FREQ=WEEKLY;BYDAY=MO,WE,FR");
    }

    #[test]
    fn recurrence_display_last_sunday_of_october() {
        let rule = Recurrence::with_freq(Frequency::Yearly)
            .with_by_month(vec![10])
            .with_by_day(WeekdayNum::nth(-1, Weekday::Sunday).into_iter().collect());
        assert_eq!(rule.to_string(), "FREQ=YEARLY;BYDAY=-1SU;BYMONTH=10");
    }

    #[test]
    fn recurrence_display_skips_unit_interval() {
        assert_eq!(
            Recurrence::with_freq(Frequency::Weekly).with_interval(1).to_string(),
            "FREQ=WEEKLY"
        );
        assert_eq!(
            Recurrence::with_freq(Frequency::Weekly).with_interval(2).to_string(),
            "FREQ=WEEKLY;INTERVAL=2"
        );
    }

    #[test]
    fn recurrence_display_until_date() {
        let until = NaiveDate::from_ymd_opt(2027, 3, 1).unwrap();
        let rule = Recurrence::with_freq(Frequency::Monthly).with_until(RecurrenceUntil::Date(until));
        assert_eq!(rule.to_string(), "FREQ=MONTHLY;UNTIL=20270301");
    }

    #[test]
    fn recurrence_parse_keeps_extensions_and_params() {
        let params: Parameters = vec![Parameter::new("X-SOURCE", "import")].into();
        let rule = Recurrence::parse("FREQ=DAILY;X-NAME=foo;COUNT=3", params).unwrap();

        assert_eq!(rule.freq, Some(Frequency::Daily));
        assert_eq!(rule.count, Some(3));
        assert_eq!(rule.extensions, vec![("X-NAME".to_string(), "foo".to_string())]);
        assert_eq!(rule.params.value("x-source"), Some("import"));
        assert_eq!(rule.to_string(), "FREQ=DAILY;COUNT=3;X-NAME=foo");
    }

    #[test]
    fn recurrence_deserialize_from_line() {
        let line = ContentLine::new("RRULE", "FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU");
        let mut rule = Recurrence::new();
        rule.deserialize(&line).unwrap();

        assert_eq!(rule.freq, Some(Frequency::Yearly));
        assert_eq!(rule.by_month, vec![3]);
        assert_eq!(rule.by_day, vec![WeekdayNum::nth(-1, Weekday::Sunday).unwrap()]);
    }

    #[test]
    fn weekday_num_rejects_bad_ordinals() {
        assert!(WeekdayNum::nth(0, Weekday::Monday).is_none());
        assert!(WeekdayNum::nth(54, Weekday::Monday).is_none());
        assert!(WeekdayNum::nth(-53, Weekday::Monday).is_some());
    }

    #[test]
    fn weekday_parse() {
        assert_eq!(Weekday::parse("MO"), Some(Weekday::Monday));
        assert_eq!(Weekday::parse("fr"), Some(Weekday::Friday));
        assert_eq!(Weekday::parse("XX"), None);
    }

    #[test]
    fn frequency_parse() {
        assert_eq!(Frequency::parse("DAILY"), Some(Frequency::Daily));
        assert_eq!(Frequency::parse("weekly"), Some(Frequency::Weekly));
        assert_eq!(Frequency::parse("INVALID"), None);
    }
}
