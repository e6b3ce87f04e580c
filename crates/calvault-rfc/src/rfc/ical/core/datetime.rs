//! DATE, DATE-TIME and UTC-OFFSET value types (RFC 5545 §3.3.4, §3.3.5, §3.3.14).

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// UTC offset, e.g. `+0530`, `-0800` or `+013045`.
///
/// Stored as total seconds from UTC, bounded to ±23:59:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    /// Total seconds from UTC (positive = east, negative = west).
    seconds: i32,
}

impl UtcOffset {
    /// Largest representable offset magnitude in seconds (23:59:59).
    pub const MAX_SECONDS: i32 = 23 * 3600 + 59 * 60 + 59;

    /// UTC offset (zero).
    pub const UTC: Self = Self { seconds: 0 };

    /// Creates an offset from total seconds, or `None` when out of range.
    #[must_use]
    pub fn from_seconds(seconds: i32) -> Option<Self> {
        (-Self::MAX_SECONDS..=Self::MAX_SECONDS)
            .contains(&seconds)
            .then_some(Self { seconds })
    }

    /// Creates an offset from a duration, or `None` when out of range or not a
    /// whole number of seconds.
    #[must_use]
    pub fn from_duration(duration: TimeDelta) -> Option<Self> {
        if duration.subsec_nanos() != 0 {
            return None;
        }
        i32::try_from(duration.num_seconds())
            .ok()
            .and_then(Self::from_seconds)
    }

    /// Returns the offset as total seconds from UTC.
    #[must_use]
    pub const fn as_seconds(self) -> i32 {
        self.seconds
    }

    /// Returns the offset as a signed duration.
    #[must_use]
    pub fn as_duration(self) -> TimeDelta {
        TimeDelta::seconds(i64::from(self.seconds))
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let total = self.seconds.unsigned_abs();
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;

        write!(f, "{sign}{hours:02}{minutes:02}")?;
        if seconds != 0 {
            write!(f, "{seconds:02}")?;
        }
        Ok(())
    }
}

/// Form of a DATE-TIME value (RFC 5545 §3.3.5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeForm {
    /// Same wall-clock time in any timezone, e.g. `19980118T230000`.
    Floating,
    /// Absolute instant, indicated by a `Z` suffix, e.g. `19980119T070000Z`.
    Utc,
    /// Local time bound to a `TZID` parameter.
    Zoned {
        /// The timezone identifier.
        tzid: String,
    },
}

/// DATE-TIME value (RFC 5545 §3.3.5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTime {
    /// Wall-clock date and time as written.
    pub local: NaiveDateTime,
    /// Whether the value is floating, UTC or zoned.
    pub form: DateTimeForm,
}

impl DateTime {
    #[must_use]
    pub const fn floating(local: NaiveDateTime) -> Self {
        Self {
            local,
            form: DateTimeForm::Floating,
        }
    }

    #[must_use]
    pub const fn utc(local: NaiveDateTime) -> Self {
        Self {
            local,
            form: DateTimeForm::Utc,
        }
    }

    #[must_use]
    pub fn zoned(local: NaiveDateTime, tzid: impl Into<String>) -> Self {
        Self {
            local,
            form: DateTimeForm::Zoned { tzid: tzid.into() },
        }
    }

    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self.form, DateTimeForm::Utc)
    }

    #[must_use]
    pub fn is_floating(&self) -> bool {
        matches!(self.form, DateTimeForm::Floating)
    }

    /// Returns the timezone ID if this is a zoned time.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match &self.form {
            DateTimeForm::Zoned { tzid } => Some(tzid),
            _ => None,
        }
    }

    /// Returns the instant for UTC values.
    #[must_use]
    pub fn to_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.is_utc().then(|| self.local.and_utc())
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.local.format("%Y%m%dT%H%M%S"))?;
        if self.is_utc() {
            f.write_str("Z")?;
        }
        Ok(())
    }
}

impl From<chrono::DateTime<chrono::Utc>> for DateTime {
    fn from(instant: chrono::DateTime<chrono::Utc>) -> Self {
        Self::utc(instant.naive_utc())
    }
}

/// A value that may be a DATE or a DATE-TIME, as `DTSTART`, `DTEND` and `DUE`
/// allow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOrDateTime {
    Date(NaiveDate),
    DateTime(DateTime),
}

impl DateOrDateTime {
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// Returns the calendar date, dropping any time of day.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Date(d) => *d,
            Self::DateTime(dt) => dt.local.date(),
        }
    }
}

impl fmt::Display for DateOrDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.format("%Y%m%d")),
            Self::DateTime(dt) => write!(f, "{dt}"),
        }
    }
}

impl From<DateTime> for DateOrDateTime {
    fn from(dt: DateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl From<NaiveDate> for DateOrDateTime {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}
