//! Value type parsers for iCalendar (RFC 5545 §3.3).
//!
//! Error sources are discarded; the `ParseError` position and kind are what
//! callers report.
#![expect(
    clippy::map_err_ignore,
    reason = "Value parsers report position and kind rather than the std parse error"
)]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{
    DateOrDateTime, DateTime, Frequency, Recurrence, RecurrenceUntil, UtcOffset, Weekday,
    WeekdayNum,
};

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses an all-digit slice; callers check `is_ascii_digits` first.
fn digits(s: &str) -> u32 {
    s.bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

/// Parses a DATE value (RFC 5545 §3.3.4).
///
/// Format: YYYYMMDD (e.g. "19970714"). The date must exist in the proleptic
/// Gregorian calendar.
///
/// ## Errors
/// Returns an error if the string is not a valid 8-digit date.
pub fn parse_date(s: &str, line: usize, col: usize) -> ParseResult<NaiveDate> {
    if s.len() != 8 || !is_ascii_digits(s) {
        return Err(ParseError::new(ParseErrorKind::InvalidDate, line, col).with_context(s));
    }

    let year = i32::try_from(digits(&s[0..4]))
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidDate, line, col))?;
    NaiveDate::from_ymd_opt(year, digits(&s[4..6]), digits(&s[6..8]))
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidDate, line, col).with_context(s))
}

/// Parses a TIME value (RFC 5545 §3.3.12), returning whether it carried `Z`.
fn parse_time(s: &str, line: usize, col: usize) -> ParseResult<(NaiveTime, bool)> {
    let (time_str, is_utc) = match s.strip_suffix('Z') {
        Some(stripped) => (stripped, true),
        None => (s, false),
    };

    if time_str.len() != 6 || !is_ascii_digits(time_str) {
        return Err(ParseError::new(ParseErrorKind::InvalidTime, line, col).with_context(s));
    }

    let time = NaiveTime::from_hms_opt(
        digits(&time_str[0..2]),
        digits(&time_str[2..4]),
        digits(&time_str[4..6]),
    )
    .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidTime, line, col).with_context(s))?;

    Ok((time, is_utc))
}

/// Parses a DATE-TIME value (RFC 5545 §3.3.5).
///
/// Format: YYYYMMDD"T"HHMMSS[Z] (e.g. "19970714T133000Z"). A trailing `Z`
/// makes the value UTC; otherwise `tzid` (from the property's TZID parameter)
/// makes it zoned, and its absence makes it floating.
///
/// ## Errors
/// Returns an error if the string is not a valid date-time.
pub fn parse_datetime(
    s: &str,
    tzid: Option<&str>,
    line: usize,
    col: usize,
) -> ParseResult<DateTime> {
    let Some((date_str, time_str)) = s.split_once('T') else {
        return Err(ParseError::new(ParseErrorKind::InvalidDateTime, line, col).with_context(s));
    };

    let date = parse_date(date_str, line, col)?;
    let (time, is_utc) = parse_time(time_str, line, col + date_str.len() + 1)?;
    let local = NaiveDateTime::new(date, time);

    Ok(match tzid {
        _ if is_utc => DateTime::utc(local),
        Some(tz) => DateTime::zoned(local, tz),
        None => DateTime::floating(local),
    })
}

/// Parses a value that may be a DATE or a DATE-TIME.
///
/// `VALUE=DATE` selects the DATE form; without a `VALUE` parameter the form is
/// inferred from the presence of the `T` separator.
///
/// ## Errors
/// Returns an error if the value does not parse in the selected form.
pub fn parse_date_or_datetime(
    s: &str,
    value_type: Option<&str>,
    tzid: Option<&str>,
    line: usize,
    col: usize,
) -> ParseResult<DateOrDateTime> {
    let is_date = match value_type {
        Some(v) => v.eq_ignore_ascii_case("DATE"),
        None => !s.contains('T'),
    };

    if is_date {
        parse_date(s, line, col).map(DateOrDateTime::Date)
    } else {
        parse_datetime(s, tzid, line, col).map(DateOrDateTime::DateTime)
    }
}

/// Parses a UTC-OFFSET value (RFC 5545 §3.3.14).
///
/// Format: (+|-)HHMM[SS] (e.g. "+0530", "-0800", "+013045"). Hours must be at
/// most 23 and minutes and seconds at most 59.
///
/// ## Errors
/// Returns an error if the string is not a valid UTC offset.
pub fn parse_utc_offset(s: &str, line: usize, col: usize) -> ParseResult<UtcOffset> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidUtcOffset, line, col).with_context(s);

    let (sign, body) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => return Err(invalid()),
    };
    if !(body.len() == 4 || body.len() == 6) || !is_ascii_digits(body) {
        return Err(invalid());
    }

    let hours = digits(&body[0..2]);
    let minutes = digits(&body[2..4]);
    let seconds = if body.len() == 6 { digits(&body[4..6]) } else { 0 };
    if hours > 23 || minutes > 59 || seconds > 59 {
        return Err(invalid());
    }

    let total = i32::try_from(hours * 3600 + minutes * 60 + seconds).map_err(|_| invalid())?;
    UtcOffset::from_seconds(sign * total).ok_or_else(invalid)
}

/// Parses a RECUR value (RFC 5545 §3.3.10).
///
/// ## Errors
/// Returns an error if the string is not a valid recurrence rule.
pub fn parse_rrule(s: &str, line: usize, col: usize) -> ParseResult<Recurrence> {
    let mut rule = Recurrence::new();
    parse_rrule_into(&mut rule, s, line, col)?;
    Ok(rule)
}

/// Parses a RECUR value into an existing rule.
///
/// Unrecognized `KEY=VALUE` parts are appended to `extensions` so they survive
/// a write. Empty parts (e.g. from a trailing `;`) are ignored.
///
/// ## Errors
/// Returns an error if a part lacks `=`, a known part has a malformed value,
/// or both `UNTIL` and `COUNT` are present.
pub fn parse_rrule_into(
    rule: &mut Recurrence,
    s: &str,
    line: usize,
    col: usize,
) -> ParseResult<()> {
    let mut offset = col;
    for part in s.split(';') {
        if !part.is_empty() {
            let (key, value) = part.split_once('=').ok_or_else(|| {
                ParseError::new(ParseErrorKind::InvalidRRule, line, offset).with_context(part)
            })?;
            parse_rrule_part(rule, key, value, line, offset)?;
        }
        offset += part.len() + 1;
    }
    Ok(())
}

/// Parses a single RRULE key-value pair.
fn parse_rrule_part(
    rule: &mut Recurrence,
    key: &str,
    value: &str,
    line: usize,
    col: usize,
) -> ParseResult<()> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidRRule, line, col).with_context(key);

    match key.to_ascii_uppercase().as_str() {
        "FREQ" => {
            rule.freq = Some(
                Frequency::parse(value)
                    .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidFrequency, line, col))?,
            );
        }
        "INTERVAL" => rule.interval = Some(value.parse().map_err(|_| invalid())?),
        "COUNT" => {
            if rule.until.is_some() {
                return Err(ParseError::new(ParseErrorKind::UntilCountConflict, line, col));
            }
            rule.count = Some(value.parse().map_err(|_| invalid())?);
        }
        "UNTIL" => {
            if rule.count.is_some() {
                return Err(ParseError::new(ParseErrorKind::UntilCountConflict, line, col));
            }
            rule.until = Some(if value.contains('T') {
                RecurrenceUntil::DateTime(parse_datetime(value, None, line, col)?)
            } else {
                RecurrenceUntil::Date(parse_date(value, line, col)?)
            });
        }
        "WKST" => {
            rule.wkst = Some(
                Weekday::parse(value)
                    .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidWeekday, line, col))?,
            );
        }
        "BYSECOND" => rule.by_second = parse_list(value, line, col)?,
        "BYMINUTE" => rule.by_minute = parse_list(value, line, col)?,
        "BYHOUR" => rule.by_hour = parse_list(value, line, col)?,
        "BYDAY" => {
            rule.by_day = value
                .split(',')
                .map(|v| parse_weekday_num(v.trim(), line, col))
                .collect::<ParseResult<_>>()?;
        }
        "BYMONTHDAY" => rule.by_monthday = parse_list(value, line, col)?,
        "BYYEARDAY" => rule.by_yearday = parse_list(value, line, col)?,
        "BYWEEKNO" => rule.by_weekno = parse_list(value, line, col)?,
        "BYMONTH" => rule.by_month = parse_list(value, line, col)?,
        "BYSETPOS" => rule.by_setpos = parse_list(value, line, col)?,
        other => rule
            .extensions
            .push((other.to_string(), value.to_string())),
    }
    Ok(())
}

/// Parses a comma-separated list of integers.
fn parse_list<T: std::str::FromStr>(s: &str, line: usize, col: usize) -> ParseResult<Vec<T>> {
    s.split(',')
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|_| ParseError::new(ParseErrorKind::InvalidRRule, line, col).with_context(s))
        })
        .collect()
}

/// Parses a single weekday with optional ordinal (e.g. "MO", "1MO", "-1FR").
fn parse_weekday_num(s: &str, line: usize, col: usize) -> ParseResult<WeekdayNum> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidWeekday, line, col).with_context(s);

    if s.len() < 2 || !s.is_char_boundary(s.len() - 2) {
        return Err(invalid());
    }
    let (ordinal_str, weekday_str) = s.split_at(s.len() - 2);
    let weekday = Weekday::parse(weekday_str).ok_or_else(invalid)?;

    if ordinal_str.is_empty() {
        return Ok(WeekdayNum::every(weekday));
    }
    let ordinal = ordinal_str.parse::<i8>().map_err(|_| invalid())?;
    WeekdayNum::nth(ordinal, weekday).ok_or_else(invalid)
}

/// Unescapes text values (RFC 5545 §3.3.11).
///
/// Escape sequences: \\ \, \; \n \N
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => result.push('\n'),
            Some(',') => result.push(','),
            Some(';') => result.push(';'),
            Some('\\') | None => result.push('\\'),
            Some(other) => {
                // Unknown escape, keep as written
                result.push('\\');
                result.push(other);
            }
        }
    }

    result
}

/// Splits a TEXT list on unescaped commas and unescapes each item.
#[must_use]
pub fn split_text_list(s: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            ',' => {
                items.push(unescape_text(&s[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(unescape_text(&s[start..]));

    items
}

/// Parses an INTEGER value (RFC 5545 §3.3.8).
///
/// ## Errors
/// Returns an error if the string is not a valid integer.
pub fn parse_integer(s: &str, line: usize, col: usize) -> ParseResult<i32> {
    s.trim()
        .parse()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidInteger, line, col).with_context(s))
}
