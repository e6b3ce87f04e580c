//! Property names understood by the component codecs.

use std::fmt;

/// A property name recognized by at least one component codec.
///
/// Names outside this set parse to `None` and are ignored by every codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyName {
    // Block markers
    Begin,
    End,

    // Calendar properties
    Version,
    ProdId,
    CalScale,
    Method,
    CalendarName,

    // Component properties
    Uid,
    DtStamp,
    DtStart,
    DtEnd,
    Due,
    Completed,
    Summary,
    Description,
    Location,
    Status,
    Class,
    Priority,
    PercentComplete,
    Sequence,
    Created,
    LastModified,
    Url,
    Organizer,
    Attendee,
    Categories,
    FreeBusy,
    RRule,

    // Timezone properties
    TzId,
    TzName,
    TzOffsetFrom,
    TzOffsetTo,
    TzUrl,

    // Alarm properties
    Action,
    Trigger,
}

impl PropertyName {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Begin => "BEGIN",
            Self::End => "END",
            Self::Version => "VERSION",
            Self::ProdId => "PRODID",
            Self::CalScale => "CALSCALE",
            Self::Method => "METHOD",
            Self::CalendarName => "X-WR-CALNAME",
            Self::Uid => "UID",
            Self::DtStamp => "DTSTAMP",
            Self::DtStart => "DTSTART",
            Self::DtEnd => "DTEND",
            Self::Due => "DUE",
            Self::Completed => "COMPLETED",
            Self::Summary => "SUMMARY",
            Self::Description => "DESCRIPTION",
            Self::Location => "LOCATION",
            Self::Status => "STATUS",
            Self::Class => "CLASS",
            Self::Priority => "PRIORITY",
            Self::PercentComplete => "PERCENT-COMPLETE",
            Self::Sequence => "SEQUENCE",
            Self::Created => "CREATED",
            Self::LastModified => "LAST-MODIFIED",
            Self::Url => "URL",
            Self::Organizer => "ORGANIZER",
            Self::Attendee => "ATTENDEE",
            Self::Categories => "CATEGORIES",
            Self::FreeBusy => "FREEBUSY",
            Self::RRule => "RRULE",
            Self::TzId => "TZID",
            Self::TzName => "TZNAME",
            Self::TzOffsetFrom => "TZOFFSETFROM",
            Self::TzOffsetTo => "TZOFFSETTO",
            Self::TzUrl => "TZURL",
            Self::Action => "ACTION",
            Self::Trigger => "TRIGGER",
        }
    }

    /// Parses a property name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "BEGIN" => Self::Begin,
            "END" => Self::End,
            "VERSION" => Self::Version,
            "PRODID" => Self::ProdId,
            "CALSCALE" => Self::CalScale,
            "METHOD" => Self::Method,
            "X-WR-CALNAME" => Self::CalendarName,
            "UID" => Self::Uid,
            "DTSTAMP" => Self::DtStamp,
            "DTSTART" => Self::DtStart,
            "DTEND" => Self::DtEnd,
            "DUE" => Self::Due,
            "COMPLETED" => Self::Completed,
            "SUMMARY" => Self::Summary,
            "DESCRIPTION" => Self::Description,
            "LOCATION" => Self::Location,
            "STATUS" => Self::Status,
            "CLASS" => Self::Class,
            "PRIORITY" => Self::Priority,
            "PERCENT-COMPLETE" => Self::PercentComplete,
            "SEQUENCE" => Self::Sequence,
            "CREATED" => Self::Created,
            "LAST-MODIFIED" => Self::LastModified,
            "URL" => Self::Url,
            "ORGANIZER" => Self::Organizer,
            "ATTENDEE" => Self::Attendee,
            "CATEGORIES" => Self::Categories,
            "FREEBUSY" => Self::FreeBusy,
            "RRULE" => Self::RRule,
            "TZID" => Self::TzId,
            "TZNAME" => Self::TzName,
            "TZOFFSETFROM" => Self::TzOffsetFrom,
            "TZOFFSETTO" => Self::TzOffsetTo,
            "TZURL" => Self::TzUrl,
            "ACTION" => Self::Action,
            "TRIGGER" => Self::Trigger,
            _ => return None,
        })
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(PropertyName::parse("tzid"), Some(PropertyName::TzId));
        assert_eq!(PropertyName::parse("TzOffsetFrom"), Some(PropertyName::TzOffsetFrom));
        assert_eq!(PropertyName::parse("x-wr-calname"), Some(PropertyName::CalendarName));
    }

    #[test]
    fn unknown_names_are_none() {
        assert_eq!(PropertyName::parse("X-CUSTOM"), None);
        assert_eq!(PropertyName::parse(""), None);
    }

    #[test]
    fn wire_names_parse_back() {
        for name in [
            PropertyName::Begin,
            PropertyName::PercentComplete,
            PropertyName::LastModified,
            PropertyName::TzOffsetTo,
            PropertyName::Trigger,
        ] {
            assert_eq!(PropertyName::parse(name.as_str()), Some(name));
        }
    }
}
