//! Block tags of the components the codecs understand.

use std::fmt;

/// Component kind, as named by `BEGIN:` / `END:` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VCALENDAR wrapper component.
    Calendar,
    /// VEVENT component.
    Event,
    /// VTODO component.
    Todo,
    /// VJOURNAL component.
    Journal,
    /// VFREEBUSY component.
    FreeBusy,
    /// VTIMEZONE component.
    Timezone,
    /// VALARM component (nested within VEVENT/VTODO).
    Alarm,
    /// STANDARD observance of a VTIMEZONE.
    Standard,
    /// DAYLIGHT observance of a VTIMEZONE.
    Daylight,
    /// Any other block, including X- components.
    Unknown,
}

impl ComponentKind {
    /// Returns the block tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Todo => "VTODO",
            Self::Journal => "VJOURNAL",
            Self::FreeBusy => "VFREEBUSY",
            Self::Timezone => "VTIMEZONE",
            Self::Alarm => "VALARM",
            Self::Standard => "STANDARD",
            Self::Daylight => "DAYLIGHT",
            Self::Unknown => "X-UNKNOWN",
        }
    }

    /// Parses a block tag (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "VCALENDAR" => Self::Calendar,
            "VEVENT" => Self::Event,
            "VTODO" => Self::Todo,
            "VJOURNAL" => Self::Journal,
            "VFREEBUSY" => Self::FreeBusy,
            "VTIMEZONE" => Self::Timezone,
            "VALARM" => Self::Alarm,
            "STANDARD" => Self::Standard,
            "DAYLIGHT" => Self::Daylight,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
