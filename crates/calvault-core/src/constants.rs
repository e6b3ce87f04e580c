//! Storage layout constants shared across crates.

/// Calendar used when a caller names none.
pub const DEFAULT_CALENDAR_ID: &str = "me";

/// Per-calendar manifest holding calendar-level components such as timezones.
pub const MANIFEST_FILE_NAME: &str = "_.ical";

pub const OBJECT_EXTENSION: &str = "ics";
pub const OBJECT_FILE_SUFFIX: &str = const_str::concat!(".", OBJECT_EXTENSION);

pub const LOCK_EXTENSION: &str = "lock";

pub const ICALENDAR_VERSION: &str = "2.0";
pub const PRODUCT_ID: &str = "-//calvault//calvault//EN";
