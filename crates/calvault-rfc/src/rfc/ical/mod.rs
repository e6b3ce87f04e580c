//! iCalendar text codec (RFC 5545).
//!
//! - `core`: value types shared by readers and writers
//! - `parse`: property reader and value converters
//! - `build`: property writer, escaping and line folding
//! - `component`: typed components and their codecs
//!
//! ## Example
//!
//! ```rust
//! use calvault_rfc::rfc::ical::component::{Calendar, CalendarObject, Event};
//! use calvault_rfc::rfc::ical::{parse_calendars, to_ics_string};
//!
//! let mut event = Event::new("team-sync");
//! event.summary = Some("Team sync".to_string());
//!
//! let calendar = Calendar::with_object(CalendarObject::Event(event));
//! let text = to_ics_string(&calendar).unwrap();
//!
//! let parsed = parse_calendars(text.as_bytes()).unwrap();
//! assert_eq!(parsed[0].events[0].uid, "team-sync");
//! ```

pub mod build;
pub mod component;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

pub use build::PropertyWriter;
pub use component::{
    Calendar, CalendarObject, Component, ComponentFactory, DefaultFactory, parse_calendars,
    to_ics_string, write_calendar,
};
pub use parse::{ParseError, ParseErrorKind, ParseResult, PropertyReader};
