//! iCalendar value types (RFC 5545).
//!
//! These types are shared by the property reader, the property writer and the
//! component codecs. They carry no I/O of their own.

mod datetime;
mod name;
mod parameter;
mod property;
mod rrule;

pub use datetime::{DateOrDateTime, DateTime, DateTimeForm, UtcOffset};
pub use name::PropertyName;
pub use parameter::{Parameter, Parameters};
pub use property::{ContentLine, ParameterizedValue};
pub use rrule::{Frequency, Recurrence, RecurrenceUntil, Weekday, WeekdayNum};
