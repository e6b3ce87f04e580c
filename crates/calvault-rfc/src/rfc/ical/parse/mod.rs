//! iCalendar parsing primitives (RFC 5545).
//!
//! - Lexer: splits one logical line into name, parameters and raw value
//! - Reader: pulls logical lines from a buffered stream, unfolding as it goes
//! - Values: typed conversions of raw values (DATE-TIME, UTC-OFFSET, RECUR, TEXT)

mod error;
mod lexer;
mod reader;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::parse_content_line;
pub use reader::PropertyReader;
pub use values::{
    parse_date, parse_date_or_datetime, parse_datetime, parse_integer, parse_rrule,
    parse_rrule_into, parse_utc_offset, split_text_list, unescape_text,
};
