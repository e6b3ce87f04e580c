//! Text codec for calendar data: property lines, value converters and the
//! typed component codecs built on top of them.

pub mod error;
pub mod rfc;
