//! iCalendar output primitives (RFC 5545).

mod escape;
mod fold;
mod writer;

pub use escape::{escape_text, escape_text_list};
pub use fold::{MAX_LINE_OCTETS, fold_line};
pub use writer::PropertyWriter;
