//! Streaming property reader.

use std::io::BufRead;

use super::lexer::parse_content_line;
use crate::error::RfcResult;
use crate::rfc::ical::core::{ContentLine, PropertyName};

/// Pulls logical content lines from a buffered stream.
///
/// Physical lines starting with a space or tab continue the previous line
/// (RFC 5545 §3.1): the line break and the single whitespace character are
/// removed. Both CRLF and bare LF endings are accepted and blank lines are
/// skipped.
#[derive(Debug)]
pub struct PropertyReader<R> {
    inner: R,
    /// Physical line read ahead while looking for continuations.
    pending: Option<(usize, String)>,
    line_number: usize,
}

impl<R: BufRead> PropertyReader<R> {
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: None,
            line_number: 0,
        }
    }

    /// Number of physical lines consumed so far.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    /// ## Summary
    /// Reads the next property line.
    ///
    /// `BEGIN` and `END` markers are returned like any other property; callers
    /// stop consuming a block when they see `END`, whatever its argument.
    /// Returns `Ok(None)` once the stream is exhausted.
    ///
    /// ## Errors
    /// Returns an error if reading fails, the stream is not UTF-8, or the line
    /// is not a valid content line.
    pub fn next_property(&mut self) -> RfcResult<Option<ContentLine>> {
        match self.next_logical_line()? {
            Some((line_num, text)) => Ok(Some(parse_content_line(&text, line_num)?)),
            None => Ok(None),
        }
    }

    /// ## Summary
    /// Consumes the remainder of a block whose `BEGIN` was just read, up to
    /// and including its matching `END`.
    ///
    /// Nested blocks are counted so their `END` lines do not terminate the
    /// outer block early.
    ///
    /// ## Errors
    /// Returns an error if reading or lexing a line fails.
    pub fn skip_block(&mut self) -> RfcResult<()> {
        let start = self.line_number;
        let mut depth = 1usize;

        while let Some(line) = self.next_property()? {
            match PropertyName::parse(&line.name) {
                Some(PropertyName::Begin) => depth += 1,
                Some(PropertyName::End) => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
        }

        tracing::trace!(from = start, to = self.line_number, "Skipped unrecognized block");
        Ok(())
    }

    fn read_physical_line(&mut self) -> RfcResult<Option<(usize, String)>> {
        let mut buf = String::new();
        if self.inner.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        if self.line_number == 1 && buf.starts_with('\u{feff}') {
            buf.remove(0);
        }

        Ok(Some((self.line_number, buf)))
    }

    fn next_logical_line(&mut self) -> RfcResult<Option<(usize, String)>> {
        let (line_num, mut text) = loop {
            let next = match self.pending.take() {
                Some(line) => Some(line),
                None => self.read_physical_line()?,
            };
            match next {
                None => return Ok(None),
                Some((_, text)) if text.is_empty() => {}
                // A continuation with nothing to continue stands on its own
                Some((n, text)) if text.starts_with([' ', '\t']) => break (n, text[1..].to_string()),
                Some(line) => break line,
            }
        };

        while let Some((n, next)) = self.read_physical_line()? {
            if next.starts_with([' ', '\t']) {
                text.push_str(&next[1..]);
            } else {
                self.pending = Some((n, next));
                break;
            }
        }

        Ok(Some((line_num, text)))
    }
}
