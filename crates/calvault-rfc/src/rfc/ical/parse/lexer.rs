//! Content line lexer for iCalendar (RFC 5545 §3.1).

use std::iter::Peekable;
use std::str::CharIndices;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{ContentLine, Parameter, Parameters};

type Chars<'a> = Peekable<CharIndices<'a>>;

/// Parses a single unfolded content line.
///
/// Format: `name *(";" param) ":" value`
///
/// The value is everything after the first `:` that is not inside a quoted
/// parameter value. It is returned verbatim.
///
/// ## Errors
/// Returns an error if the line is malformed or contains invalid characters.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let mut chars = line.char_indices().peekable();
    let mut name_end = None;
    let mut colon_pos = None;

    // Property name ends at ';' or ':'
    while let Some(&(i, c)) = chars.peek() {
        if c == ';' || c == ':' {
            name_end = Some(i);
            if c == ':' {
                colon_pos = Some(i);
            }
            chars.next();
            break;
        }
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(ParseError::new(
                ParseErrorKind::InvalidPropertyName,
                line_num,
                i + 1,
            ));
        }
        chars.next();
    }

    let Some(name_end) = name_end else {
        return Err(
            ParseError::new(ParseErrorKind::MissingColon, line_num, line.len() + 1)
                .with_context(truncate(line)),
        );
    };
    if name_end == 0 {
        return Err(ParseError::new(
            ParseErrorKind::MissingPropertyName,
            line_num,
            1,
        ));
    }

    let name = line[..name_end].to_ascii_uppercase();

    let mut params = Parameters::new();
    while colon_pos.is_none() {
        let (param, colon) = parse_parameter(&mut chars, line, line_num)?;
        params.push(param);
        colon_pos = colon;
    }

    // Set by the loop above or by the name scan
    let colon_pos = colon_pos.unwrap_or(name_end);

    Ok(ContentLine {
        name,
        params,
        raw_value: line[colon_pos + 1..].to_string(),
        line: line_num,
        value_column: colon_pos + 2,
    })
}

fn truncate(line: &str) -> String {
    line.chars().take(40).collect()
}

/// Parses a single parameter from the character stream.
///
/// Returns the parameter and, when the parameter list ended, the byte offset
/// of the `:` that starts the value.
fn parse_parameter(
    chars: &mut Chars<'_>,
    line: &str,
    line_num: usize,
) -> ParseResult<(Parameter, Option<usize>)> {
    let start = chars.peek().map_or(line.len(), |&(i, _)| i);

    let mut name_end = None;
    while let Some(&(i, c)) = chars.peek() {
        if c == '=' {
            name_end = Some(i);
            chars.next();
            break;
        }
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(ParseError::new(
                ParseErrorKind::InvalidParameter,
                line_num,
                i + 1,
            ));
        }
        chars.next();
    }

    let name_end = match name_end {
        Some(end) if end > start => end,
        Some(_) => {
            return Err(ParseError::new(
                ParseErrorKind::InvalidParameter,
                line_num,
                start + 1,
            ));
        }
        None => {
            return Err(ParseError::new(
                ParseErrorKind::MissingColon,
                line_num,
                line.len() + 1,
            ));
        }
    };

    let param_name = &line[start..name_end];

    let mut values = Vec::new();
    loop {
        values.push(parse_param_value(chars, line, line_num)?);

        match chars.next() {
            Some((_, ',')) => {}
            Some((_, ';')) => return Ok((Parameter::with_values(param_name, values), None)),
            Some((i, ':')) => return Ok((Parameter::with_values(param_name, values), Some(i))),
            Some((i, c)) => {
                return Err(
                    ParseError::new(ParseErrorKind::InvalidParameter, line_num, i + 1)
                        .with_context(format!("unexpected character '{c}'")),
                );
            }
            None => {
                return Err(ParseError::new(
                    ParseErrorKind::MissingColon,
                    line_num,
                    line.len() + 1,
                ));
            }
        }
    }
}

/// Parses a parameter value, decoding RFC 6868 caret escapes inside quotes.
fn parse_param_value(chars: &mut Chars<'_>, line: &str, line_num: usize) -> ParseResult<String> {
    let Some(&(start, first)) = chars.peek() else {
        return Err(ParseError::new(
            ParseErrorKind::MissingColon,
            line_num,
            line.len() + 1,
        ));
    };

    if first != '"' {
        // Unquoted value ends at ',' ';' or ':'
        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if matches!(c, ',' | ';' | ':') {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }
        return Ok(line[start..end].to_string());
    }

    chars.next();
    let mut value = String::new();
    while let Some((_, c)) = chars.next() {
        match c {
            '"' => return Ok(value),
            '^' => match chars.peek() {
                Some(&(_, '^')) => {
                    value.push('^');
                    chars.next();
                }
                Some(&(_, 'n')) => {
                    value.push('\n');
                    chars.next();
                }
                Some(&(_, '\'')) => {
                    value.push('"');
                    chars.next();
                }
                _ => value.push('^'),
            },
            _ => value.push(c),
        }
    }

    Err(ParseError::new(
        ParseErrorKind::UnclosedQuote,
        line_num,
        start + 1,
    ))
}
