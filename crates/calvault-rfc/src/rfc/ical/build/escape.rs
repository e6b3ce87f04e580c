//! TEXT value escaping (RFC 5545 §3.3.11).

use std::borrow::Cow;

fn needs_escape(c: char) -> bool {
    matches!(c, '\\' | ',' | ';' | '\n' | '\r')
}

/// Escapes text for iCalendar TEXT values.
///
/// Escapes backslash, comma, semicolon and newlines. A CR is dropped, so CRLF
/// in the input becomes a single `\n`.
#[must_use]
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if !s.chars().any(needs_escape) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\n' => result.push_str("\\n"),
            '\r' => {}
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Escapes each item and joins them with unescaped commas.
#[must_use]
pub fn escape_text_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| escape_text(item.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_text_basic() {
        assert_eq!(escape_text("hello, world"), "hello\\, world");
        assert_eq!(escape_text("line1\r\nline2"), "line1\\nline2");
        assert_eq!(escape_text("back\\slash"), "back\\\\slash");
        assert_eq!(escape_text("semi;colon"), "semi\\;colon");
    }

    #[test]
    fn escape_text_borrows_when_clean() {
        assert!(matches!(escape_text("Central European Time"), Cow::Borrowed(_)));
    }

    #[test]
    fn escape_text_list_joins() {
        assert_eq!(escape_text_list(&["WORK", "a,b"]), "WORK,a\\,b");
        assert_eq!(escape_text_list::<&str>(&[]), "");
    }
}
