//! Path helpers for mapping calendar identifiers and object paths onto the
//! store's directory layout.

use crate::constants::OBJECT_FILE_SUFFIX;

/// Characters that are rejected in a file name on at least one supported
/// platform. ASCII control characters are rejected as well.
const INVALID_FILE_NAME_CHARS: [char; 9] = ['"', '<', '>', '|', ':', '*', '?', '\\', '/'];

/// Returns whether `c` may not appear in a file name.
#[must_use]
pub fn is_invalid_file_name_char(c: char) -> bool {
    c.is_ascii_control() || INVALID_FILE_NAME_CHARS.contains(&c)
}

/// ## Summary
/// Makes an identifier usable as a single directory or file name.
///
/// Every invalid file name character is replaced with `_`, then leading and
/// trailing `_` are trimmed. A result made only of dots names the current or
/// a parent directory and becomes empty. The result may be empty.
///
/// Examples:
/// - "me" -> "me"
/// - "work/home" -> "work_home"
/// - "<team>" -> "team"
/// - ".." -> ""
#[must_use]
pub fn make_path_safe(input: &str) -> String {
    let replaced: String = input
        .chars()
        .map(|c| if is_invalid_file_name_char(c) { '_' } else { c })
        .collect();

    let trimmed = replaced.trim_matches('_');
    if trimmed.chars().all(|c| c == '.') {
        return String::new();
    }
    trimmed.to_string()
}

/// ## Summary
/// Splits a slash-delimited object path into its calendar segment and the
/// object's file stem.
///
/// The calendar segment is the second-to-last non-empty segment, if any. The
/// stem is the last segment without a trailing `.ics`, so dots inside a UID
/// are kept. Malformed paths degrade to best-effort extraction rather than
/// failing:
/// - "me/abc123.ics" -> (Some("me"), "abc123")
/// - "/calendars/me/abc123.ics" -> (Some("me"), "abc123")
/// - "me/abc@example.com.ics" -> (Some("me"), "abc@example.com")
/// - "abc123.ics" -> (None, "abc123")
/// - "me/abc123" -> (Some("me"), "abc123")
#[must_use]
pub fn split_object_path(path: &str) -> (Option<&str>, &str) {
    let mut segments = path.rsplit('/').filter(|s| !s.is_empty());

    let file_name = segments.next().unwrap_or_default();
    let calendar = segments.next();
    let stem = file_name
        .strip_suffix(OBJECT_FILE_SUFFIX)
        .unwrap_or(file_name);

    (calendar, stem)
}
