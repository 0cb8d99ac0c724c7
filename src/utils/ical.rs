// src/utils/ical.rs

//! iCalendar text helpers.

/// Line terminator required by the iCalendar format.
pub const CRLF: &str = "\r\n";

/// Escape a TEXT value for a single content line.
///
/// Commas become `\,` and line breaks become the literal `\n` escape.
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Join content lines into a CRLF-terminated document.
pub fn to_document<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut doc = String::new();
    for line in lines {
        doc.push_str(line.as_ref());
        doc.push_str(CRLF);
    }
    doc
}
