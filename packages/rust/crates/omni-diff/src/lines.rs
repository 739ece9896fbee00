//! Line splitting.
//!
//! `\r\n`, `\r` and `\n` all terminate a line. A CR immediately followed by
//! LF counts as one separator.

use memchr::memchr2;

/// Split a document into lines.
///
/// Behaves like a split on `\r\n|\r|\n`: an empty document is one empty
/// line, and a trailing separator leaves a trailing empty line.
///
/// # Example
///
/// ```rust,ignore
/// use omni_diff::split_lines;
///
/// assert_eq!(split_lines("a\r\nb\n"), vec!["a", "b", ""]);
/// ```
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;

    while let Some(offset) = memchr2(b'\r', b'\n', &bytes[start..]) {
        let sep = start + offset;
        lines.push(&text[start..sep]);

        start = if bytes[sep] == b'\r' && bytes.get(sep + 1) == Some(&b'\n') {
            sep + 2
        } else {
            sep + 1
        };
    }

    lines.push(&text[start..]);
    lines
}
