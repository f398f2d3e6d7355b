//! Generic bind marker syntax.

use std::ops::Range;

use super::BindSyntax;

/// Recognizes the common embedded-SQL marker styles:
///
/// - `:name`, `:{name}` and `:[TAG]name`
/// - `#name#`
/// - `&name&`
///
/// Names consist of ASCII letters, digits, `_` and `.`. Markers inside text
/// literals, quoted names and comments are ignored, as is the `::`
/// cast operator.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericBindSyntax;

impl GenericBindSyntax {
    /// Creates a new generic bind syntax.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl BindSyntax for GenericBindSyntax {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn find_markers(&self, sql: &str) -> Vec<Range<usize>> {
        let bytes = sql.as_bytes();
        let mut markers = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            let marker_end = match bytes[i] {
                b'\'' | b'"' => {
                    i = skip_quoted(bytes, i);
                    continue;
                }
                b'/' if bytes.get(i + 1) == Some(&b'*') => {
                    i = find(bytes, i + 2, b"*/").map_or(i + 1, |end| end + 2);
                    continue;
                }
                b'{' => {
                    i = find(bytes, i + 1, b"}").map_or(i + 1, |end| end + 1);
                    continue;
                }
                b':' => colon_marker(bytes, i),
                b'#' | b'&' => enclosed_marker(bytes, i),
                _ => None,
            };
            match marker_end {
                Some(end) => {
                    markers.push(i..end);
                    i = end;
                }
                None => i += 1,
            }
        }
        markers
    }
}

const fn is_bind_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'.'
}

const fn is_word_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b == b':'
}

/// Returns the end of the run of name characters starting at `start`.
fn name_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && is_bind_char(bytes[end]) {
        end += 1;
    }
    end
}

/// Finds `needle` at or after `from`.
fn find(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    bytes
        .get(from..)?
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|offset| from + offset)
}

/// Skips a quoted span; an unterminated quote only skips itself.
fn skip_quoted(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        if bytes[i] == quote {
            if bytes.get(i + 1) == Some(&quote) {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }
    start + 1
}

/// Matches `:name`, `:{name}` and `:[TAG]name` at `start`.
fn colon_marker(bytes: &[u8], start: usize) -> Option<usize> {
    if start > 0 && is_word_char(bytes[start - 1]) {
        return None;
    }
    let next = start + 1;
    match bytes.get(next)? {
        b'{' => {
            let close = find(bytes, next + 1, b"}")?;
            let name = &bytes[next + 1..close];
            (!name.is_empty() && name.iter().copied().all(is_bind_char)).then_some(close + 1)
        }
        b'[' => {
            let close = find(bytes, next + 1, b"]")?;
            let end = name_end(bytes, close + 1);
            (end > close + 1).then_some(end)
        }
        b if is_bind_char(*b) => Some(name_end(bytes, next)),
        _ => None,
    }
}

/// Matches `#name#` or `&name&` at `start`.
fn enclosed_marker(bytes: &[u8], start: usize) -> Option<usize> {
    let delimiter = bytes[start];
    let end = name_end(bytes, start + 1);
    (end > start + 1 && bytes.get(end) == Some(&delimiter)).then_some(end + 1)
}
