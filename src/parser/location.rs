//! Source location tracking for error messages.

use std::fmt;

/// A location in script text (byte offset, line, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// Byte offset from start of script
    pub offset: usize,
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed, in characters not bytes)
    pub column: u32,
}

impl Location {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self { offset, line, column }
    }

    /// Locate `offset` within `source`.
    pub fn in_source(source: &str, offset: usize) -> Self {
        offset_to_location(source, offset)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Convert a byte offset to a Location (line/column).
pub fn offset_to_location(source: &str, offset: usize) -> Location {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &source[..offset];

    let line = before.bytes().filter(|&b| b == b'\n').count() as u32 + 1;
    let last_newline = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[last_newline..].chars().count() as u32 + 1;

    Location { offset, line, column }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_to_location_simple() {
        let source = "hello\nworld";

        assert_eq!(offset_to_location(source, 0), Location::new(0, 1, 1));
        assert_eq!(offset_to_location(source, 5), Location::new(5, 1, 6)); // newline
        assert_eq!(offset_to_location(source, 6), Location::new(6, 2, 1)); // 'w'
        assert_eq!(offset_to_location(source, 11), Location::new(11, 2, 6)); // end
    }

    #[test]
    fn test_offset_to_location_empty() {
        assert_eq!(offset_to_location("", 0), Location::new(0, 1, 1));
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        assert_eq!(offset_to_location("ab", 10), Location::new(2, 1, 3));
    }

    #[test]
    fn test_columns_count_characters() {
        let source = "\"é\" x";
        // 'x' sits after a two-byte character
        assert_eq!(offset_to_location(source, 5), Location::new(5, 1, 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Location::new(12, 3, 7).to_string(), "3:7");
    }
}
