//! Host document abstraction
//!
//! The rewrites only need full-text access and offset <-> position mapping
//! from the host editor. [`TextDocument`] provides both over an owned
//! string for hosts that hand over plain text.

use serde::{Deserialize, Serialize};

use crate::source_utils::{extract_snippet, LineIndex};

/// Zero-based line and UTF-16 character, as editor hosts report them
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// A `[start, end)` range of positions
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// What the rewrites require from a host document
pub trait Document {
    /// The full text of the document
    fn text(&self) -> &str;

    /// Byte offset of a position, clamped to the document
    fn offset_at(&self, position: Position) -> usize;

    /// Position of a byte offset, clamped to the document
    fn position_at(&self, offset: usize) -> Position;

    /// The text spanned by `range`
    fn text_in(&self, range: Range) -> &str {
        let start = self.offset_at(range.start);
        let end = self.offset_at(range.end);
        extract_snippet(self.text(), start, end)
    }
}

/// An in-memory document snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    text: String,
    index: LineIndex,
}

impl TextDocument {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let index = LineIndex::new(&text);
        Self { text, index }
    }

    pub fn line_count(&self) -> usize {
        self.index.line_count()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl Document for TextDocument {
    fn text(&self) -> &str {
        &self.text
    }

    fn offset_at(&self, position: Position) -> usize {
        self.index.offset_at(&self.text, position)
    }

    fn position_at(&self, offset: usize) -> Position {
        self.index.position_at(&self.text, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_in_range() {
        let doc = TextDocument::new("const a = 1;\nconst b = x ? y : z;\n");
        let range = Range::new(Position::new(1, 10), Position::new(1, 19));
        assert_eq!(doc.text_in(range), "x ? y : z");
        assert_eq!(doc.line_count(), 3);
    }

    #[test]
    fn test_offset_position_roundtrip() {
        let doc = TextDocument::new("ab\ncd");
        for offset in 0..=doc.text().len() {
            assert_eq!(doc.offset_at(doc.position_at(offset)), offset);
        }
    }

    #[test]
    fn test_range_is_empty() {
        let point = Position::new(2, 4);
        assert!(Range::new(point, point).is_empty());
        assert!(!Range::new(Position::new(0, 0), point).is_empty());
    }
}
