//! Source text position utilities
//!
//! Converts between byte offsets and host positions (zero-based line,
//! UTF-16 character) and extracts snippets. Out-of-range input is clamped
//! the way editor hosts clamp it rather than rejected.

use crate::document::Position;

/// Pre-computed line boundaries for one text snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset where each line starts
    line_starts: Vec<usize>,
    /// Byte offset where each line's content ends (before `\r\n` / `\n`)
    line_ends: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = vec![0];
        let mut line_ends = Vec::new();

        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => {
                    line_ends.push(i);
                    line_starts.push(i + 1);
                    i += 1;
                }
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    line_ends.push(i);
                    line_starts.push(i + 2);
                    i += 2;
                }
                b'\r' => {
                    line_ends.push(i);
                    line_starts.push(i + 1);
                    i += 1;
                }
                _ => i += 1,
            }
        }
        line_ends.push(bytes.len());

        Self {
            line_starts,
            line_ends,
            len: bytes.len(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert) => insert.saturating_sub(1),
        }
    }

    /// Convert a byte offset into a position
    ///
    /// `text` must be the snapshot this index was built from. Offsets past
    /// the end clamp to the end; offsets inside a character or a line break
    /// snap back to the nearest preceding boundary.
    pub fn position_at(&self, text: &str, offset: usize) -> Position {
        let mut offset = offset.min(self.len);
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = self.line_of(offset);
        let start = self.line_starts[line];
        let end = offset.min(self.line_ends[line]);
        let character: usize = text[start..end].chars().map(char::len_utf16).sum();

        Position::new(line as u32, character as u32)
    }

    /// Convert a position into a byte offset
    ///
    /// Lines past the end clamp to the end of the text, characters past the
    /// end of a line clamp to the end of that line, and a character inside a
    /// surrogate pair resolves to the start of that pair.
    pub fn offset_at(&self, text: &str, position: Position) -> usize {
        let line = position.line as usize;
        if line >= self.line_count() {
            return self.len;
        }

        let start = self.line_starts[line];
        let end = self.line_ends[line];
        let target = position.character as usize;

        let mut utf16 = 0;
        for (index, ch) in text[start..end].char_indices() {
            let width = ch.len_utf16();
            if utf16 + width > target {
                return start + index;
            }
            utf16 += width;
        }
        end
    }
}

/// Extract the source text between two byte offsets
///
/// Returns an empty snippet when the range is empty, inverted, or does not
/// fall on character boundaries.
pub fn extract_snippet(source: &str, start: usize, end: usize) -> &str {
    if end <= start {
        return "";
    }
    source.get(start..end.min(source.len())).unwrap_or("")
}
