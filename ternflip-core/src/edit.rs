//! Text edits and their transactional application
//!
//! A rewrite produces an [`EditBatch`]: a list of range replacements the host
//! applies as one unit. [`apply_edits`] validates the whole batch before
//! touching any text, so a rejected batch leaves the document as it was.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::{Document, Range};

/// Replace the text in `range` with `new_text`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

impl TextEdit {
    pub fn replace(range: Range, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }
}

/// Errors that can occur when applying edits
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The range ends before it starts
    #[error("edit range {start}..{end} is inverted")]
    InvertedRange { start: usize, end: usize },
    /// Two edits touch overlapping text, making the result ambiguous
    #[error("overlapping edits at {first:?} and {second:?}, replacement is ambiguous")]
    OverlappingEdits {
        first: (usize, usize),
        second: (usize, usize),
    },
}

/// Edits gathered during one rewrite, applied together or not at all
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditBatch {
    edits: Vec<TextEdit>,
}

impl EditBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, range: Range, new_text: impl Into<String>) {
        self.edits.push(TextEdit::replace(range, new_text));
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    pub fn into_edits(self) -> Vec<TextEdit> {
        self.edits
    }

    /// Apply the batch to `document`, returning the new text
    pub fn apply_to(&self, document: &dyn Document) -> Result<String, EditError> {
        apply_edits(document, &self.edits)
    }
}

impl From<TextEdit> for EditBatch {
    fn from(edit: TextEdit) -> Self {
        Self { edits: vec![edit] }
    }
}

/// Apply edits to a document snapshot and return the resulting text
///
/// Ranges are resolved against the original text, sorted, and validated
/// before the result is built in a single pass. Identical edits collapse
/// into one.
pub fn apply_edits(document: &dyn Document, edits: &[TextEdit]) -> Result<String, EditError> {
    let text = document.text();

    let mut resolved: Vec<(usize, usize, &str)> = Vec::with_capacity(edits.len());
    for edit in edits {
        let start = document.offset_at(edit.range.start);
        let end = document.offset_at(edit.range.end);
        if start > end {
            return Err(EditError::InvertedRange { start, end });
        }
        resolved.push((start, end, edit.new_text.as_str()));
    }

    resolved.sort_by_key(|&(start, end, _)| (start, end));
    resolved.dedup();

    for pair in resolved.windows(2) {
        let (first_start, first_end, _) = pair[0];
        let (second_start, second_end, _) = pair[1];
        let both_inserts_at_same_point = first_start == first_end
            && second_start == second_end
            && first_start == second_start;
        if first_end > second_start || both_inserts_at_same_point {
            return Err(EditError::OverlappingEdits {
                first: (first_start, first_end),
                second: (second_start, second_end),
            });
        }
    }

    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;
    for (start, end, new_text) in resolved {
        result.push_str(&text[last_end..start]);
        result.push_str(new_text);
        last_end = end;
    }
    result.push_str(&text[last_end..]);

    Ok(result)
}
