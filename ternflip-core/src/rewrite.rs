//! Selection-scoped parse and replace
//!
//! Each invocation slices the selected text out of the host document,
//! parses it on its own, finds the first top-level item the requested
//! refactoring applies to and replaces the whole selection with the
//! synthesized text. Nothing is kept between invocations.

use crate::actions::Refactoring;
use crate::document::{Document, Range};
use crate::edit::{EditBatch, TextEdit};
use crate::normalize::normalize;
use crate::options::TransformOptions;
use crate::parser::{parse_fragment, ParseError};
use crate::syntax::{SyntaxNode, SyntaxTree};
use crate::transform::{indent, to_if_else, to_ternary, TransformError};

/// The selected text and where it sits in its document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'d> {
    pub text: &'d str,
    pub range: Range,
    /// Byte offset of `text` in the document
    pub start_offset: usize,
    /// Column the selection starts at, in UTF-16 code units
    pub indentation: u32,
}

impl<'d> Fragment<'d> {
    pub fn from_selection(document: &'d dyn Document, range: Range) -> Self {
        Fragment {
            text: document.text_in(range),
            range,
            start_offset: document.offset_at(range.start),
            indentation: range.start.character,
        }
    }
}

/// Run `refactoring` on the selection, returning the edits to apply
///
/// Returns an empty batch when there is nothing to rewrite.
pub fn apply(
    document: &dyn Document,
    range: Range,
    refactoring: Refactoring,
    options: &TransformOptions,
) -> EditBatch {
    into_batch(refactoring, try_apply(document, range, refactoring, options))
}

/// Like [`apply`], but reports why nothing was rewritten
pub fn try_apply(
    document: &dyn Document,
    range: Range,
    refactoring: Refactoring,
    options: &TransformOptions,
) -> Result<TextEdit, TransformError> {
    let fragment = Fragment::from_selection(document, range);
    let tree = parse_fragment(fragment.text, options.profile)?;
    rewrite_fragment(&fragment, &tree, refactoring, options)
}

/// Run `refactoring` on the selection using a tree the host already parsed
///
/// `tree` must have been parsed from exactly the selected text.
pub fn apply_with_tree(
    document: &dyn Document,
    range: Range,
    tree: &SyntaxTree,
    refactoring: Refactoring,
    options: &TransformOptions,
) -> EditBatch {
    let fragment = Fragment::from_selection(document, range);
    into_batch(refactoring, rewrite_fragment(&fragment, tree, refactoring, options))
}

/// Rewrite the first matching top-level item of a parsed fragment
pub fn rewrite_fragment(
    fragment: &Fragment<'_>,
    tree: &SyntaxTree,
    refactoring: Refactoring,
    options: &TransformOptions,
) -> Result<TextEdit, TransformError> {
    if tree.source != fragment.text {
        return Err(ParseError::Parse("syntax tree was not parsed from the selected text".to_string()).into());
    }

    // A fragment the parser had to recover is never rewritten, even when
    // some other item in it would match
    if let Some(SyntaxNode::Unsupported { kind, .. }) = tree.items.iter().find_map(SyntaxNode::find_unsupported) {
        return Err(TransformError::Malformed { kind: kind.clone() });
    }

    let expected = refactoring.expected_kind();
    let item = tree
        .items
        .iter()
        .find(|item| normalize(item).kind() == expected)
        .ok_or(TransformError::NoMatch { expected })?;

    tracing::trace!(
        target: "ternflip",
        %refactoring,
        start = item.span().start,
        end = item.span().end,
        "rewriting top-level item"
    );

    let new_text = synthesize(item, tree, refactoring, fragment.indentation, options)?;
    Ok(TextEdit::replace(fragment.range, new_text))
}

fn synthesize(
    item: &SyntaxNode,
    tree: &SyntaxTree,
    refactoring: Refactoring,
    column: u32,
    options: &TransformOptions,
) -> Result<String, TransformError> {
    match refactoring {
        Refactoring::FormIfStatement => {
            let statement = to_if_else(item, &tree.source, options)?;
            Ok(place_at_column(&statement, column))
        }
        Refactoring::FormTernaryOperator => to_ternary(item, &tree.source),
    }
}

/// Indent all lines to `column`, except the first, which the host already
/// places there
fn place_at_column(text: &str, column: u32) -> String {
    let indentation = " ".repeat(column as usize);
    let indented = indent(text, &indentation);
    match indented.strip_prefix(indentation.as_str()) {
        Some(rest) => rest.to_string(),
        None => indented,
    }
}

fn into_batch(refactoring: Refactoring, result: Result<TextEdit, TransformError>) -> EditBatch {
    match result {
        Ok(edit) => EditBatch::from(edit),
        Err(error) => {
            tracing::debug!(target: "ternflip", %refactoring, %error, "selection left unchanged");
            EditBatch::new()
        }
    }
}

/// Rewrite a selected ternary as an if/else statement
pub fn form_if_statement(document: &dyn Document, range: Range, options: &TransformOptions) -> EditBatch {
    apply(document, range, Refactoring::FormIfStatement, options)
}

/// Rewrite a selected if/else statement as a ternary
pub fn form_ternary_operator(document: &dyn Document, range: Range, options: &TransformOptions) -> EditBatch {
    apply(document, range, Refactoring::FormTernaryOperator, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Position, TextDocument};
    use crate::syntax::Span;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_place_at_column() {
        assert_eq!(place_at_column("if (a) {\n  return b\n}", 4), "if (a) {\n      return b\n    }");
        assert_eq!(place_at_column("x", 0), "x");
    }

    #[test]
    fn test_fragment_from_selection() {
        let doc = TextDocument::new("let v;\n    v = a ? b : c;\n");
        let range = Range::new(Position::new(1, 8), Position::new(1, 17));
        let fragment = Fragment::from_selection(&doc, range);
        assert_eq!(fragment.text, "a ? b : c");
        assert_eq!(fragment.start_offset, 15);
        assert_eq!(fragment.indentation, 8);
    }

    #[test]
    fn test_tree_must_match_selection() {
        let doc = TextDocument::new("a ? b : c");
        let range = Range::new(Position::new(0, 0), Position::new(0, 9));
        let fragment = Fragment::from_selection(&doc, range);
        let tree = SyntaxTree::new("something else", vec![]);
        let result = rewrite_fragment(&fragment, &tree, Refactoring::FormIfStatement, &TransformOptions::default());
        assert!(matches!(result, Err(TransformError::Parse(_))));
    }

    #[test]
    fn test_malformed_fragment_is_rejected() {
        let doc = TextDocument::new("a ?");
        let range = Range::new(Position::new(0, 0), Position::new(0, 3));
        let tree = SyntaxTree::new(
            "a ?",
            vec![SyntaxNode::Unsupported {
                span: Span::new(0, 3),
                kind: "ERROR".to_string(),
            }],
        );
        let fragment = Fragment::from_selection(&doc, range);
        assert_eq!(
            rewrite_fragment(&fragment, &tree, Refactoring::FormIfStatement, &TransformOptions::default()),
            Err(TransformError::Malformed {
                kind: "ERROR".to_string()
            })
        );
        assert!(apply_with_tree(&doc, range, &tree, Refactoring::FormIfStatement, &TransformOptions::default())
            .is_empty());
    }
}
