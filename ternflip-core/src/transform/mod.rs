//! Synthesizers for the two rewrite directions
//!
//! Both take a lowered node plus the fragment source it was parsed from and
//! produce replacement text. Sub-expressions that are carried over are
//! sliced verbatim from the source.

pub mod if_statement;
pub mod ternary;

pub use if_statement::to_if_else;
pub use ternary::to_ternary;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::parser::ParseError;
use crate::syntax::{NodeKind, SyntaxNode};

static LINE_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n").unwrap());

/// Errors that can occur while synthesizing a rewrite
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("expected a {expected} node, found {found}")]
    ShapeMismatch { expected: NodeKind, found: NodeKind },
    #[error("fragment contains a malformed `{kind}` node")]
    Malformed { kind: String },
    #[error("no top-level {expected} node in the selection")]
    NoMatch { expected: NodeKind },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Prefix every line of `text` with `indentation`
///
/// Line breaks in the result are always `\n`.
pub fn indent(text: &str, indentation: &str) -> String {
    LINE_BREAK_RE
        .split(text)
        .map(|line| format!("{indentation}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Verbatim text of `node`, refusing subtrees the parser could not make sense of
fn verbatim<'s>(node: &SyntaxNode, source: &'s str) -> Result<&'s str, TransformError> {
    match node.find_unsupported() {
        Some(SyntaxNode::Unsupported { kind, .. }) => Err(TransformError::Malformed { kind: kind.clone() }),
        _ => Ok(node.text(source)),
    }
}

fn shape_mismatch(expected: NodeKind, found: &SyntaxNode) -> TransformError {
    match found {
        SyntaxNode::Unsupported { kind, .. } => TransformError::Malformed { kind: kind.clone() },
        _ => TransformError::ShapeMismatch {
            expected,
            found: found.kind(),
        },
    }
}
