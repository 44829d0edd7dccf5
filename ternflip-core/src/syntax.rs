//! Syntax model for parsed fragments
//!
//! A closed set of node shapes the rewrites care about. Everything else is
//! kept as an opaque `Other` node so its original text can still be sliced
//! out of the fragment. Nodes never hold text themselves: every node keeps
//! the byte span it was parsed from, and text is recovered by slicing the
//! fragment source, so unchanged sub-expressions keep their exact spelling.

use serde::Serialize;
use strum_macros::{AsRefStr, Display};

/// Half-open byte range `[start, end)` into the fragment source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slice `source` with this span. Out-of-range spans yield "".
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Discriminant of a [`SyntaxNode`], used for dispatch and error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Conditional,
    If,
    Block,
    Return,
    ExpressionStatement,
    Parenthesized,
    Other,
    Unsupported,
}

/// A lowered syntax node. Each node owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// `condition ? when_true : when_false`
    Conditional {
        span: Span,
        condition: Box<SyntaxNode>,
        when_true: Box<SyntaxNode>,
        when_false: Box<SyntaxNode>,
    },
    /// `if (condition) then_branch else else_branch`
    ///
    /// `condition` is the expression inside the statement's own parentheses.
    If {
        span: Span,
        condition: Box<SyntaxNode>,
        then_branch: Box<SyntaxNode>,
        else_branch: Option<Box<SyntaxNode>>,
    },
    /// `{ statements }`
    Block {
        span: Span,
        statements: Vec<SyntaxNode>,
    },
    /// `return expression;`
    Return {
        span: Span,
        expression: Option<Box<SyntaxNode>>,
    },
    /// `expression;`
    ExpressionStatement {
        span: Span,
        expression: Box<SyntaxNode>,
    },
    /// `(inner)`
    Parenthesized {
        span: Span,
        inner: Box<SyntaxNode>,
    },
    /// Any node not pattern-matched; `kind` is the grammar's node kind
    Other { span: Span, kind: String },
    /// Error or missing node from the fault-tolerant parser
    Unsupported { span: Span, kind: String },
}

impl SyntaxNode {
    pub fn span(&self) -> Span {
        match self {
            SyntaxNode::Conditional { span, .. }
            | SyntaxNode::If { span, .. }
            | SyntaxNode::Block { span, .. }
            | SyntaxNode::Return { span, .. }
            | SyntaxNode::ExpressionStatement { span, .. }
            | SyntaxNode::Parenthesized { span, .. }
            | SyntaxNode::Other { span, .. }
            | SyntaxNode::Unsupported { span, .. } => *span,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            SyntaxNode::Conditional { .. } => NodeKind::Conditional,
            SyntaxNode::If { .. } => NodeKind::If,
            SyntaxNode::Block { .. } => NodeKind::Block,
            SyntaxNode::Return { .. } => NodeKind::Return,
            SyntaxNode::ExpressionStatement { .. } => NodeKind::ExpressionStatement,
            SyntaxNode::Parenthesized { .. } => NodeKind::Parenthesized,
            SyntaxNode::Other { .. } => NodeKind::Other,
            SyntaxNode::Unsupported { .. } => NodeKind::Unsupported,
        }
    }

    /// Verbatim source text of this node
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span().text(source)
    }

    /// The first `Unsupported` node in this subtree, in source order
    pub fn find_unsupported(&self) -> Option<&SyntaxNode> {
        match self {
            SyntaxNode::Unsupported { .. } => Some(self),
            SyntaxNode::Other { .. } => None,
            SyntaxNode::Conditional {
                condition,
                when_true,
                when_false,
                ..
            } => condition
                .find_unsupported()
                .or_else(|| when_true.find_unsupported())
                .or_else(|| when_false.find_unsupported()),
            SyntaxNode::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => condition
                .find_unsupported()
                .or_else(|| then_branch.find_unsupported())
                .or_else(|| else_branch.as_ref().and_then(|node| node.find_unsupported())),
            SyntaxNode::Block { statements, .. } => {
                statements.iter().find_map(SyntaxNode::find_unsupported)
            }
            SyntaxNode::Return { expression, .. } => {
                expression.as_ref().and_then(|node| node.find_unsupported())
            }
            SyntaxNode::ExpressionStatement { expression, .. } => expression.find_unsupported(),
            SyntaxNode::Parenthesized { inner, .. } => inner.find_unsupported(),
        }
    }
}

/// A parsed fragment: its source text and top-level items in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    pub source: String,
    pub items: Vec<SyntaxNode>,
}

impl SyntaxTree {
    pub fn new(source: impl Into<String>, items: Vec<SyntaxNode>) -> Self {
        Self {
            source: source.into(),
            items,
        }
    }

    pub fn text(&self, node: &SyntaxNode) -> &str {
        node.text(&self.source)
    }
}
