//! Stripping of redundant syntactic wrapping
//!
//! Parentheses, single-statement blocks and expression statements don't
//! change which construct a branch holds. [`normalize`] peels them off so
//! the rewrites can match on the construct underneath.

use crate::syntax::SyntaxNode;

/// Strip wrapping until a bare node remains
///
/// Blocks with zero or several statements are returned as they are.
pub fn normalize(node: &SyntaxNode) -> &SyntaxNode {
    match node {
        SyntaxNode::Parenthesized { inner, .. } => normalize(inner),
        SyntaxNode::Block { statements, .. } if statements.len() == 1 => normalize(&statements[0]),
        SyntaxNode::ExpressionStatement { expression, .. } => normalize(expression),
        SyntaxNode::Conditional { .. }
        | SyntaxNode::If { .. }
        | SyntaxNode::Block { .. }
        | SyntaxNode::Return { .. }
        | SyntaxNode::Other { .. }
        | SyntaxNode::Unsupported { .. } => node,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{NodeKind, Span};

    fn leaf(start: usize, end: usize) -> SyntaxNode {
        SyntaxNode::Other {
            span: Span::new(start, end),
            kind: "identifier".to_string(),
        }
    }

    #[test]
    fn test_strips_nested_wrapping() {
        // `{ ((x)); }`
        let node = SyntaxNode::Block {
            span: Span::new(0, 10),
            statements: vec![SyntaxNode::ExpressionStatement {
                span: Span::new(2, 8),
                expression: Box::new(SyntaxNode::Parenthesized {
                    span: Span::new(2, 7),
                    inner: Box::new(SyntaxNode::Parenthesized {
                        span: Span::new(3, 6),
                        inner: Box::new(leaf(4, 5)),
                    }),
                }),
            }],
        };
        assert_eq!(normalize(&node), &leaf(4, 5));
    }

    #[test]
    fn test_keeps_multi_statement_blocks() {
        let empty = SyntaxNode::Block {
            span: Span::new(0, 2),
            statements: vec![],
        };
        assert_eq!(normalize(&empty), &empty);

        let two = SyntaxNode::Block {
            span: Span::new(0, 12),
            statements: vec![leaf(2, 3), leaf(5, 6)],
        };
        assert_eq!(normalize(&two).kind(), NodeKind::Block);
    }

    #[test]
    fn test_does_not_unwrap_return() {
        let node = SyntaxNode::Return {
            span: Span::new(0, 8),
            expression: Some(Box::new(SyntaxNode::Parenthesized {
                span: Span::new(7, 10),
                inner: Box::new(leaf(8, 9)),
            })),
        };
        assert_eq!(normalize(&node), &node);
    }

    #[test]
    fn test_idempotent() {
        let nodes = vec![
            leaf(0, 1),
            SyntaxNode::Parenthesized {
                span: Span::new(0, 3),
                inner: Box::new(leaf(1, 2)),
            },
            SyntaxNode::Block {
                span: Span::new(0, 5),
                statements: vec![SyntaxNode::Block {
                    span: Span::new(1, 4),
                    statements: vec![leaf(2, 3), leaf(3, 4)],
                }],
            },
            SyntaxNode::Unsupported {
                span: Span::new(0, 1),
                kind: "ERROR".to_string(),
            },
        ];
        for node in &nodes {
            let once = normalize(node);
            assert_eq!(normalize(once), once);
        }
    }
}
