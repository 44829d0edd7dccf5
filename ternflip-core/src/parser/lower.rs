//! Lowering from a concrete grammar tree into [`SyntaxNode`]s
//!
//! The walk is generic over [`SourceNode`] so the same code lowers a native
//! TreeSitter tree and a serialized tree sent across the WASM boundary.

use std::ops::Range;

use super::config::LoweringConfig;
use crate::syntax::{NodeKind, Span, SyntaxNode};

/// The view of a concrete syntax node the lowering needs
pub trait SourceNode: Copy {
    fn kind(&self) -> &str;
    fn is_named(&self) -> bool;
    fn is_missing(&self) -> bool;
    /// True if this node or anything below it is an error or missing node
    fn has_error(&self) -> bool;
    fn byte_range(&self) -> Range<usize>;
    /// All direct children, named and anonymous, in source order
    fn children(&self) -> Vec<Self>;
    fn child_by_field_name(&self, field: &str) -> Option<Self>;

    fn is_error(&self) -> bool {
        self.kind() == "ERROR"
    }
}

/// Lower the top-level items of a program root
pub fn lower_program<N: SourceNode>(root: N, config: &LoweringConfig) -> Vec<SyntaxNode> {
    // Recovery can fail so badly that the root itself is the error node, and
    // a missing token directly under the root belongs to no item
    if root.is_error() || root.children().iter().any(|child| child.is_missing()) {
        return vec![unsupported(root, Span::from(root.byte_range()))];
    }

    items(root, config)
        .into_iter()
        .map(|child| lower_node(child, config))
        .collect()
}

/// Lower a single node and its relevant descendants
pub fn lower_node<N: SourceNode>(node: N, config: &LoweringConfig) -> SyntaxNode {
    let span = Span::from(node.byte_range());

    if node.is_error() || node.is_missing() {
        return unsupported(node, span);
    }

    let kind = config.map_kind(node.kind());

    // A broken token directly under a structured node means its fields
    // can't be trusted.
    if kind != NodeKind::Other && has_broken_child(node) {
        return unsupported(node, span);
    }

    match kind {
        NodeKind::Conditional => {
            let (condition, when_true, when_false) = config.conditional_fields;
            match (
                node.child_by_field_name(condition),
                node.child_by_field_name(when_true),
                node.child_by_field_name(when_false),
            ) {
                (Some(condition), Some(when_true), Some(when_false)) => SyntaxNode::Conditional {
                    span,
                    condition: Box::new(lower_node(condition, config)),
                    when_true: Box::new(lower_node(when_true, config)),
                    when_false: Box::new(lower_node(when_false, config)),
                },
                _ => unsupported(node, span),
            }
        }
        NodeKind::If => {
            let (condition, then_field, else_field) = config.if_fields;
            let condition = node.child_by_field_name(condition);
            let then_branch = node.child_by_field_name(then_field);
            let (Some(condition), Some(then_branch)) = (condition, then_branch) else {
                return unsupported(node, span);
            };

            let else_branch = match node.child_by_field_name(else_field) {
                Some(clause) if has_broken_child(clause) => return unsupported(node, span),
                // The field holds the `else` clause; its statement is the branch
                Some(clause) => match items(clause, config).first() {
                    Some(statement) => Some(Box::new(lower_node(*statement, config))),
                    None => return unsupported(node, span),
                },
                None => None,
            };

            SyntaxNode::If {
                span,
                condition: Box::new(lower_if_condition(condition, config)),
                then_branch: Box::new(lower_node(then_branch, config)),
                else_branch,
            }
        }
        NodeKind::Block => SyntaxNode::Block {
            span,
            statements: items(node, config)
                .into_iter()
                .map(|child| lower_node(child, config))
                .collect(),
        },
        NodeKind::Return => SyntaxNode::Return {
            span,
            expression: items(node, config)
                .first()
                .map(|expression| Box::new(lower_node(*expression, config))),
        },
        NodeKind::ExpressionStatement => match items(node, config).first() {
            Some(expression) => SyntaxNode::ExpressionStatement {
                span,
                expression: Box::new(lower_node(*expression, config)),
            },
            None => unsupported(node, span),
        },
        NodeKind::Parenthesized => match items(node, config).as_slice() {
            [inner] => SyntaxNode::Parenthesized {
                span,
                inner: Box::new(lower_node(*inner, config)),
            },
            // e.g. `(x: T)` carries a type annotation next to the expression
            _ if node.has_error() => unsupported(node, span),
            _ => other(node, span),
        },
        NodeKind::Unsupported => unsupported(node, span),
        NodeKind::Other => {
            if node.has_error() {
                unsupported(node, span)
            } else {
                other(node, span)
            }
        }
    }
}

/// An `if` condition arrives wrapped in the statement's own parentheses.
/// Only that one layer is removed.
fn lower_if_condition<N: SourceNode>(condition: N, config: &LoweringConfig) -> SyntaxNode {
    if condition.has_error() {
        return unsupported(condition, Span::from(condition.byte_range()));
    }
    if config.map_kind(condition.kind()) == NodeKind::Parenthesized {
        if let [inner] = items(condition, config).as_slice() {
            return lower_node(*inner, config);
        }
    }
    lower_node(condition, config)
}

fn has_broken_child<N: SourceNode>(node: N) -> bool {
    node.children()
        .iter()
        .any(|child| child.is_error() || child.is_missing())
}

/// Named children that take part in the structure (comments skipped)
fn items<N: SourceNode>(node: N, config: &LoweringConfig) -> Vec<N> {
    node.children()
        .into_iter()
        .filter(|child| child.is_named() && !config.should_skip(child.kind()))
        .collect()
}

fn other<N: SourceNode>(node: N, span: Span) -> SyntaxNode {
    SyntaxNode::Other {
        span,
        kind: node.kind().to_string(),
    }
}

fn unsupported<N: SourceNode>(node: N, span: Span) -> SyntaxNode {
    SyntaxNode::Unsupported {
        span,
        kind: node.kind().to_string(),
    }
}
