//! Fragment parsing
//!
//! Parses a standalone text fragment with TreeSitter under a JSX-capable
//! grammar profile and lowers the result into a [`SyntaxTree`]. TreeSitter
//! is fault tolerant: malformed input still yields a tree, with the broken
//! parts lowered to `SyntaxNode::Unsupported`.

pub mod config;
pub mod lower;

pub use config::{LoweringConfig, TSX_LOWERING};
pub use lower::{lower_node, lower_program, SourceNode};

use thiserror::Error;

use crate::language_info::GrammarProfile;
use crate::syntax::SyntaxTree;
use crate::wasm_ast::SerializedNode;

/// Errors that can occur during parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unsupported grammar profile: {0}")]
    UnsupportedProfile(String),
    #[error("Failed to parse: {0}")]
    Parse(String),
    #[error("TreeSitter error: {0}")]
    TreeSitter(String),
}

/// Get TreeSitter language for a grammar profile
#[cfg(feature = "native")]
fn get_tree_sitter_language(profile: GrammarProfile) -> tree_sitter::Language {
    match profile {
        GrammarProfile::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        GrammarProfile::Jsx => tree_sitter_javascript::LANGUAGE.into(),
    }
}

/// Parse a fragment of source text into a syntax tree
#[cfg(feature = "native")]
pub fn parse_fragment(source: &str, profile: GrammarProfile) -> Result<SyntaxTree, ParseError> {
    let language = get_tree_sitter_language(profile);

    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| ParseError::TreeSitter(e.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ParseError::Parse("Failed to parse fragment".to_string()))?;

    let root = tree.root_node();
    if root.has_error() {
        tracing::trace!(target: "ternflip", %profile, "fragment parsed with errors");
    }

    Ok(SyntaxTree::new(source, lower_program(root, &TSX_LOWERING)))
}

/// Without a native parser, fragments must arrive pre-parsed
#[cfg(not(feature = "native"))]
pub fn parse_fragment(_source: &str, profile: GrammarProfile) -> Result<SyntaxTree, ParseError> {
    Err(ParseError::UnsupportedProfile(profile.to_string()))
}

/// Build a syntax tree from an AST serialized by web-tree-sitter
///
/// `ast` must be the root (`program`) node of a parse of `source`.
pub fn parse_serialized(source: &str, ast: &SerializedNode) -> Result<SyntaxTree, ParseError> {
    if ast.end_byte > source.len() || ast.start_byte > ast.end_byte {
        return Err(ParseError::Parse(format!(
            "AST span {}..{} does not fit a {} byte fragment",
            ast.start_byte,
            ast.end_byte,
            source.len()
        )));
    }
    Ok(SyntaxTree::new(source, lower_program(ast, &TSX_LOWERING)))
}

#[cfg(feature = "native")]
impl<'tree> SourceNode for tree_sitter::Node<'tree> {
    fn kind(&self) -> &str {
        tree_sitter::Node::kind(self)
    }

    fn is_named(&self) -> bool {
        tree_sitter::Node::is_named(self)
    }

    fn is_missing(&self) -> bool {
        tree_sitter::Node::is_missing(self)
    }

    fn has_error(&self) -> bool {
        tree_sitter::Node::has_error(self)
    }

    fn byte_range(&self) -> std::ops::Range<usize> {
        tree_sitter::Node::byte_range(self)
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        tree_sitter::Node::children(self, &mut cursor).collect()
    }

    fn child_by_field_name(&self, field: &str) -> Option<Self> {
        tree_sitter::Node::child_by_field_name(self, field)
    }

    fn is_error(&self) -> bool {
        tree_sitter::Node::is_error(self)
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::syntax::{NodeKind, SyntaxNode};

    fn parse(source: &str) -> SyntaxTree {
        parse_fragment(source, GrammarProfile::Tsx).unwrap()
    }

    #[test]
    fn test_parse_ternary_statement() {
        let tree = parse("a > 1 ? 'x' : \"y\"");
        assert_eq!(tree.items.len(), 1);

        let SyntaxNode::ExpressionStatement { expression, .. } = &tree.items[0] else {
            panic!("expected expression statement, got {:?}", tree.items[0]);
        };
        let SyntaxNode::Conditional { condition, when_true, when_false, .. } = expression.as_ref() else {
            panic!("expected conditional, got {:?}", expression);
        };
        assert_eq!(tree.text(condition), "a > 1");
        assert_eq!(tree.text(when_true), "'x'");
        assert_eq!(tree.text(when_false), "\"y\"");
    }

    #[test]
    fn test_parse_if_strips_statement_parens() {
        let tree = parse("if ((a)) { return b } else return c;");
        let SyntaxNode::If { condition, then_branch, else_branch, .. } = &tree.items[0] else {
            panic!("expected if, got {:?}", tree.items[0]);
        };
        assert_eq!(tree.text(condition), "(a)");
        assert_eq!(condition.kind(), NodeKind::Parenthesized);
        assert_eq!(then_branch.kind(), NodeKind::Block);
        let else_branch = else_branch.as_ref().unwrap();
        assert_eq!(else_branch.kind(), NodeKind::Return);
        assert_eq!(tree.text(else_branch), "return c;");
    }

    #[test]
    fn test_parse_if_without_else() {
        let tree = parse("if (ok) { return 1 }");
        let SyntaxNode::If { else_branch, .. } = &tree.items[0] else {
            panic!("expected if");
        };
        assert!(else_branch.is_none());
    }

    #[test]
    fn test_comments_are_not_statements() {
        let tree = parse("// leading\n{ /* note */ return x }");
        assert_eq!(tree.items.len(), 1);
        let SyntaxNode::Block { statements, .. } = &tree.items[0] else {
            panic!("expected block, got {:?}", tree.items[0]);
        };
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn test_parse_jsx_branches() {
        let tree = parse_fragment("open ? <Modal /> : <span>closed</span>", GrammarProfile::Jsx).unwrap();
        let SyntaxNode::ExpressionStatement { expression, .. } = &tree.items[0] else {
            panic!("expected expression statement");
        };
        let SyntaxNode::Conditional { when_true, when_false, .. } = expression.as_ref() else {
            panic!("expected conditional");
        };
        assert_eq!(tree.text(when_true), "<Modal />");
        assert_eq!(tree.text(when_false), "<span>closed</span>");
    }

    #[test]
    fn test_malformed_fragment_does_not_fail() {
        let tree = parse_fragment("if (a { return", GrammarProfile::Tsx).unwrap();
        assert!(!tree.items.is_empty());
    }
}
