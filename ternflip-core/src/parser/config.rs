//! Configuration for lowering grammar nodes into the syntax model

use crate::syntax::NodeKind;

/// Maps concrete grammar node kinds onto [`NodeKind`]s
#[derive(Debug, Clone)]
pub struct LoweringConfig {
    /// Map TreeSitter node kinds to structured node kinds
    /// e.g., ("ternary_expression", NodeKind::Conditional)
    pub element_mappings: &'static [(&'static str, NodeKind)],

    /// Field names of a conditional expression: (condition, when_true, when_false)
    pub conditional_fields: (&'static str, &'static str, &'static str),

    /// Field names of an if statement: (condition, then, else)
    pub if_fields: (&'static str, &'static str, &'static str),

    /// Node kinds that are never statements or items (e.g. comments)
    pub skip_kinds: &'static [&'static str],
}

impl LoweringConfig {
    /// Look up the structured kind for a TreeSitter node kind
    pub fn map_kind(&self, kind: &str) -> NodeKind {
        self.element_mappings
            .iter()
            .find(|(from, _)| *from == kind)
            .map(|(_, to)| *to)
            .unwrap_or(NodeKind::Other)
    }

    /// Check if a node kind should be skipped
    pub fn should_skip(&self, kind: &str) -> bool {
        self.skip_kinds.contains(&kind)
    }
}

/// The TSX and JavaScript grammars share these node kinds
pub static TSX_LOWERING: LoweringConfig = LoweringConfig {
    element_mappings: &[
        ("ternary_expression", NodeKind::Conditional),
        ("if_statement", NodeKind::If),
        ("statement_block", NodeKind::Block),
        ("return_statement", NodeKind::Return),
        ("expression_statement", NodeKind::ExpressionStatement),
        ("parenthesized_expression", NodeKind::Parenthesized),
        ("ERROR", NodeKind::Unsupported),
    ],
    conditional_fields: ("condition", "consequence", "alternative"),
    if_fields: ("condition", "consequence", "alternative"),
    skip_kinds: &["comment", "html_comment"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_kind() {
        assert_eq!(TSX_LOWERING.map_kind("ternary_expression"), NodeKind::Conditional);
        assert_eq!(TSX_LOWERING.map_kind("statement_block"), NodeKind::Block);
        assert_eq!(TSX_LOWERING.map_kind("call_expression"), NodeKind::Other);
        assert!(TSX_LOWERING.should_skip("comment"));
        assert!(!TSX_LOWERING.should_skip("identifier"));
    }
}
