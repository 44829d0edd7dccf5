//! Serializable AST and request types for WASM interop
//!
//! A host that runs web-tree-sitter parses the fragment on its side and
//! sends the tree as JSON. The types here mirror web-tree-sitter's
//! `SyntaxNode` closely enough to be lowered by the same code as a native
//! TreeSitter tree.

use serde::{Deserialize, Serialize};

use crate::document::Range;
use crate::edit::TextEdit;
use crate::options::TransformOptions;
use crate::parser::SourceNode;

/// A serialized TreeSitter syntax node
///
/// Byte offsets are UTF-8 offsets into the fragment text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedNode {
    /// The node type/kind (e.g., "ternary_expression", "identifier")
    pub kind: String,

    /// Whether this is a named node (vs anonymous like punctuation)
    pub is_named: bool,

    /// Whether the parser inserted this node during error recovery
    #[serde(default)]
    pub is_missing: bool,

    /// Start position - row (0-indexed)
    #[serde(default)]
    pub start_row: usize,

    /// Start position - column (0-indexed)
    #[serde(default)]
    pub start_col: usize,

    /// End position - row (0-indexed)
    #[serde(default)]
    pub end_row: usize,

    /// End position - column (0-indexed)
    #[serde(default)]
    pub end_col: usize,

    /// Start byte offset in source
    pub start_byte: usize,

    /// End byte offset in source
    pub end_byte: usize,

    /// Field name if this node is a field child (e.g., "condition")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,

    /// Child nodes (both named and anonymous)
    #[serde(default)]
    pub children: Vec<SerializedNode>,
}

impl SerializedNode {
    /// Check if this is a leaf node (no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Get text content from source
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start_byte..self.end_byte).unwrap_or("")
    }
}

impl<'a> SourceNode for &'a SerializedNode {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn is_named(&self) -> bool {
        self.is_named
    }

    fn is_missing(&self) -> bool {
        self.is_missing
    }

    fn has_error(&self) -> bool {
        SourceNode::is_error(self)
            || self.is_missing
            || self.children.iter().any(|child| child.has_error())
    }

    fn byte_range(&self) -> std::ops::Range<usize> {
        self.start_byte..self.end_byte
    }

    fn children(&self) -> Vec<Self> {
        let node: &'a SerializedNode = *self;
        node.children.iter().collect()
    }

    fn child_by_field_name(&self, field: &str) -> Option<Self> {
        let node: &'a SerializedNode = *self;
        node.children
            .iter()
            .find(|child| child.field_name.as_deref() == Some(field))
    }
}

/// Request carrying a document and a selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    /// Full document text
    pub text: String,

    /// The selection
    pub range: Range,
}

/// The selection's fragment, for the host to parse
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentResponse {
    pub fragment: String,
    pub start_offset: usize,
    pub indentation: u32,
}

/// Request to rewrite a selection using a host-parsed fragment AST
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteRequest {
    /// Full document text
    pub text: String,

    /// The selection
    pub range: Range,

    /// Root of the web-tree-sitter parse of the selected fragment
    pub ast: SerializedNode,

    #[serde(default)]
    pub options: TransformOptions,
}

/// Edits to apply; empty when there is nothing to rewrite
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteResponse {
    pub edits: Vec<TextEdit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_node() {
        let json = r#"{
            "kind": "identifier",
            "isNamed": true,
            "startRow": 0,
            "startCol": 0,
            "endRow": 0,
            "endCol": 3,
            "startByte": 0,
            "endByte": 3,
            "children": []
        }"#;

        let node: SerializedNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, "identifier");
        assert!(node.is_named);
        assert!(!node.is_missing);
        assert!(node.is_leaf());
    }

    #[test]
    fn test_field_lookup_and_errors() {
        let json = r#"{
            "kind": "ternary_expression",
            "isNamed": true,
            "startByte": 0,
            "endByte": 5,
            "children": [
                { "kind": "identifier", "isNamed": true, "startByte": 0, "endByte": 1, "fieldName": "condition" },
                { "kind": "?", "isNamed": false, "startByte": 2, "endByte": 3 },
                { "kind": "identifier", "isNamed": true, "isMissing": true, "startByte": 4, "endByte": 4, "fieldName": "consequence" }
            ]
        }"#;

        let node: SerializedNode = serde_json::from_str(json).unwrap();
        let root = &node;
        assert_eq!(root.child_by_field_name("condition").unwrap().text("a ? b"), "a");
        assert!(root.child_by_field_name("alternative").is_none());
        assert!(root.has_error());
        assert!(!root.child_by_field_name("condition").unwrap().has_error());
    }
}
