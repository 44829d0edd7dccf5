//! ternflip-core: ternary <-> if/else selection rewrites
//!
//! This library provides:
//! - TreeSitter-based parsing of selected fragments (TSX and JSX)
//! - Lowering into a small syntax model with verbatim source spans
//! - Synthesis of if/else statements from ternaries and back
//! - A selection-scoped driver producing host text edits
//! - Code-action descriptors and explicit host registration

pub mod syntax;
pub mod parser;
pub mod normalize;
pub mod transform;
pub mod rewrite;
pub mod actions;
pub mod options;
pub mod document;
pub mod edit;
pub mod source_utils;
pub mod language_info;

// Serialized trees from web-tree-sitter - available for both native and WASM
pub mod wasm_ast;

// WASM support
#[cfg(feature = "wasm")]
pub mod wasm;

pub use syntax::{NodeKind, Span, SyntaxNode, SyntaxTree};
pub use parser::{parse_fragment, parse_serialized, ParseError};
pub use normalize::normalize;
pub use transform::{to_if_else, to_ternary, TransformError};
pub use rewrite::{apply, apply_with_tree, try_apply, form_if_statement, form_ternary_operator, Fragment};
pub use actions::{activate, code_actions, ActionRegistry, CodeAction, Refactoring, RegisteredAction};
pub use options::TransformOptions;
pub use document::{Document, Position, Range, TextDocument};
pub use edit::{apply_edits, EditBatch, EditError, TextEdit};
pub use language_info::{GrammarProfile, GRAMMAR_PROFILES};
