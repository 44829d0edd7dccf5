//! Refactorings offered to the editor host
//!
//! Availability is a cheap textual check on the selection; it never parses.
//! The parse in [`crate::rewrite`] is what decides whether an edit is made,
//! so a false positive here just yields an empty edit batch.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::document::{Document, Range};
use crate::edit::EditBatch;
use crate::options::TransformOptions;
use crate::rewrite;
use crate::syntax::NodeKind;

/// The two rewrite directions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Refactoring {
    /// Ternary expression to if/else statement
    FormIfStatement,
    /// If/else statement to ternary expression
    FormTernaryOperator,
}

impl Refactoring {
    /// Command identifier the host registers
    pub fn id(&self) -> &'static str {
        match self {
            Refactoring::FormIfStatement => "ternflip.formIfStatement",
            Refactoring::FormTernaryOperator => "ternflip.formTernaryOperator",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Refactoring::FormIfStatement => "Form if statement",
            Refactoring::FormTernaryOperator => "Form ternary operator",
        }
    }

    /// Node kind a top-level item must normalize to
    pub fn expected_kind(&self) -> NodeKind {
        match self {
            Refactoring::FormIfStatement => NodeKind::Conditional,
            Refactoring::FormTernaryOperator => NodeKind::If,
        }
    }

    pub fn is_available(&self, selected: &str) -> bool {
        match self {
            Refactoring::FormIfStatement => looks_like_ternary(selected),
            Refactoring::FormTernaryOperator => looks_like_if_else(selected),
        }
    }

    pub fn apply(&self, document: &dyn Document, range: Range, options: &TransformOptions) -> EditBatch {
        rewrite::apply(document, range, *self, options)
    }

    /// The registration a host needs to wire this refactoring up
    pub fn registration(&self) -> RegisteredAction {
        let transform: TransformFn = match self {
            Refactoring::FormIfStatement => rewrite::form_if_statement,
            Refactoring::FormTernaryOperator => rewrite::form_ternary_operator,
        };
        let is_available: AvailabilityFn = match self {
            Refactoring::FormIfStatement => looks_like_ternary,
            Refactoring::FormTernaryOperator => looks_like_if_else,
        };
        RegisteredAction {
            refactoring: *self,
            id: self.id(),
            title: self.title(),
            is_available,
            transform,
        }
    }
}

pub fn looks_like_ternary(selected: &str) -> bool {
    selected.contains('?') && selected.contains(':')
}

pub fn looks_like_if_else(selected: &str) -> bool {
    selected.contains("if") && selected.contains("else")
}

/// LSP-style code action kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeActionKind {
    #[serde(rename = "quickfix")]
    QuickFix,
}

/// Command a code action runs when picked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub id: String,
    pub title: String,
    /// Selection the command rewrites
    pub range: Range,
}

/// A quick fix offered for a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeAction {
    pub title: String,
    pub kind: CodeActionKind,
    pub command: Command,
}

impl CodeAction {
    pub fn new(refactoring: Refactoring, range: Range) -> Self {
        CodeAction {
            title: refactoring.title().to_string(),
            kind: CodeActionKind::QuickFix,
            command: Command {
                id: refactoring.id().to_string(),
                title: refactoring.title().to_string(),
                range,
            },
        }
    }
}

/// Quick fixes available for the selected `range` of `document`
pub fn code_actions(document: &dyn Document, range: Range) -> Vec<CodeAction> {
    let selected = document.text_in(range);
    Refactoring::iter()
        .filter(|refactoring| refactoring.is_available(selected))
        .map(|refactoring| CodeAction::new(refactoring, range))
        .collect()
}

pub type AvailabilityFn = fn(&str) -> bool;
pub type TransformFn = fn(&dyn Document, Range, &TransformOptions) -> EditBatch;

/// One refactoring as handed to a host registry
#[derive(Clone, Copy)]
pub struct RegisteredAction {
    pub refactoring: Refactoring,
    pub id: &'static str,
    pub title: &'static str,
    pub is_available: AvailabilityFn,
    pub transform: TransformFn,
}

/// Host-side sink for refactoring registrations
pub trait ActionRegistry {
    fn register(&mut self, action: RegisteredAction);
}

impl ActionRegistry for Vec<RegisteredAction> {
    fn register(&mut self, action: RegisteredAction) {
        self.push(action);
    }
}

/// Register every refactoring with the host
pub fn activate(registry: &mut impl ActionRegistry) {
    for refactoring in Refactoring::iter() {
        tracing::trace!(target: "ternflip", id = refactoring.id(), "registering refactoring");
        registry.register(refactoring.registration());
    }
}
