//! WASM bindings for ternflip-core
//!
//! The host parses the selected fragment with web-tree-sitter, sends the
//! serialized tree along with the document text and selection, and gets
//! the edits back as JSON.

use wasm_bindgen::prelude::*;

use crate::actions::{code_actions as collect_code_actions, Refactoring};
use crate::document::TextDocument;
use crate::parser::parse_serialized;
use crate::rewrite::{apply_with_tree, Fragment};
use crate::wasm_ast::{FragmentResponse, RewriteRequest, RewriteResponse, SelectionRequest};

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Rewrite a selected ternary as an if/else statement
///
/// # Arguments
/// * `request_json` - JSON string containing a RewriteRequest:
///   - `text`: Full document text
///   - `range`: The selection, as zero-based line / UTF-16 character
///   - `ast`: Serialized web-tree-sitter parse of the selected text
///   - `options`: Optional `{ profile, indentUnit }`
///
/// # Returns
/// JSON string containing a RewriteResponse; `edits` is empty when the
/// selection holds no ternary
#[wasm_bindgen(js_name = formIfStatement)]
pub fn form_if_statement(request_json: &str) -> Result<String, JsValue> {
    rewrite(request_json, Refactoring::FormIfStatement)
}

/// Rewrite a selected if/else statement as a ternary
///
/// Takes the same request as `formIfStatement`.
#[wasm_bindgen(js_name = formTernaryOperator)]
pub fn form_ternary_operator(request_json: &str) -> Result<String, JsValue> {
    rewrite(request_json, Refactoring::FormTernaryOperator)
}

fn rewrite(request_json: &str, refactoring: Refactoring) -> Result<String, JsValue> {
    let request: RewriteRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse request: {}", e)))?;

    let document = TextDocument::new(request.text);
    let fragment = Fragment::from_selection(&document, request.range);
    let tree = parse_serialized(fragment.text, &request.ast).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let edits = apply_with_tree(&document, request.range, &tree, refactoring, &request.options);
    let response = RewriteResponse {
        edits: edits.into_edits(),
    };

    serde_json::to_string(&response)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize response: {}", e)))
}

/// Quick fixes offered for a selection
///
/// Takes a SelectionRequest (`{ text, range }`) and returns a JSON array of
/// code actions. Never parses.
#[wasm_bindgen(js_name = codeActions)]
pub fn code_actions(request_json: &str) -> Result<String, JsValue> {
    let request: SelectionRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse request: {}", e)))?;

    let document = TextDocument::new(request.text);
    let actions = collect_code_actions(&document, request.range);

    serde_json::to_string(&actions)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize response: {}", e)))
}

/// The selected text the host should parse before calling a rewrite
#[wasm_bindgen(js_name = selectionFragment)]
pub fn selection_fragment(request_json: &str) -> Result<String, JsValue> {
    let request: SelectionRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse request: {}", e)))?;

    let document = TextDocument::new(request.text);
    let fragment = Fragment::from_selection(&document, request.range);
    let response = FragmentResponse {
        fragment: fragment.text.to_string(),
        start_offset: fragment.start_offset,
        indentation: fragment.indentation,
    };

    serde_json::to_string(&response)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize response: {}", e)))
}

/// Get the grammar profiles and the grammar file each needs
///
/// Returns an array of profile objects with: profile, languageIds, extensions, grammarFile
#[wasm_bindgen(js_name = getGrammarProfiles)]
pub fn get_grammar_profiles() -> String {
    let profiles = crate::language_info::GRAMMAR_PROFILES;
    serde_json::to_string(&profiles).unwrap_or_else(|_| "[]".to_string())
}
