//! Grammar profile metadata
//!
//! Centralized grammar definitions shared between the native parser and
//! the WASM host binding.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The grammar a fragment is parsed under. Both profiles accept JSX.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum GrammarProfile {
    /// TypeScript with JSX (`.tsx`)
    #[default]
    Tsx,
    /// JavaScript with JSX (`.js`, `.jsx`)
    Jsx,
}

/// Information about a grammar profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    pub profile: GrammarProfile,
    /// Editor language identifiers this profile serves
    pub language_ids: &'static [&'static str],
    /// File extensions (without dots)
    pub extensions: &'static [&'static str],
    /// Grammar file name for web-tree-sitter
    pub grammar_file: &'static str,
}

pub static GRAMMAR_PROFILES: &[ProfileInfo] = &[
    ProfileInfo {
        profile: GrammarProfile::Tsx,
        language_ids: &["typescriptreact", "typescript"],
        extensions: &["tsx", "ts", "mts", "cts"],
        grammar_file: "tree-sitter-tsx.wasm",
    },
    ProfileInfo {
        profile: GrammarProfile::Jsx,
        language_ids: &["javascriptreact", "javascript"],
        extensions: &["jsx", "js", "mjs", "cjs"],
        grammar_file: "tree-sitter-javascript.wasm",
    },
];

/// Get info for a profile
pub fn get_profile_info(profile: GrammarProfile) -> &'static ProfileInfo {
    GRAMMAR_PROFILES
        .iter()
        .find(|info| info.profile == profile)
        .unwrap_or(&GRAMMAR_PROFILES[0])
}

/// Pick a profile from an editor language identifier
pub fn profile_for_language_id(language_id: &str) -> Option<GrammarProfile> {
    GRAMMAR_PROFILES
        .iter()
        .find(|info| info.language_ids.contains(&language_id))
        .map(|info| info.profile)
}

/// Pick a profile from a file path's extension
pub fn detect_profile(path: &str) -> Option<GrammarProfile> {
    let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
    GRAMMAR_PROFILES
        .iter()
        .find(|info| info.extensions.contains(&ext.as_str()))
        .map(|info| info.profile)
}
