//! Options shared by the rewrites

use serde::{Deserialize, Serialize};

use crate::language_info::GrammarProfile;

/// Options for parsing and synthesizing a rewrite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformOptions {
    /// Grammar the selected fragment is parsed under (default: tsx)
    pub profile: GrammarProfile,
    /// Indentation added per nesting level of a synthesized block (default: 2 spaces)
    pub indent_unit: String,
}

impl TransformOptions {
    pub fn new() -> Self {
        TransformOptions {
            profile: GrammarProfile::Tsx,
            indent_unit: "  ".to_string(),
        }
    }

    pub fn with_profile(mut self, profile: GrammarProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_indent_unit(mut self, indent_unit: impl Into<String>) -> Self {
        self.indent_unit = indent_unit.into();
        self
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TransformOptions::default();
        assert_eq!(options.profile, GrammarProfile::Tsx);
        assert_eq!(options.indent_unit, "  ");
    }

    #[test]
    fn test_deserialize_partial() {
        let options: TransformOptions = serde_json::from_str(r#"{"profile":"jsx"}"#).unwrap();
        assert_eq!(options, TransformOptions::new().with_profile(GrammarProfile::Jsx));

        let options: TransformOptions = serde_json::from_str(r#"{"indentUnit":"\t"}"#).unwrap();
        assert_eq!(options.indent_unit, "\t");
        assert_eq!(options.profile, GrammarProfile::Tsx);
    }
}
