//! Parser configuration

use serde::{Deserialize, Serialize};

/// Options controlling how a query string is pre-processed before parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ParserOptions {
    /// Delete every whitespace character, including the ones inside quoted literals
    pub remove_all_whitespaces: bool,
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remove_all_whitespaces(mut self, remove: bool) -> Self {
        self.remove_all_whitespaces = remove;
        self
    }

    /// Read options from a JSON object such as `{"removeAllWhitespaces": true}`.
    /// Missing keys fall back to their defaults; unknown keys are an error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
