//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

/// Document construction and selection rules.
///
/// ```
/// use ansiscribe_document::{Document, DocumentConfig, StyleOperation};
///
/// let config = DocumentConfig::editor();
/// let document = Document::new_with("a   b", &config);
/// assert!(document.apply_style_with(1..4, StyleOperation::SetBold, &config).is_err());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DocumentConfig {
    /// Convert `\r\n` and lone `\r` to `\n` when building a document
    pub normalize_line_endings: bool,
    /// Reject selections consisting only of whitespace
    pub reject_blank_selection: bool,
}

impl DocumentConfig {
    /// Keep text exactly as given and accept every well formed range.
    pub fn strict() -> DocumentConfig {
        DocumentConfig {
            normalize_line_endings: false,
            reject_blank_selection: false,
        }
    }

    /// Rules of the interactive editing surface, which folds line endings to `\n`
    /// and ignores whitespace-only selections.
    pub fn editor() -> DocumentConfig {
        DocumentConfig {
            normalize_line_endings: true,
            reject_blank_selection: true,
        }
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(DocumentConfig::default(), DocumentConfig::strict());
        assert!(!DocumentConfig::default().reject_blank_selection);
        assert!(!DocumentConfig::default().normalize_line_endings);
    }

    #[test]
    fn test_editor_rejects_blank() {
        let config = DocumentConfig::editor();
        assert!(config.reject_blank_selection);
        assert!(config.normalize_line_endings);
    }
}
