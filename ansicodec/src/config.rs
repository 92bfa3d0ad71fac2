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

/// Serializer output settings.
///
/// The default is [`AnsiConfig::discord`], which produces text that can be
/// pasted verbatim into a Discord message.
///
/// ```
/// use ansiscribe_ansicodec::{AnsiConfig, AnsiSerializer};
/// use ansiscribe_document::Document;
///
/// let serializer = AnsiSerializer::new(AnsiConfig::body_only());
/// assert_eq!(serializer.serialize(&Document::new("Hi")), "\x1b[0mHi");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnsiConfig {
    /// Emit `ESC[0m` before the first segment
    pub leading_reset: bool,
    /// Wrap the output in a ```` ```ansi ```` code block
    pub fenced: bool,
}

impl AnsiConfig {
    /// Reset before every segment and wrap in a code block.
    pub fn discord() -> AnsiConfig {
        AnsiConfig {
            leading_reset: true,
            fenced: true,
        }
    }
    /// Skip the reset before the first segment, which starts in the default state anyway.
    pub fn compact() -> AnsiConfig {
        AnsiConfig {
            leading_reset: false,
            fenced: true,
        }
    }
    /// Escape coded body without the code block, for previews.
    pub fn body_only() -> AnsiConfig {
        AnsiConfig {
            leading_reset: true,
            fenced: false,
        }
    }
}

impl Default for AnsiConfig {
    fn default() -> Self {
        Self::discord()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_discord() {
        assert_eq!(AnsiConfig::default(), AnsiConfig::discord());
        assert!(AnsiConfig::default().fenced);
        assert!(AnsiConfig::default().leading_reset);
    }

    #[test]
    fn test_presets() {
        assert!(!AnsiConfig::compact().leading_reset);
        assert!(AnsiConfig::compact().fenced);
        assert!(!AnsiConfig::body_only().fenced);
    }
}
