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

use crate::config::AnsiConfig;
use crate::consts::{FENCE_CLOSE, FENCE_OPEN};
use crate::result::AnsiCodecResult;
use crate::style::AnsiSelectGraphicRendition;
use ansiscribe_document::Document;
use bytes::BufMut;
use tracing::trace;

/// Serializes a [`Document`] as a Discord ANSI code block.
///
/// This is shorthand for `AnsiSerializer::default().serialize(document)`.
///
/// # Examples
///
/// ```rust
/// use ansiscribe_ansicodec::serialize;
/// use ansiscribe_document::{Document, Foreground, StyleOperation};
///
/// let document = Document::new("Hi")
///     .apply_style(0..1, StyleOperation::SetForeground(Foreground::Red))
///     .unwrap();
/// assert_eq!(
///     serialize(&document),
///     "```ansi\n\x1b[0m\x1b[31mH\x1b[0mi\n```"
/// );
/// ```
pub fn serialize(document: &Document) -> String {
    AnsiSerializer::default().serialize(document)
}

/// Turns styled documents into escape coded text.
///
/// Every segment is written as a full reset (`\x1b[0m`), followed by one SGR
/// sequence for its set axes (omitted for a default style), followed by the
/// segment text. Resetting before each segment means a segment never depends
/// on the state left by the previous one, and Discord treats repeated resets
/// as idempotent. The body is then wrapped in a ```` ```ansi ```` fence unless
/// [`AnsiConfig::fenced`] is off.
///
/// Output is a pure function of the document and the config: equal documents
/// always produce byte-identical output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnsiSerializer {
    config: AnsiConfig,
}

impl AnsiSerializer {
    /// Creates a serializer with the given configuration.
    pub fn new(config: AnsiConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &AnsiConfig {
        &self.config
    }

    /// Length in bytes of the serialized output.
    pub fn len(&self, document: &Document) -> usize {
        let fences = if self.config.fenced {
            FENCE_OPEN.len() + FENCE_CLOSE.len()
        } else {
            0
        };
        let body: usize = document
            .segments()
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                let reset = if self.emits_reset(index) {
                    AnsiSelectGraphicRendition::reset().len()
                } else {
                    0
                };
                reset
                    + AnsiSelectGraphicRendition::from_style(&segment.style()).len()
                    + segment.text().len()
            })
            .sum();
        fences + body
    }

    /// Serializes `document` into a new string.
    pub fn serialize(&self, document: &Document) -> String {
        let output = Rendered {
            serializer: self,
            document,
        }
        .to_string();
        trace!(
            segments = document.segment_count(),
            bytes = output.len(),
            "serialized document"
        );
        output
    }

    /// Writes the serialized document to `writer`.
    pub fn write_str<W: std::fmt::Write>(
        &self,
        document: &Document,
        writer: &mut W,
    ) -> std::fmt::Result {
        if self.config.fenced {
            writer.write_str(FENCE_OPEN)?;
        }
        for (index, segment) in document.segments().iter().enumerate() {
            if self.emits_reset(index) {
                AnsiSelectGraphicRendition::reset().write_str(writer)?;
            }
            AnsiSelectGraphicRendition::from_style(&segment.style()).write_str(writer)?;
            writer.write_str(segment.text())?;
        }
        if self.config.fenced {
            writer.write_str(FENCE_CLOSE)?;
        }
        Ok(())
    }

    /// Appends the serialized document to a byte buffer, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiCodecError::Format`](crate::AnsiCodecError::Format) if
    /// formatting fails.
    pub fn encode<T: BufMut>(&self, document: &Document, dst: &mut T) -> AnsiCodecResult<usize> {
        let mut output = String::with_capacity(self.len(document));
        self.write_str(document, &mut output)?;
        dst.put_slice(output.as_bytes());
        Ok(output.len())
    }

    fn emits_reset(&self, index: usize) -> bool {
        index > 0 || self.config.leading_reset
    }
}

/// A document paired with the serializer that renders it.
struct Rendered<'a> {
    serializer: &'a AnsiSerializer,
    document: &'a Document,
}

impl std::fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.serializer.write_str(self.document, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ansiscribe_document::{Background, Foreground, StyleOperation};
    use tracing_test::traced_test;

    fn hi_with_red_h() -> Document {
        Document::new("Hi")
            .apply_style(0..1, StyleOperation::SetForeground(Foreground::Red))
            .unwrap()
    }

    #[test]
    fn test_serialize_empty_document() {
        assert_eq!(serialize(&Document::empty()), "```ansi\n\n```");
    }

    #[test]
    fn test_serialize_plain_document() {
        assert_eq!(serialize(&Document::new("Hi")), "```ansi\n\x1b[0mHi\n```");
    }

    #[test]
    fn test_serialize_first_character_red() {
        assert_eq!(
            serialize(&hi_with_red_h()),
            "```ansi\n\x1b[0m\x1b[31mH\x1b[0mi\n```"
        );
    }

    #[test]
    fn test_serialize_combined_axes() {
        let document = Document::new("Hi")
            .apply_style(0..2, StyleOperation::SetBold)
            .unwrap()
            .apply_style(0..1, StyleOperation::SetForeground(Foreground::Blue))
            .unwrap()
            .apply_style(1..2, StyleOperation::SetBackground(Background::Orange))
            .unwrap();
        assert_eq!(
            serialize(&document),
            "```ansi\n\x1b[0m\x1b[1;34mH\x1b[0m\x1b[1;41mi\n```"
        );
    }

    #[test]
    fn test_serialize_preserves_newlines() {
        let document = Document::new("one\ntwo")
            .apply_style(4..7, StyleOperation::SetUnderline(true))
            .unwrap();
        assert_eq!(
            serialize(&document),
            "```ansi\n\x1b[0mone\n\x1b[0m\x1b[4mtwo\n```"
        );
    }

    #[test]
    fn test_serialize_compact() {
        let serializer = AnsiSerializer::new(AnsiConfig::compact());
        assert_eq!(
            serializer.serialize(&hi_with_red_h()),
            "```ansi\n\x1b[31mH\x1b[0mi\n```"
        );
        assert_eq!(
            serializer.serialize(&Document::new("Hi")),
            "```ansi\nHi\n```"
        );
    }

    #[test]
    fn test_serialize_body_only() {
        let serializer = AnsiSerializer::new(AnsiConfig::body_only());
        assert_eq!(
            serializer.serialize(&hi_with_red_h()),
            "\x1b[0m\x1b[31mH\x1b[0mi"
        );
        assert_eq!(serializer.serialize(&Document::empty()), "");
    }

    #[test]
    fn test_len_matches_output() {
        let document = Document::sample()
            .apply_style(0..7, StyleOperation::SetBold)
            .unwrap();
        for config in [
            AnsiConfig::discord(),
            AnsiConfig::compact(),
            AnsiConfig::body_only(),
        ] {
            let serializer = AnsiSerializer::new(config);
            assert_eq!(serializer.len(&document), serializer.serialize(&document).len());
        }
    }

    #[test]
    fn test_len_counts_bytes() {
        let document = Document::new("héllo");
        let serializer = AnsiSerializer::default();
        assert_eq!(serializer.len(&document), serializer.serialize(&document).len());
    }

    #[test]
    fn test_encode_into_buffer() {
        let document = hi_with_red_h();
        let mut buffer = Vec::new();
        let written = AnsiSerializer::default()
            .encode(&document, &mut buffer)
            .unwrap();
        assert_eq!(written, buffer.len());
        assert_eq!(buffer, serialize(&document).into_bytes());
    }

    #[test]
    fn test_serialize_reset_document() {
        let document = Document::sample().reset();
        assert_eq!(
            serialize(&document),
            format!("```ansi\n\x1b[0m{}\n```", document.plain_text())
        );
    }

    #[test]
    fn test_segments_start_with_reset_sequence() {
        let reset = AnsiSelectGraphicRendition::reset().to_string();
        let serializer = AnsiSerializer::new(AnsiConfig::body_only());
        let output = serializer.serialize(&hi_with_red_h());
        assert_eq!(output.matches(reset.as_str()).count(), 2);
        assert!(output.starts_with(&reset));
        assert_eq!(serializer.len(&hi_with_red_h()), output.len());
    }

    #[test]
    fn test_serialize_matches_write_str() {
        let serializer = AnsiSerializer::default();
        let document = Document::sample();
        let mut written = String::new();
        serializer.write_str(&document, &mut written).unwrap();
        assert_eq!(serializer.serialize(&document), written);
    }

    #[test]
    #[traced_test]
    fn test_serialize_is_logged() {
        let _ = serialize(&Document::new("Hi"));
        assert!(logs_contain("serialized document"));
    }
}
