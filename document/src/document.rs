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

use crate::config::DocumentConfig;
use crate::operation::StyleOperation;
use crate::result::{DocumentError, DocumentResult, RangeFault};
use crate::segment::Segment;
use crate::style::{Background, Foreground, StyleSet};
use std::ops::Range;
use tracing::{debug, instrument, trace};

/// A short text document made of styled segments.
///
/// `Document` is an ordered list of [`Segment`]s whose texts, concatenated in
/// order, form the document text. Every document upholds three invariants:
///
/// - **Partition**: every character belongs to exactly one segment.
/// - **Maximality**: no two adjacent segments have equal styles.
/// - **Non-emptiness**: no segment has empty text.
///
/// Documents are persistent values. [`apply_style`](Document::apply_style)
/// and [`reset`](Document::reset) return a new document and leave the
/// receiver untouched, so a caller can keep older versions around freely.
///
/// # Offsets
///
/// Ranges are half-open and counted in `char`s over the plain text, the same
/// unit an editing surface uses when it reports a selection.
///
/// # Examples
///
/// ```rust
/// use ansiscribe_document::{Document, Foreground, StyleOperation};
///
/// let document = Document::new("Hi");
/// let styled = document
///     .apply_style(0..1, StyleOperation::SetForeground(Foreground::Red))
///     .unwrap();
///
/// assert_eq!(styled.segment_count(), 2);
/// assert_eq!(styled.plain_text(), "Hi");
/// assert_eq!(document.segment_count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct Document {
    segments: Vec<Segment>,
}

impl Document {
    /// Creates a document holding no text and no segments.
    pub fn empty() -> Document {
        Document {
            segments: Vec::new(),
        }
    }

    /// Creates a single default-style segment document using [`DocumentConfig::default`].
    pub fn new(text: &str) -> Document {
        Self::new_with(text, &DocumentConfig::default())
    }

    /// Creates a single default-style segment document.
    ///
    /// Line endings are folded to `\n` only when the config asks for it, as
    /// [`DocumentConfig::editor`] does for pasted text and the Enter key.
    pub fn new_with(text: &str, config: &DocumentConfig) -> Document {
        let text = if config.normalize_line_endings {
            normalize_line_endings(text)
        } else {
            text.to_string()
        };
        Document {
            segments: Segment::new(text, StyleSet::default()).into_iter().collect(),
        }
    }

    /// Builds a document from segments, merging equal-style neighbours.
    pub fn from_segments<I: IntoIterator<Item = Segment>>(segments: I) -> Document {
        let mut merged = Vec::new();
        for segment in segments {
            push_merged(&mut merged, segment);
        }
        Document { segments: merged }
    }

    /// The welcome text the editor is seeded with.
    pub fn sample() -> Document {
        let plain = StyleSet::default();
        let fg = |color| StyleSet {
            foreground: Some(color),
            ..Default::default()
        };
        let parts = [
            ("Welcome to ", plain),
            ("Ansiscribe", fg(Foreground::Yellow)),
            ("'s ", plain),
            (
                "Discord",
                StyleSet {
                    foreground: Some(Foreground::White),
                    background: Some(Background::Indigo),
                    ..Default::default()
                },
            ),
            (" ", plain),
            ("C", fg(Foreground::Red)),
            ("o", fg(Foreground::Green)),
            ("l", fg(Foreground::Yellow)),
            ("o", fg(Foreground::Blue)),
            ("r", fg(Foreground::Pink)),
            ("e", fg(Foreground::Cyan)),
            ("d", fg(Foreground::White)),
            (" Text Generator!", plain),
        ];
        Self::from_segments(
            parts
                .into_iter()
                .filter_map(|(text, style)| Segment::new(text, style)),
        )
    }

    /// The segments in document order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Length of the document text in characters.
    pub fn len(&self) -> usize {
        self.segments.iter().map(Segment::char_len).sum()
    }

    /// Returns `true` if the document holds no text.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The document text with all styling dropped.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// Style of the character at `offset`, or `None` past the end.
    pub fn style_at(&self, offset: usize) -> Option<StyleSet> {
        let mut start = 0;
        for segment in &self.segments {
            let end = start + segment.char_len();
            if offset < end {
                return Some(segment.style());
            }
            start = end;
        }
        None
    }

    /// Applies `operation` to `range` using [`DocumentConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidRange`] if the range is empty,
    /// reversed or extends past the end of the document.
    pub fn apply_style(
        &self,
        range: Range<usize>,
        operation: StyleOperation,
    ) -> DocumentResult<Document> {
        self.apply_style_with(range, operation, &DocumentConfig::default())
    }

    /// Applies `operation` to every character in `range`.
    ///
    /// Segments straddling either end of the range are split at the boundary,
    /// segments inside it are restyled, and equal-style neighbours are merged
    /// as the new segment list is built, so the result is already maximal.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidRange`] if the range is empty, reversed,
    /// extends past the end of the document, or (when
    /// [`DocumentConfig::reject_blank_selection`] is set) selects only
    /// whitespace. On error `self` is unchanged.
    #[instrument(skip_all)]
    pub fn apply_style_with(
        &self,
        range: Range<usize>,
        operation: StyleOperation,
        config: &DocumentConfig,
    ) -> DocumentResult<Document> {
        if let Err(error) = self.validate(&range, config) {
            debug!(
                start = range.start,
                end = range.end,
                len = self.len(),
                fault = %error.fault(),
                "rejected style range"
            );
            return Err(error);
        }

        let mut segments = Vec::with_capacity(self.segments.len() + 2);
        let mut start = 0;
        for segment in &self.segments {
            let end = start + segment.char_len();
            if end <= range.start || start >= range.end {
                push_merged(&mut segments, segment.clone());
                start = end;
                continue;
            }

            let mut rest = segment.clone();
            if range.start > start {
                let (head, tail) = rest.split_at(range.start - start);
                push_merged(&mut segments, head);
                rest = tail;
            }
            let selected = range.end.min(end) - range.start.max(start);
            if selected < rest.char_len() {
                let (inner, tail) = rest.split_at(selected);
                push_merged(&mut segments, inner.with_style(operation.apply(inner.style())));
                push_merged(&mut segments, tail);
            } else {
                push_merged(&mut segments, rest.with_style(operation.apply(rest.style())));
            }
            start = end;
        }

        trace!(
            ?operation,
            before = self.segments.len(),
            after = segments.len(),
            "applied style"
        );
        Ok(Document { segments })
    }

    /// Drops all styling, keeping the text as one default-style segment.
    pub fn reset(&self) -> Document {
        trace!(segments = self.segments.len(), "reset document");
        Document {
            segments: Segment::new(self.plain_text(), StyleSet::default())
                .into_iter()
                .collect(),
        }
    }

    fn validate(&self, range: &Range<usize>, config: &DocumentConfig) -> DocumentResult<()> {
        let len = self.len();
        let fault = if range.start > range.end {
            Some(RangeFault::Reversed)
        } else if range.start == range.end {
            Some(RangeFault::Empty)
        } else if range.end > len {
            Some(RangeFault::OutOfBounds)
        } else if config.reject_blank_selection && self.is_blank(range) {
            Some(RangeFault::Blank)
        } else {
            None
        };
        match fault {
            Some(fault) => Err(DocumentError::InvalidRange {
                start: range.start,
                end: range.end,
                len,
                fault,
            }),
            None => Ok(()),
        }
    }

    fn is_blank(&self, range: &Range<usize>) -> bool {
        self.segments
            .iter()
            .flat_map(|segment| segment.text().chars())
            .skip(range.start)
            .take(range.end - range.start)
            .all(char::is_whitespace)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Document::new(text)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Document::new(&text)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Push `segment`, folding it into the previous one when the styles match.
fn push_merged(segments: &mut Vec<Segment>, segment: Segment) {
    match segments.last_mut() {
        Some(last) if last.style() == segment.style() => last.absorb(&segment),
        _ => segments.push(segment),
    }
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
