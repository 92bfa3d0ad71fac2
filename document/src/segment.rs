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

use crate::style::StyleSet;

/// A non-empty run of text sharing one [`StyleSet`].
///
/// Segments are immutable. Splitting, restyling and joining all produce new
/// segments. Lengths and offsets are counted in `char`s, so a split can never
/// land inside a multi-byte character.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    text: String,
    style: StyleSet,
    chars: usize,
}

impl Segment {
    /// Creates a segment, or `None` if `text` is empty.
    ///
    /// ```
    /// use ansiscribe_document::{Segment, StyleSet};
    ///
    /// assert!(Segment::new("Hi", StyleSet::default()).is_some());
    /// assert!(Segment::new("", StyleSet::default()).is_none());
    /// ```
    pub fn new<S: Into<String>>(text: S, style: StyleSet) -> Option<Segment> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }
        let chars = text.chars().count();
        Some(Segment { text, style, chars })
    }

    /// Segment text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Segment style.
    pub fn style(&self) -> StyleSet {
        self.style
    }

    /// Length in characters. Always at least one.
    pub fn char_len(&self) -> usize {
        self.chars
    }

    /// Same text, different style.
    pub(crate) fn with_style(&self, style: StyleSet) -> Segment {
        Segment {
            text: self.text.clone(),
            style,
            chars: self.chars,
        }
    }

    /// Splits into `[0, at)` and `[at, len)`, both keeping this style.
    ///
    /// `at` must satisfy `0 < at < char_len()`.
    pub(crate) fn split_at(&self, at: usize) -> (Segment, Segment) {
        debug_assert!(at > 0 && at < self.chars);
        let index = self
            .text
            .char_indices()
            .nth(at)
            .map_or(self.text.len(), |(index, _)| index);
        let (head, tail) = self.text.split_at(index);
        (
            Segment {
                text: head.to_string(),
                style: self.style,
                chars: at,
            },
            Segment {
                text: tail.to_string(),
                style: self.style,
                chars: self.chars - at,
            },
        )
    }

    /// Appends the text of `other` to this segment, keeping this style.
    pub(crate) fn absorb(&mut self, other: &Segment) {
        self.text.push_str(&other.text);
        self.chars += other.chars;
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Foreground;

    fn red() -> StyleSet {
        StyleSet {
            foreground: Some(Foreground::Red),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Segment::new("", red()), None);
        assert_eq!(Segment::new(String::new(), StyleSet::default()), None);
    }

    #[test]
    fn test_char_len_counts_chars() {
        let segment = Segment::new("héllo", red()).unwrap();
        assert_eq!(segment.char_len(), 5);
        assert_eq!(segment.text().len(), 6);
    }

    #[test]
    fn test_split_at() {
        let segment = Segment::new("Hello", red()).unwrap();
        let (head, tail) = segment.split_at(2);
        assert_eq!(head.text(), "He");
        assert_eq!(tail.text(), "llo");
        assert_eq!(head.char_len(), 2);
        assert_eq!(tail.char_len(), 3);
        assert_eq!(head.style(), red());
        assert_eq!(tail.style(), red());
    }

    #[test]
    fn test_split_at_multibyte() {
        let segment = Segment::new("世界こんにちは", StyleSet::default()).unwrap();
        let (head, tail) = segment.split_at(2);
        assert_eq!(head.text(), "世界");
        assert_eq!(tail.text(), "こんにちは");
        assert_eq!(tail.char_len(), 5);
    }

    #[test]
    fn test_with_style() {
        let segment = Segment::new("Hi", StyleSet::default()).unwrap();
        let styled = segment.with_style(red());
        assert_eq!(styled.text(), "Hi");
        assert_eq!(styled.style(), red());
        assert_eq!(segment.style(), StyleSet::default());
    }

    #[test]
    fn test_absorb() {
        let mut segment = Segment::new("Hel", red()).unwrap();
        segment.absorb(&Segment::new("lö", StyleSet::default()).unwrap());
        assert_eq!(segment.text(), "Hellö");
        assert_eq!(segment.char_len(), 5);
        assert_eq!(segment.style(), red());
    }
}
