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

//! Shared fixtures for the suite tests and benchmarks.

use ansiscribe_document::{Background, Document, Foreground, StyleOperation};
use proptest::prelude::*;
use std::ops::Range;

/// Any style operation.
pub fn operation() -> impl Strategy<Value = StyleOperation> {
    prop_oneof![
        Just(StyleOperation::SetBold),
        any::<bool>().prop_map(StyleOperation::SetUnderline),
        Just(StyleOperation::ToggleUnderline),
        (0..8usize).prop_map(|i| StyleOperation::SetForeground(Foreground::ALL[i])),
        (0..8usize).prop_map(|i| StyleOperation::SetBackground(Background::ALL[i])),
    ]
}

/// Style operations where applying twice equals applying once.
pub fn set_operation() -> impl Strategy<Value = StyleOperation> {
    operation().prop_filter("set operations only", |operation| !operation.is_toggle())
}

/// Maps two seeds onto a non-empty range inside `0..len`, or `0..0` for an empty document.
pub fn range_from(len: usize, (a, b): (u16, u16)) -> Range<usize> {
    if len == 0 {
        return 0..0;
    }
    let a = usize::from(a) % len;
    let b = usize::from(b) % len;
    a.min(b)..a.max(b) + 1
}

/// Documents built by applying up to a dozen random edits to random text.
pub fn document() -> impl Strategy<Value = Document> {
    (
        "[a-zé世 \n]{0,40}",
        prop::collection::vec((any::<(u16, u16)>(), operation()), 0..12),
    )
        .prop_map(|(text, edits)| {
            let mut document = Document::new(&text);
            for (seed, operation) in edits {
                let range = range_from(document.len(), seed);
                if let Ok(next) = document.apply_style(range, operation) {
                    document = next;
                }
            }
            document
        })
}

/// A document of roughly `size` characters where every second character starts a new segment.
pub fn striped_document(size: usize) -> Document {
    let mut document = Document::new(&"abcd".repeat(size / 4));
    for (index, start) in (0..document.len()).step_by(4).enumerate() {
        let color = Foreground::ALL[index % Foreground::ALL.len()];
        if let Ok(next) = document.apply_style(start..start + 2, StyleOperation::SetForeground(color)) {
            document = next;
        }
    }
    document
}
