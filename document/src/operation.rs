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

use crate::style::{Background, Foreground, StyleSet};

/// A style change applied to every segment inside a selected range.
///
/// Bold and the two color axes are one-directional: they set a value and
/// never clear it. Underline may be set explicitly or toggled. Foreground and
/// background are independent; setting one never touches the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleOperation {
    /// Turn bold on.
    SetBold,
    /// Turn underline on or off.
    SetUnderline(bool),
    /// Flip underline on each segment in the range.
    ToggleUnderline,
    /// Replace the foreground color.
    SetForeground(Foreground),
    /// Replace the background color.
    SetBackground(Background),
}

impl StyleOperation {
    /// Returns the style produced by applying this operation to `style`.
    pub fn apply(&self, style: StyleSet) -> StyleSet {
        match *self {
            StyleOperation::SetBold => StyleSet { bold: true, ..style },
            StyleOperation::SetUnderline(underline) => StyleSet { underline, ..style },
            StyleOperation::ToggleUnderline => StyleSet {
                underline: !style.underline,
                ..style
            },
            StyleOperation::SetForeground(color) => StyleSet {
                foreground: Some(color),
                ..style
            },
            StyleOperation::SetBackground(color) => StyleSet {
                background: Some(color),
                ..style
            },
        }
    }

    /// Returns `true` if applying the operation twice differs from applying it once.
    pub fn is_toggle(&self) -> bool {
        matches!(self, StyleOperation::ToggleUnderline)
    }
}
