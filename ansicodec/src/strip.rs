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

use crate::consts::{CSI, FENCE_CLOSE, FENCE_OPEN, SGR_FINAL};
use std::borrow::Cow;

/// Removes SGR escape sequences (`ESC [ <digits and semicolons> m`) from a string.
///
/// Returns the input borrowed when it contains no escape character. Anything
/// that is not a complete SGR sequence, including a lone `ESC`, is kept as-is.
///
/// Use it to show exported text without styling, or to check that a
/// serialized document still carries the original text. The serializer
/// never calls it.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use ansiscribe_ansicodec::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[0m\x1b[1;31mRed\x1b[0m!"), "Red!");
/// assert!(matches!(strip_ansi_codes("Plain"), Cow::Borrowed(_)));
/// ```
pub fn strip_ansi_codes(str: &str) -> Cow<'_, str> {
    if !str.contains('\x1b') {
        return Cow::Borrowed(str);
    }

    let mut result = String::with_capacity(str.len());
    let mut rest = str;
    while let Some(index) = rest.find('\x1b') {
        result.push_str(&rest[..index]);
        let candidate = &rest[index..];
        match sgr_length(candidate) {
            Some(length) => rest = &candidate[length..],
            None => {
                result.push('\x1b');
                rest = &candidate[1..];
            }
        }
    }
    result.push_str(rest);

    Cow::Owned(result)
}

/// Returns the body of a ```` ```ansi ```` code block, or `None` if `str` is not one.
///
/// Combine with [`strip_ansi_codes`] to get the plain text of exported output.
///
/// ```
/// use ansiscribe_ansicodec::unfence;
///
/// assert_eq!(unfence("```ansi\nHi\n```"), Some("Hi"));
/// assert_eq!(unfence("Hi"), None);
/// ```
pub fn unfence(str: &str) -> Option<&str> {
    str.strip_prefix(FENCE_OPEN)?.strip_suffix(FENCE_CLOSE)
}

fn sgr_length(candidate: &str) -> Option<usize> {
    let params = candidate.strip_prefix(CSI)?;
    let end = params.find(|ch: char| !(ch.is_ascii_digit() || ch == ';'))?;
    params[end..]
        .starts_with(SGR_FINAL)
        .then_some(CSI.len() + end + SGR_FINAL.len_utf8())
}
