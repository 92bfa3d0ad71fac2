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

use crate::consts::{CSI, SGR_FINAL};
use ansiscribe_document::{Background, Foreground, StyleSet};

/// A Select Graphic Rendition sequence restricted to the parameters Discord renders.
///
/// The sequence is written as `\x1b[<codes>m`, where `<codes>` is a
/// semicolon-separated list drawn from:
///
/// | Code      | Description |
/// |-----------|-------------|
/// | `0`       | Reset       |
/// | `1`       | Bold        |
/// | `4`       | Underline   |
/// | `30`-`37` | Foreground  |
/// | `40`-`47` | Background  |
///
/// Parameters derived from a [`StyleSet`] always appear in the order bold,
/// underline, foreground, background, so equal styles encode identically.
///
/// # Examples
///
/// ```rust
/// use ansiscribe_ansicodec::AnsiSelectGraphicRendition;
/// use ansiscribe_document::{Foreground, StyleSet};
///
/// let sgr = AnsiSelectGraphicRendition::from_style(&StyleSet {
///     bold: true,
///     foreground: Some(Foreground::Blue),
///     ..Default::default()
/// });
/// assert_eq!(sgr.to_string(), "\x1b[1;34m");
/// assert_eq!(sgr.len(), 7);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AnsiSelectGraphicRendition {
    parameters: Vec<SGRParameter>,
}

impl AnsiSelectGraphicRendition {
    /// The full reset sequence, `\x1b[0m`.
    pub fn reset() -> AnsiSelectGraphicRendition {
        AnsiSelectGraphicRendition {
            parameters: vec![SGRParameter::Reset],
        }
    }

    /// Parameters needed to move from the reset state to `style`.
    ///
    /// A default style yields an empty sequence, which writes nothing.
    pub fn from_style(style: &StyleSet) -> AnsiSelectGraphicRendition {
        let mut parameters = Vec::with_capacity(style.axis_count());
        if style.bold {
            parameters.push(SGRParameter::Bold);
        }
        if style.underline {
            parameters.push(SGRParameter::Underline);
        }
        if let Some(color) = style.foreground {
            parameters.push(SGRParameter::Foreground(color));
        }
        if let Some(color) = style.background {
            parameters.push(SGRParameter::Background(color));
        }
        AnsiSelectGraphicRendition { parameters }
    }

    /// The parameters in emission order.
    pub fn parameters(&self) -> &[SGRParameter] {
        &self.parameters
    }

    /// Returns `true` if there is nothing to write.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Length of the encoded sequence in bytes.
    pub fn len(&self) -> usize {
        if self.parameters.is_empty() {
            return 0;
        }
        let digits: usize = self
            .parameters
            .iter()
            .map(|parameter| if parameter.to_u8() < 10 { 1 } else { 2 })
            .sum();
        let semicolons = self.parameters.len() - 1;
        CSI.len() + digits + semicolons + SGR_FINAL.len_utf8()
    }

    /// Writes the escape sequence, or nothing when there are no parameters.
    pub fn write_str<W: std::fmt::Write>(&self, writer: &mut W) -> std::fmt::Result {
        let Some((first, rest)) = self.parameters.split_first() else {
            return Ok(());
        };
        write!(writer, "{}{}", CSI, first.to_u8())?;
        for parameter in rest {
            write!(writer, ";{}", parameter.to_u8())?;
        }
        writer.write_char(SGR_FINAL)
    }
}

impl std::fmt::Display for AnsiSelectGraphicRendition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_str(f)
    }
}

/// A single SGR parameter from Discord's supported subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SGRParameter {
    /// Reset all attributes (`0`)
    Reset,
    /// Bold (`1`)
    Bold,
    /// Underline (`4`)
    Underline,
    /// Foreground color (`30`-`37`)
    Foreground(Foreground),
    /// Background color (`40`-`47`)
    Background(Background),
}

impl SGRParameter {
    /// Numeric code of the parameter.
    pub fn to_u8(&self) -> u8 {
        match self {
            SGRParameter::Reset => 0,
            SGRParameter::Bold => 1,
            SGRParameter::Underline => 4,
            SGRParameter::Foreground(color) => color.to_u8(),
            SGRParameter::Background(color) => color.to_u8(),
        }
    }

    /// Parses a numeric code, returning `None` for codes Discord does not render.
    pub fn from_u8(value: u8) -> Option<SGRParameter> {
        match value {
            0 => Some(SGRParameter::Reset),
            1 => Some(SGRParameter::Bold),
            4 => Some(SGRParameter::Underline),
            30..=37 => Foreground::from_u8(value).map(SGRParameter::Foreground),
            40..=47 => Background::from_u8(value).map(SGRParameter::Background),
            _ => None,
        }
    }
}
