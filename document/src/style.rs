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

/// The four style axes carried by every [`Segment`](crate::Segment).
///
/// `StyleSet` is a small `Copy` value. Two style sets are equal only when all
/// four axes are equal, which is what the document uses to decide whether two
/// neighbouring segments must be merged.
///
/// | Axis         | SGR Code  |
/// |--------------|-----------|
/// | `bold`       | `1`       |
/// | `underline`  | `4`       |
/// | `foreground` | `30`-`37` |
/// | `background` | `40`-`47` |
///
/// # Examples
///
/// ```rust
/// use ansiscribe_document::{Foreground, StyleSet};
///
/// let style = StyleSet {
///     bold: true,
///     foreground: Some(Foreground::Red),
///     ..Default::default()
/// };
/// assert!(!style.is_default());
/// assert!(StyleSet::default().is_default());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleSet {
    /// Bold text (`1`)
    pub bold: bool,
    /// Underlined text (`4`)
    pub underline: bool,
    /// Foreground color (`30`-`37`)
    pub foreground: Option<Foreground>,
    /// Background color (`40`-`47`)
    pub background: Option<Background>,
}

impl StyleSet {
    /// Returns `true` when no axis is set.
    pub fn is_default(&self) -> bool {
        *self == StyleSet::default()
    }

    /// Number of axes that are set, which is also the number of SGR parameters
    /// needed to express this style.
    pub fn axis_count(&self) -> usize {
        usize::from(self.bold)
            + usize::from(self.underline)
            + usize::from(self.foreground.is_some())
            + usize::from(self.background.is_some())
    }
}

/// Foreground colors of Discord's ANSI palette.
///
/// Discord only renders the eight basic foreground colors inside an `ansi`
/// code block, and it draws them with its own palette rather than the
/// terminal defaults, so the names follow what Discord shows.
///
/// | Code | Variant  | Swatch    |
/// |------|----------|-----------|
/// | `30` | `Gray`   | `#4f545c` |
/// | `31` | `Red`    | `#dc322f` |
/// | `32` | `Green`  | `#859900` |
/// | `33` | `Yellow` | `#b58900` |
/// | `34` | `Blue`   | `#268bd2` |
/// | `35` | `Pink`   | `#d33682` |
/// | `36` | `Cyan`   | `#2aa198` |
/// | `37` | `White`  | `#ffffff` |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum Foreground {
    /// Gray (`30`)
    Gray,
    /// Red (`31`)
    Red,
    /// Green (`32`)
    Green,
    /// Yellow (`33`)
    Yellow,
    /// Blue (`34`)
    Blue,
    /// Pink (`35`)
    Pink,
    /// Cyan (`36`)
    Cyan,
    /// White (`37`)
    White,
}

impl Foreground {
    /// Every foreground color in palette order.
    pub const ALL: [Foreground; 8] = [
        Foreground::Gray,
        Foreground::Red,
        Foreground::Green,
        Foreground::Yellow,
        Foreground::Blue,
        Foreground::Pink,
        Foreground::Cyan,
        Foreground::White,
    ];

    /// Converts the color to its SGR parameter.
    ///
    /// ```
    /// use ansiscribe_document::Foreground;
    ///
    /// assert_eq!(Foreground::Red.to_u8(), 31);
    /// ```
    pub fn to_u8(&self) -> u8 {
        match self {
            Foreground::Gray => 30,
            Foreground::Red => 31,
            Foreground::Green => 32,
            Foreground::Yellow => 33,
            Foreground::Blue => 34,
            Foreground::Pink => 35,
            Foreground::Cyan => 36,
            Foreground::White => 37,
        }
    }

    /// Converts an SGR parameter back into a foreground color.
    ///
    /// Returns `None` for anything outside `30..=37`.
    pub fn from_u8(value: u8) -> Option<Foreground> {
        match value {
            30 => Some(Foreground::Gray),
            31 => Some(Foreground::Red),
            32 => Some(Foreground::Green),
            33 => Some(Foreground::Yellow),
            34 => Some(Foreground::Blue),
            35 => Some(Foreground::Pink),
            36 => Some(Foreground::Cyan),
            37 => Some(Foreground::White),
            _ => None,
        }
    }

    /// Human readable color name.
    pub fn name(&self) -> &'static str {
        match self {
            Foreground::Gray => "Gray",
            Foreground::Red => "Red",
            Foreground::Green => "Green",
            Foreground::Yellow => "Yellow",
            Foreground::Blue => "Blue",
            Foreground::Pink => "Pink",
            Foreground::Cyan => "Cyan",
            Foreground::White => "White",
        }
    }

    /// Hex color used to draw this entry in a color picker.
    pub fn swatch(&self) -> &'static str {
        match self {
            Foreground::Gray => "#4f545c",
            Foreground::Red => "#dc322f",
            Foreground::Green => "#859900",
            Foreground::Yellow => "#b58900",
            Foreground::Blue => "#268bd2",
            Foreground::Pink => "#d33682",
            Foreground::Cyan => "#2aa198",
            Foreground::White => "#ffffff",
        }
    }
}

impl std::fmt::Display for Foreground {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Background colors of Discord's ANSI palette.
///
/// | Code | Variant            | Swatch    |
/// |------|--------------------|-----------|
/// | `40` | `FireflyDarkBlue`  | `#002b36` |
/// | `41` | `Orange`           | `#cb4b16` |
/// | `42` | `MarbleBlue`       | `#586e75` |
/// | `43` | `GreyishTurquoise` | `#657b83` |
/// | `44` | `Gray`             | `#839496` |
/// | `45` | `Indigo`           | `#6c71c4` |
/// | `46` | `LightGray`        | `#93a1a1` |
/// | `47` | `White`            | `#fdf6e3` |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum Background {
    /// Firefly dark blue (`40`)
    FireflyDarkBlue,
    /// Orange (`41`)
    Orange,
    /// Marble blue (`42`)
    MarbleBlue,
    /// Greyish turquoise (`43`)
    GreyishTurquoise,
    /// Gray (`44`)
    Gray,
    /// Indigo (`45`)
    Indigo,
    /// Light gray (`46`)
    LightGray,
    /// White (`47`)
    White,
}

impl Background {
    /// Every background color in palette order.
    pub const ALL: [Background; 8] = [
        Background::FireflyDarkBlue,
        Background::Orange,
        Background::MarbleBlue,
        Background::GreyishTurquoise,
        Background::Gray,
        Background::Indigo,
        Background::LightGray,
        Background::White,
    ];

    /// Converts the color to its SGR parameter.
    pub fn to_u8(&self) -> u8 {
        match self {
            Background::FireflyDarkBlue => 40,
            Background::Orange => 41,
            Background::MarbleBlue => 42,
            Background::GreyishTurquoise => 43,
            Background::Gray => 44,
            Background::Indigo => 45,
            Background::LightGray => 46,
            Background::White => 47,
        }
    }

    /// Converts an SGR parameter back into a background color.
    ///
    /// Returns `None` for anything outside `40..=47`.
    pub fn from_u8(value: u8) -> Option<Background> {
        match value {
            40 => Some(Background::FireflyDarkBlue),
            41 => Some(Background::Orange),
            42 => Some(Background::MarbleBlue),
            43 => Some(Background::GreyishTurquoise),
            44 => Some(Background::Gray),
            45 => Some(Background::Indigo),
            46 => Some(Background::LightGray),
            47 => Some(Background::White),
            _ => None,
        }
    }

    /// Human readable color name.
    pub fn name(&self) -> &'static str {
        match self {
            Background::FireflyDarkBlue => "Firefly Dark Blue",
            Background::Orange => "Orange",
            Background::MarbleBlue => "Marble Blue",
            Background::GreyishTurquoise => "Greyish Turquoise",
            Background::Gray => "Gray",
            Background::Indigo => "Indigo",
            Background::LightGray => "Light Gray",
            Background::White => "White",
        }
    }

    /// Hex color used to draw this entry in a color picker.
    pub fn swatch(&self) -> &'static str {
        match self {
            Background::FireflyDarkBlue => "#002b36",
            Background::Orange => "#cb4b16",
            Background::MarbleBlue => "#586e75",
            Background::GreyishTurquoise => "#657b83",
            Background::Gray => "#839496",
            Background::Indigo => "#6c71c4",
            Background::LightGray => "#93a1a1",
            Background::White => "#fdf6e3",
        }
    }
}

impl std::fmt::Display for Background {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
