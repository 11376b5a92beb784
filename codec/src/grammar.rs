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

//! The fixed code-character grammar: sixteen colors, four format toggles,
//! obfuscation, and reset. The table is total for `0-9a-f` and `k/l/m/n/o/r`;
//! every other character following a marker is *not* a code and is treated
//! as literal text by the parser.

/// The sixteen fixed text colors selectable by the hex-digit codes.
///
/// Each color carries the code character that selects it and the RGB value
/// it renders with:
///
/// | Code | Color        | RGB       |
/// |------|--------------|-----------|
/// | `0`  | Black        | `#000000` |
/// | `1`  | Dark Blue    | `#0000AA` |
/// | `2`  | Dark Green   | `#00AA00` |
/// | `3`  | Dark Aqua    | `#00AAAA` |
/// | `4`  | Dark Red     | `#AA0000` |
/// | `5`  | Dark Purple  | `#AA00AA` |
/// | `6`  | Gold         | `#FFAA00` |
/// | `7`  | Gray         | `#AAAAAA` |
/// | `8`  | Dark Gray    | `#555555` |
/// | `9`  | Blue         | `#5555FF` |
/// | `a`  | Green        | `#55FF55` |
/// | `b`  | Aqua         | `#55FFFF` |
/// | `c`  | Red          | `#FF5555` |
/// | `d`  | Light Purple | `#FF55FF` |
/// | `e`  | Yellow       | `#FFFF55` |
/// | `f`  | White        | `#FFFFFF` |
///
/// Color codes are mutually exclusive: applying one replaces whichever color
/// was active before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum TextColor {
    /// Black - Code `0` (`#000000`).
    Black,
    /// Dark Blue - Code `1` (`#0000AA`).
    DarkBlue,
    /// Dark Green - Code `2` (`#00AA00`).
    DarkGreen,
    /// Dark Aqua - Code `3` (`#00AAAA`).
    DarkAqua,
    /// Dark Red - Code `4` (`#AA0000`).
    DarkRed,
    /// Dark Purple - Code `5` (`#AA00AA`).
    DarkPurple,
    /// Gold - Code `6` (`#FFAA00`).
    Gold,
    /// Gray - Code `7` (`#AAAAAA`).
    Gray,
    /// Dark Gray - Code `8` (`#555555`).
    DarkGray,
    /// Blue - Code `9` (`#5555FF`).
    Blue,
    /// Green - Code `a` (`#55FF55`).
    Green,
    /// Aqua - Code `b` (`#55FFFF`).
    Aqua,
    /// Red - Code `c` (`#FF5555`).
    Red,
    /// Light Purple - Code `d` (`#FF55FF`).
    LightPurple,
    /// Yellow - Code `e` (`#FFFF55`).
    Yellow,
    /// White - Code `f` (`#FFFFFF`).
    White,
}

impl TextColor {
    /// All sixteen colors in code order (`0` through `f`).
    pub const ALL: [TextColor; 16] = [
        TextColor::Black,
        TextColor::DarkBlue,
        TextColor::DarkGreen,
        TextColor::DarkAqua,
        TextColor::DarkRed,
        TextColor::DarkPurple,
        TextColor::Gold,
        TextColor::Gray,
        TextColor::DarkGray,
        TextColor::Blue,
        TextColor::Green,
        TextColor::Aqua,
        TextColor::Red,
        TextColor::LightPurple,
        TextColor::Yellow,
        TextColor::White,
    ];

    /// Converts this color to the code character that selects it.
    pub fn code_char(&self) -> char {
        match self {
            TextColor::Black => '0',
            TextColor::DarkBlue => '1',
            TextColor::DarkGreen => '2',
            TextColor::DarkAqua => '3',
            TextColor::DarkRed => '4',
            TextColor::DarkPurple => '5',
            TextColor::Gold => '6',
            TextColor::Gray => '7',
            TextColor::DarkGray => '8',
            TextColor::Blue => '9',
            TextColor::Green => 'a',
            TextColor::Aqua => 'b',
            TextColor::Red => 'c',
            TextColor::LightPurple => 'd',
            TextColor::Yellow => 'e',
            TextColor::White => 'f',
        }
    }

    /// Converts a code character to its color.
    ///
    /// Returns `None` for any character outside `0-9a-f`. Uppercase hex
    /// digits are not codes.
    pub fn from_code(value: char) -> Option<TextColor> {
        match value {
            '0' => Some(TextColor::Black),
            '1' => Some(TextColor::DarkBlue),
            '2' => Some(TextColor::DarkGreen),
            '3' => Some(TextColor::DarkAqua),
            '4' => Some(TextColor::DarkRed),
            '5' => Some(TextColor::DarkPurple),
            '6' => Some(TextColor::Gold),
            '7' => Some(TextColor::Gray),
            '8' => Some(TextColor::DarkGray),
            '9' => Some(TextColor::Blue),
            'a' => Some(TextColor::Green),
            'b' => Some(TextColor::Aqua),
            'c' => Some(TextColor::Red),
            'd' => Some(TextColor::LightPurple),
            'e' => Some(TextColor::Yellow),
            'f' => Some(TextColor::White),
            _ => None,
        }
    }

    /// The RGB value this color renders with.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            TextColor::Black => (0x00, 0x00, 0x00),
            TextColor::DarkBlue => (0x00, 0x00, 0xAA),
            TextColor::DarkGreen => (0x00, 0xAA, 0x00),
            TextColor::DarkAqua => (0x00, 0xAA, 0xAA),
            TextColor::DarkRed => (0xAA, 0x00, 0x00),
            TextColor::DarkPurple => (0xAA, 0x00, 0xAA),
            TextColor::Gold => (0xFF, 0xAA, 0x00),
            TextColor::Gray => (0xAA, 0xAA, 0xAA),
            TextColor::DarkGray => (0x55, 0x55, 0x55),
            TextColor::Blue => (0x55, 0x55, 0xFF),
            TextColor::Green => (0x55, 0xFF, 0x55),
            TextColor::Aqua => (0x55, 0xFF, 0xFF),
            TextColor::Red => (0xFF, 0x55, 0x55),
            TextColor::LightPurple => (0xFF, 0x55, 0xFF),
            TextColor::Yellow => (0xFF, 0xFF, 0x55),
            TextColor::White => (0xFF, 0xFF, 0xFF),
        }
    }

    /// The RGB value as a CSS-style hex string, e.g. `#AA0000`.
    pub fn css_hex(&self) -> &'static str {
        match self {
            TextColor::Black => "#000000",
            TextColor::DarkBlue => "#0000AA",
            TextColor::DarkGreen => "#00AA00",
            TextColor::DarkAqua => "#00AAAA",
            TextColor::DarkRed => "#AA0000",
            TextColor::DarkPurple => "#AA00AA",
            TextColor::Gold => "#FFAA00",
            TextColor::Gray => "#AAAAAA",
            TextColor::DarkGray => "#555555",
            TextColor::Blue => "#5555FF",
            TextColor::Green => "#55FF55",
            TextColor::Aqua => "#55FFFF",
            TextColor::Red => "#FF5555",
            TextColor::LightPurple => "#FF55FF",
            TextColor::Yellow => "#FFFF55",
            TextColor::White => "#FFFFFF",
        }
    }
}

/// A format code: one color, one of the four format toggles, obfuscation,
/// or reset.
///
/// | Code | Effect        | Semantics                                   |
/// |------|---------------|---------------------------------------------|
/// | `0-f`| Color         | Replaces the active color (latest wins)     |
/// | `l`  | Bold          | Accumulates                                 |
/// | `o`  | Italic        | Accumulates                                 |
/// | `n`  | Underline     | Accumulates                                 |
/// | `m`  | Strikethrough | Accumulates                                 |
/// | `k`  | Obfuscate     | Accumulates                                 |
/// | `r`  | Reset         | Clears color, formats, and obfuscation      |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatCode {
    /// One of the sixteen fixed colors (codes `0-9a-f`).
    Color(TextColor),
    /// Bold text (code `l`).
    Bold,
    /// Italic text (code `o`).
    Italic,
    /// Underlined text (code `n`).
    Underline,
    /// Struck-through text (code `m`).
    Strikethrough,
    /// Continuously re-randomized scratch glyphs (code `k`).
    Obfuscate,
    /// Clears all active color and format state (code `r`).
    Reset,
}

impl FormatCode {
    /// Converts this code to the character that follows the marker.
    pub fn code_char(&self) -> char {
        match self {
            FormatCode::Color(color) => color.code_char(),
            FormatCode::Bold => 'l',
            FormatCode::Italic => 'o',
            FormatCode::Underline => 'n',
            FormatCode::Strikethrough => 'm',
            FormatCode::Obfuscate => 'k',
            FormatCode::Reset => 'r',
        }
    }

    /// Converts a trailing character to its code.
    ///
    /// Returns `None` for any character outside `[0-9a-fk-or]`. Such a
    /// character following a marker is literal text, never a code.
    pub fn from_char(value: char) -> Option<FormatCode> {
        if let Some(color) = TextColor::from_code(value) {
            return Some(FormatCode::Color(color));
        }
        match value {
            'l' => Some(FormatCode::Bold),
            'o' => Some(FormatCode::Italic),
            'n' => Some(FormatCode::Underline),
            'm' => Some(FormatCode::Strikethrough),
            'k' => Some(FormatCode::Obfuscate),
            'r' => Some(FormatCode::Reset),
            _ => None,
        }
    }

    /// Whether this is a color code (mutually exclusive with other colors).
    pub fn is_color(&self) -> bool {
        matches!(self, FormatCode::Color(_))
    }

    /// Whether a character is a valid code character in either encoding.
    pub fn is_code_char(value: char) -> bool {
        FormatCode::from_char(value).is_some()
    }

    /// Whether a character is a color code character (`0-9a-f`).
    pub fn is_color_char(value: char) -> bool {
        TextColor::from_code(value).is_some()
    }
}
