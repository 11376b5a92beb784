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

use crate::grammar::{FormatCode, TextColor};

/// Resolved render style of a styled run.
///
/// This is the style the rendering surface applies to a span of output:
/// an optional color plus the four independent format flags. Obfuscation
/// is not part of the resolved style; it is carried separately on the
/// run so the animator can regenerate glyphs while reapplying this style
/// unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RunStyle {
    /// Active color, if any color code was in effect.
    pub color: Option<TextColor>,
    /// Bold (code `l`).
    pub bold: bool,
    /// Italic (code `o`).
    pub italic: bool,
    /// Underline (code `n`).
    pub underline: bool,
    /// Strikethrough (code `m`).
    pub strikethrough: bool,
}

impl RunStyle {
    /// Whether no color and no format flag is set.
    pub fn is_plain(&self) -> bool {
        *self == RunStyle::default()
    }
}

/// Style state accumulated while scanning a coded buffer.
///
/// Cleared at buffer start and by every reset code. Applying codes follows
/// the grammar semantics: a color replaces the active color, format codes
/// and obfuscation accumulate, reset returns to the default state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveStyle {
    /// Currently active color, if any.
    pub color: Option<TextColor>,
    /// Bold accumulated.
    pub bold: bool,
    /// Italic accumulated.
    pub italic: bool,
    /// Underline accumulated.
    pub underline: bool,
    /// Strikethrough accumulated.
    pub strikethrough: bool,
    /// Obfuscation active.
    pub obfuscate: bool,
}

impl ActiveStyle {
    /// Applies a format code to the running state.
    pub fn apply(&mut self, code: FormatCode) {
        match code {
            FormatCode::Color(color) => self.color = Some(color),
            FormatCode::Bold => self.bold = true,
            FormatCode::Italic => self.italic = true,
            FormatCode::Underline => self.underline = true,
            FormatCode::Strikethrough => self.strikethrough = true,
            FormatCode::Obfuscate => self.obfuscate = true,
            FormatCode::Reset => *self = ActiveStyle::default(),
        }
    }

    /// The resolved render style for text emitted under this state.
    pub fn resolved(&self) -> RunStyle {
        RunStyle {
            color: self.color,
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            strikethrough: self.strikethrough,
        }
    }
}

/// A maximal contiguous span of rendered output sharing one resolved style.
///
/// Positions are in *characters of the rendered output*, not bytes of the
/// coded buffer. For obfuscated runs `text` holds scratch glyphs that are
/// never derived from the source characters; the run's length and style are
/// what the animator keeps regenerating against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledRun {
    /// Start position in rendered characters.
    pub start: usize,
    /// The rendered text of this run.
    pub text: String,
    /// Resolved style of the whole run.
    pub style: RunStyle,
    /// Whether this run's glyphs are continuously re-randomized.
    pub obfuscated: bool,
}

impl StyledRun {
    /// Length of this run in rendered characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether this run contains no characters.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// End position in rendered characters (exclusive).
    pub fn end(&self) -> usize {
        self.start + self.len()
    }
}

/// The animator's record of an obfuscated run: where it sits in the
/// rendered output, how many glyphs to regenerate, and the style to
/// reapply on every tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObfuscatedRun {
    /// Start position in rendered characters.
    pub start: usize,
    /// Number of glyphs to regenerate each tick.
    pub len: usize,
    /// Style reapplied with every regeneration.
    pub style: RunStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_replaces_color() {
        let mut state = ActiveStyle::default();
        state.apply(FormatCode::Color(TextColor::Red));
        state.apply(FormatCode::Color(TextColor::Blue));
        assert_eq!(state.color, Some(TextColor::Blue));
    }

    #[test]
    fn test_formats_accumulate() {
        let mut state = ActiveStyle::default();
        state.apply(FormatCode::Bold);
        state.apply(FormatCode::Underline);
        assert!(state.bold);
        assert!(state.underline);
        assert!(!state.italic);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = ActiveStyle::default();
        state.apply(FormatCode::Color(TextColor::Gold));
        state.apply(FormatCode::Bold);
        state.apply(FormatCode::Obfuscate);
        state.apply(FormatCode::Reset);
        assert_eq!(state, ActiveStyle::default());
    }

    #[test]
    fn test_resolved_excludes_obfuscation() {
        let mut state = ActiveStyle::default();
        state.apply(FormatCode::Obfuscate);
        assert!(state.resolved().is_plain());
    }

    #[test]
    fn test_run_char_positions() {
        let run = StyledRun {
            start: 3,
            text: String::from("héllo"),
            style: RunStyle::default(),
            obfuscated: false,
        };
        assert_eq!(run.len(), 5);
        assert_eq!(run.end(), 8);
    }
}
