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

//! Translation between the two code encodings.
//!
//! Both directions are pure, code-blind string substitutions: every literal
//! marker becomes the escape token and vice versa. For well-formed buffers
//! (no literal occurrences of the other encoding's token in the text
//! itself) the translation is lossless and reversible, and translating a
//! buffer already in the target encoding is a no-op.

use crate::consts::{ESCAPE_TOKEN, MARKER_STR};
use std::borrow::Cow;

/// The two supported code encodings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Chat encoding: the section-sign marker followed by one code character.
    #[default]
    Marker,
    /// MOTD encoding: the six-character escape token followed by one code
    /// character.
    Escaped,
}

impl Encoding {
    /// The marker form that introduces a code in this encoding.
    pub fn token(&self) -> &'static str {
        match self {
            Encoding::Marker => MARKER_STR,
            Encoding::Escaped => ESCAPE_TOKEN,
        }
    }

    /// Byte length of one full code token (marker form plus code character).
    pub fn code_len(&self) -> usize {
        self.token().len() + 1
    }
}

/// Replaces every literal marker with the escape token.
pub fn to_escaped(buffer: &str) -> String {
    buffer.replace(MARKER_STR, ESCAPE_TOKEN)
}

/// Replaces every literal escape token with the marker.
pub fn to_marker(buffer: &str) -> String {
    buffer.replace(ESCAPE_TOKEN, MARKER_STR)
}

/// Translates a buffer into the target encoding.
pub fn translate(buffer: &str, target: Encoding) -> String {
    match target {
        Encoding::Marker => to_marker(buffer),
        Encoding::Escaped => to_escaped(buffer),
    }
}

/// Produces the marker-form equivalent of a buffer for parsing.
///
/// Borrows when the buffer is already marker-form (or contains no escape
/// tokens to rewrite).
pub fn normalize_to_marker(buffer: &str, encoding: Encoding) -> Cow<'_, str> {
    match encoding {
        Encoding::Marker => Cow::Borrowed(buffer),
        Encoding::Escaped if !buffer.contains(ESCAPE_TOKEN) => Cow::Borrowed(buffer),
        Encoding::Escaped => Cow::Owned(to_marker(buffer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lengths() {
        assert_eq!(Encoding::Marker.code_len(), 3);
        assert_eq!(Encoding::Escaped.code_len(), 7);
    }

    #[test]
    fn test_to_escaped() {
        assert_eq!(to_escaped("\u{00A7}aHi"), "\\u00A7aHi");
    }

    #[test]
    fn test_to_marker() {
        assert_eq!(to_marker("\\u00A7aHi"), "\u{00A7}aHi");
    }

    #[test]
    fn test_round_trip() {
        let buffer = "\u{00A7}aHi \u{00A7}lthere";
        assert_eq!(to_marker(&to_escaped(buffer)), buffer);
    }

    #[test]
    fn test_idempotent_in_target_encoding() {
        assert_eq!(to_escaped("\\u00A7aHi"), "\\u00A7aHi");
        assert_eq!(to_marker("\u{00A7}aHi"), "\u{00A7}aHi");
    }

    #[test]
    fn test_normalize_borrows_marker_form() {
        let buffer = "\u{00A7}aHi";
        assert!(matches!(
            normalize_to_marker(buffer, Encoding::Marker),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_normalize_rewrites_escaped_form() {
        let normalized = normalize_to_marker("\\u00A7aHi", Encoding::Escaped);
        assert_eq!(normalized.as_ref(), "\u{00A7}aHi");
    }
}
