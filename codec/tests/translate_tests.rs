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

//! Tests for encoding translation

use minefmt_codec::{Encoding, to_escaped, to_marker, translate};

#[test]
fn test_marker_to_escaped() {
    assert_eq!(to_escaped("\u{00A7}aHi"), "\\u00A7aHi");
}

#[test]
fn test_escaped_to_marker() {
    assert_eq!(to_marker("\\u00A7aHi"), "\u{00A7}aHi");
}

#[test]
fn test_mode_switch_round_trip() {
    let buffer = "\u{00A7}aHi";
    let escaped = to_escaped(buffer);
    assert_eq!(escaped, "\\u00A7aHi");
    assert_eq!(to_marker(&escaped), buffer);
}

#[test]
fn test_translation_is_code_blind() {
    // Every marker is rewritten, valid code or not.
    assert_eq!(to_escaped("\u{00A7}x\u{00A7}"), "\\u00A7x\\u00A7");
}

#[test]
fn test_translation_of_empty_buffer() {
    assert_eq!(to_escaped(""), "");
    assert_eq!(to_marker(""), "");
}

#[test]
fn test_translation_without_codes_is_identity() {
    assert_eq!(to_escaped("plain text"), "plain text");
    assert_eq!(to_marker("plain text"), "plain text");
}

#[test]
fn test_idempotent_when_already_in_target_encoding() {
    assert_eq!(to_escaped("\\u00A7aHi"), "\\u00A7aHi");
    assert_eq!(to_marker("\u{00A7}aHi"), "\u{00A7}aHi");
}

#[test]
fn test_translate_dispatches_on_target() {
    assert_eq!(translate("\u{00A7}aHi", Encoding::Escaped), "\\u00A7aHi");
    assert_eq!(translate("\\u00A7aHi", Encoding::Marker), "\u{00A7}aHi");
}

#[test]
fn test_multiple_codes_translate() {
    let buffer = "\u{00A7}l\u{00A7}4Bold Red\u{00A7}r done";
    let escaped = to_escaped(buffer);
    assert_eq!(escaped, "\\u00A7l\\u00A74Bold Red\\u00A7r done");
    assert_eq!(to_marker(&escaped), buffer);
}
