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

/// Marker character introducing a format code in chat encoding.
pub const MARKER: char = '\u{00A7}';

/// Marker as a string slice, for splicing into buffers.
pub const MARKER_STR: &str = "\u{00A7}";

/// Escape token introducing a format code in MOTD encoding.
///
/// Six literal ASCII characters: backslash, `u`, `0`, `0`, `A`, `7`.
pub const ESCAPE_TOKEN: &str = "\\u00A7";

/// Alphabet obfuscated runs draw their scratch glyphs from.
pub const SCRAMBLE_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
