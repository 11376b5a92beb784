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

use crate::consts::SCRAMBLE_ALPHABET;
use rand::RngExt;

/// Generates `len` random alphanumeric scratch glyphs.
///
/// Used for the rendered content of obfuscated runs, both at parse time and
/// on every animation tick. The output is drawn uniformly from `A-Z`,
/// `a-z`, `0-9` and carries no information about the source text.
pub fn scramble_text(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| {
            let idx = rng.random_range(0..SCRAMBLE_ALPHABET.len());
            SCRAMBLE_ALPHABET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scramble_length() {
        for len in [0, 1, 5, 64] {
            assert_eq!(scramble_text(len).chars().count(), len);
        }
    }

    #[test]
    fn test_scramble_alphabet() {
        let text = scramble_text(256);
        assert!(text.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
