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

//! Error types for the editor session

use minefmt_codec::CodecError;
use thiserror::Error;

/// Result type for session operations
pub type EditorResult<T> = std::result::Result<T, EditorError>;

/// Editor session error types
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    /// Precondition violation from the codec layer
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Preview selection extends beyond the rendered output
    #[error("preview selection {start}..{end} out of bounds (rendered length {max})")]
    PreviewRangeOutOfBounds {
        /// Requested selection start (rendered characters)
        start: usize,
        /// Requested selection end (rendered characters)
        end: usize,
        /// Rendered length of the current preview
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_error_converts() {
        let codec = CodecError::InvertedRange { start: 3, end: 1 };
        let editor: EditorError = codec.clone().into();
        assert_eq!(editor, EditorError::Codec(codec));
    }

    #[test]
    fn test_preview_range_display() {
        let error = EditorError::PreviewRangeOutOfBounds {
            start: 4,
            end: 9,
            max: 6,
        };
        assert_eq!(
            error.to_string(),
            "preview selection 4..9 out of bounds (rendered length 6)"
        );
    }
}
