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

use crate::result::{CodecError, CodecResult};

/// A half-open range `[start, end)` over a coded buffer, in bytes.
///
/// `start == end` denotes a caret with no selected text. The UI layer is
/// responsible for supplying in-bounds, character-aligned offsets;
/// [`Selection::validate`] reports violations as errors rather than
/// silently correcting them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl Selection {
    /// Creates a selection covering `[start, end)`.
    pub fn new(start: usize, end: usize) -> Selection {
        Selection { start, end }
    }

    /// Creates an empty selection (a caret) at `position`.
    pub fn caret(position: usize) -> Selection {
        Selection {
            start: position,
            end: position,
        }
    }

    /// Whether this selection is an empty caret.
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Length of the selected span in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the selection covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }

    /// Checks this selection against a buffer.
    ///
    /// Verifies ordering, bounds, and UTF-8 character alignment of both
    /// offsets. Returns the first violated precondition.
    pub fn validate(&self, buffer: &str) -> CodecResult<()> {
        if self.start > self.end {
            return Err(CodecError::InvertedRange {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > buffer.len() {
            return Err(CodecError::RangeOutOfBounds {
                start: self.start,
                end: self.end,
                max: buffer.len(),
            });
        }
        if !buffer.is_char_boundary(self.start) {
            return Err(CodecError::NotCharBoundary {
                position: self.start,
            });
        }
        if !buffer.is_char_boundary(self.end) {
            return Err(CodecError::NotCharBoundary { position: self.end });
        }
        Ok(())
    }
}
