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

//! Error types for the codec crate.
//!
//! Malformed buffer *content* is never an error anywhere in this crate:
//! unrecognized codes pass through as literal text. The only failures are
//! violated caller preconditions on selection ranges.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`CodecError`].
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur when working with coded buffers.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Selection extends beyond the end of the buffer.
    #[error("selection {start}..{end} out of bounds (buffer length {max})")]
    RangeOutOfBounds {
        /// Requested selection start (bytes)
        start: usize,
        /// Requested selection end (bytes)
        end: usize,
        /// Length of the buffer the selection was applied to
        max: usize,
    },

    /// Selection start lies after its end.
    #[error("selection {start}..{end} is inverted")]
    InvertedRange {
        /// Requested selection start (bytes)
        start: usize,
        /// Requested selection end (bytes)
        end: usize,
    },

    /// Selection offset does not fall on a UTF-8 character boundary.
    #[error("offset {position} is not a character boundary")]
    NotCharBoundary {
        /// The offending byte offset
        position: usize,
    },
}
