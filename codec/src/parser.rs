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

//! The run parser: coded buffer in, styled runs out.
//!
//! The parser scans left to right with an [`ActiveStyle`] and a pending
//! literal-text accumulator. A marker followed by a known code character
//! flushes the accumulator as a run styled with the state *before* the
//! code, then updates the state; a marker followed by anything else is
//! literal text (fail-open). Run boundaries, styles, and lengths are
//! deterministic for a given buffer; only obfuscated glyphs are random.

use crate::consts::MARKER;
use crate::grammar::FormatCode;
use crate::scramble::scramble_text;
use crate::style::{ActiveStyle, ObfuscatedRun, StyledRun};
use crate::translate::{Encoding, normalize_to_marker};

/// One parse of a coded buffer: the full run list for the rendering
/// surface, plus the obfuscated subset the animator tracks until the next
/// parse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutput {
    /// Ordered styled runs tiling the rendered output.
    pub runs: Vec<StyledRun>,
    /// The obfuscated runs, in rendered order.
    pub obfuscated: Vec<ObfuscatedRun>,
}

impl ParseOutput {
    /// Total rendered length in characters.
    pub fn rendered_len(&self) -> usize {
        self.runs.iter().map(StyledRun::len).sum()
    }

    /// The rendered text with all styling discarded.
    pub fn rendered_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Whether this parse produced any obfuscated runs.
    pub fn has_obfuscation(&self) -> bool {
        !self.obfuscated.is_empty()
    }
}

/// Parses a coded buffer into styled runs.
///
/// The buffer is normalized to marker form first, so both encodings parse
/// identically. Adjacent flushes with the same resolved style and
/// obfuscation flag merge into one maximal run, and run positions tile the
/// rendered output exactly.
pub fn parse_runs(buffer: &str, encoding: Encoding) -> ParseOutput {
    let normalized = normalize_to_marker(buffer, encoding);

    let mut output = ParseOutput::default();
    let mut state = ActiveStyle::default();
    let mut pending = String::new();
    let mut cursor = 0;

    let mut chars = normalized.chars().peekable();
    while let Some(c) = chars.next() {
        if c != MARKER {
            pending.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some(value) => {
                chars.next();
                match FormatCode::from_char(value) {
                    Some(code) => {
                        flush(&mut output, &mut pending, &state, &mut cursor);
                        state.apply(code);
                    }
                    None => {
                        // Not a code: the marker and its trailing character
                        // are literal text.
                        pending.push(MARKER);
                        pending.push(value);
                    }
                }
            }
            // A lone marker at end of input is literal text.
            None => pending.push(MARKER),
        }
    }
    flush(&mut output, &mut pending, &state, &mut cursor);

    tracing::trace!(
        runs = output.runs.len(),
        obfuscated = output.obfuscated.len(),
        rendered_len = cursor,
        "parsed coded buffer"
    );
    output
}

/// Emits the pending accumulator as a run styled with the current state,
/// merging into the previous run when style and obfuscation flag match.
fn flush(output: &mut ParseOutput, pending: &mut String, state: &ActiveStyle, cursor: &mut usize) {
    if pending.is_empty() {
        return;
    }

    let len = pending.chars().count();
    let style = state.resolved();
    let obfuscated = state.obfuscate;
    let text = if obfuscated {
        pending.clear();
        scramble_text(len)
    } else {
        std::mem::take(pending)
    };

    if let Some(last) = output.runs.last_mut() {
        if last.style == style && last.obfuscated == obfuscated {
            last.text.push_str(&text);
            if obfuscated {
                if let Some(tracked) = output.obfuscated.last_mut() {
                    tracked.len += len;
                }
            }
            *cursor += len;
            return;
        }
    }

    if obfuscated {
        output.obfuscated.push(ObfuscatedRun {
            start: *cursor,
            len,
            style,
        });
    }
    output.runs.push(StyledRun {
        start: *cursor,
        text,
        style,
        obfuscated,
    });
    *cursor += len;
}
