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

//! The toggle engine: selection-aware code splicing.
//!
//! Given a coded buffer, a selection, and a requested code, the engine
//! computes the new buffer that applies the code over the selection while
//! keeping unrelated active styles intact.
//!
//! Color codes are a *replace*: the selection start expands leftward over
//! any immediately-preceding code tokens so an adjacent color prefix is
//! captured and swapped rather than stacked. Format codes are *additive*:
//! only the code prefix at the selection start is captured, reordered as
//! `colors + new code + formats`. Both paths append a single trailing
//! reset and collapse consecutive resets everywhere in the result.
//!
//! Code tokens are atomic: the engine steps by whole tokens in the current
//! encoding and never splits or partially duplicates one.

use crate::grammar::FormatCode;
use crate::result::CodecResult;
use crate::selection::Selection;
use crate::translate::Encoding;

/// Applies a format code over a selection, returning the new buffer.
///
/// A caret (empty selection) inserts the bare start token at the caret
/// position with no closing code, opening a style for subsequently typed
/// text; this is legal on an empty buffer. Range selections take the
/// color or format path described in the module docs. The buffer itself
/// is never interpreted strictly: unknown code characters are left
/// untouched as literal text. The only errors are selection precondition
/// violations, and on error the buffer is unchanged.
pub fn apply(
    buffer: &str,
    selection: Selection,
    code: FormatCode,
    encoding: Encoding,
) -> CodecResult<String> {
    selection.validate(buffer)?;

    let token = encoding.token();
    let start_code = format!("{token}{}", code.code_char());

    if selection.is_caret() {
        let mut out = String::with_capacity(buffer.len() + start_code.len());
        out.push_str(&buffer[..selection.start]);
        out.push_str(&start_code);
        out.push_str(&buffer[selection.start..]);
        return Ok(out);
    }

    let spliced = if code.is_color() {
        apply_color(buffer, selection, &start_code, encoding)
    } else {
        apply_format(buffer, selection, &start_code, encoding)
    };
    Ok(collapse_resets(&spliced, encoding))
}

/// Inserts a reset over the selection.
///
/// Equivalent to applying [`FormatCode::Reset`], which takes the format
/// path: a caret inserts a bare reset token, a range resets the selected
/// span and closes it with a single trailing reset.
pub fn insert_reset(buffer: &str, selection: Selection, encoding: Encoding) -> CodecResult<String> {
    apply(buffer, selection, FormatCode::Reset, encoding)
}

/// Color path: leftward expansion over adjacent code tokens, color
/// replacement within the captured prefix.
fn apply_color(buffer: &str, selection: Selection, start_code: &str, encoding: Encoding) -> String {
    let step = encoding.code_len();

    // Expand the selection start leftward over every immediately-preceding
    // valid code token so an existing color prefix belonging to this span
    // is captured rather than left orphaned outside it. One full token per
    // step, in the current encoding's token length.
    let mut expanded_start = selection.start;
    loop {
        let Some(previous) = expanded_start
            .checked_sub(step)
            .and_then(|from| buffer.get(from..expanded_start))
        else {
            break;
        };
        if code_char_of(previous, encoding).is_none() {
            break;
        }
        expanded_start -= step;
    }

    let before = &buffer[..expanded_start];
    let selected = &buffer[expanded_start..selection.end];
    let after = &buffer[selection.end..];

    // Strip color tokens from the captured prefix (color is exclusive),
    // keeping the format tokens, and lead with the new color.
    let tokens = leading_code_tokens(selected, encoding);
    let prefix_len = tokens.len() * step;
    let mut rebuilt = String::with_capacity(selected.len() + step);
    rebuilt.push_str(start_code);
    for &(text, value) in &tokens {
        if !FormatCode::is_color_char(value) {
            rebuilt.push_str(text);
        }
    }
    rebuilt.push_str(&selected[prefix_len..]);

    splice_with_reset(before, &rebuilt, after, encoding)
}

/// Format path: no leftward expansion; the captured prefix is reordered as
/// `colors + new code + formats`, with any reset codes dropped.
fn apply_format(buffer: &str, selection: Selection, start_code: &str, encoding: Encoding) -> String {
    let step = encoding.code_len();

    let before = &buffer[..selection.start];
    let selected = &buffer[selection.start..selection.end];
    let after = &buffer[selection.end..];

    let tokens = leading_code_tokens(selected, encoding);
    let prefix_len = tokens.len() * step;

    let mut color_prefix = String::new();
    let mut format_prefix = String::new();
    for &(text, value) in &tokens {
        match value {
            // We are adding a new toggle, not resetting.
            'r' => {}
            value if FormatCode::is_color_char(value) => color_prefix.push_str(text),
            _ => format_prefix.push_str(text),
        }
    }

    let mut rebuilt =
        String::with_capacity(color_prefix.len() + start_code.len() + selected.len());
    rebuilt.push_str(&color_prefix);
    rebuilt.push_str(start_code);
    rebuilt.push_str(&format_prefix);
    rebuilt.push_str(&selected[prefix_len..]);

    splice_with_reset(before, &rebuilt, after, encoding)
}

/// Reassembles `before + selected + reset + after`, trimming trailing
/// resets already inside the selection and leading resets in the untouched
/// tail so the single appended reset replaces them.
fn splice_with_reset(before: &str, selected: &str, after: &str, encoding: Encoding) -> String {
    let reset = reset_token(encoding);

    let mut trimmed_selected = selected;
    while let Some(rest) = trimmed_selected.strip_suffix(reset.as_str()) {
        trimmed_selected = rest;
    }
    let mut trimmed_after = after;
    while let Some(rest) = trimmed_after.strip_prefix(reset.as_str()) {
        trimmed_after = rest;
    }

    let mut out =
        String::with_capacity(before.len() + trimmed_selected.len() + reset.len() + after.len());
    out.push_str(before);
    out.push_str(trimmed_selected);
    out.push_str(&reset);
    out.push_str(trimmed_after);
    out
}

/// Collapses every consecutive repetition of the reset token to a single
/// reset.
fn collapse_resets(buffer: &str, encoding: Encoding) -> String {
    let reset = reset_token(encoding);
    let doubled = format!("{reset}{reset}");
    let mut out = buffer.to_string();
    while out.contains(&doubled) {
        out = out.replace(&doubled, &reset);
    }
    out
}

fn reset_token(encoding: Encoding) -> String {
    format!("{}{}", encoding.token(), FormatCode::Reset.code_char())
}

/// The code character of a full code token, or `None` if the slice is not
/// exactly one valid token in this encoding.
fn code_char_of(token: &str, encoding: Encoding) -> Option<char> {
    let rest = token.strip_prefix(encoding.token())?;
    let mut chars = rest.chars();
    let value = chars.next()?;
    if chars.next().is_none() && FormatCode::is_code_char(value) {
        Some(value)
    } else {
        None
    }
}

/// The run of valid code tokens at the start of a slice, as
/// `(token text, code character)` pairs.
fn leading_code_tokens(selected: &str, encoding: Encoding) -> Vec<(&str, char)> {
    let step = encoding.code_len();
    let mut tokens = Vec::new();
    let mut pos = 0;
    while let Some(text) = selected.get(pos..pos + step) {
        match code_char_of(text, encoding) {
            Some(value) => {
                tokens.push((text, value));
                pos += step;
            }
            None => break,
        }
    }
    tokens
}
