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

//! Preview-only style operations.
//!
//! These transform the *rendered* run list without ever touching the coded
//! buffer: the selection-reset and selection-style affordances of the
//! preview pane. Runs are split at the selection's character boundaries,
//! the covered parts are restyled, and adjacent equal-style pieces are
//! re-merged so the maximality invariant holds on the way out. The next
//! full parse of the coded buffer supersedes anything done here.

use crate::error::{EditorError, EditorResult};
use minefmt_codec::{CodecError, RunStyle, Selection, StyledRun};

/// Clears all style attributes (and the obfuscation flag) over a selection
/// of the rendered output.
pub fn clear_style(runs: &[StyledRun], selection: Selection) -> EditorResult<Vec<StyledRun>> {
    validate(runs, selection)?;
    Ok(map_range(runs, selection, |_, _| (RunStyle::default(), false)))
}

/// Merges style attributes into a selection of the rendered output.
///
/// Format flags are OR-ed; a color in the patch replaces the run's color,
/// no color leaves it unchanged. Obfuscation flags are untouched.
pub fn merge_style(
    runs: &[StyledRun],
    selection: Selection,
    patch: RunStyle,
) -> EditorResult<Vec<StyledRun>> {
    validate(runs, selection)?;
    Ok(map_range(runs, selection, |style, obfuscated| {
        (
            RunStyle {
                color: patch.color.or(style.color),
                bold: style.bold || patch.bold,
                italic: style.italic || patch.italic,
                underline: style.underline || patch.underline,
                strikethrough: style.strikethrough || patch.strikethrough,
            },
            obfuscated,
        )
    }))
}

/// Total rendered length of a run list in characters.
pub fn rendered_len(runs: &[StyledRun]) -> usize {
    runs.last().map(StyledRun::end).unwrap_or(0)
}

fn validate(runs: &[StyledRun], selection: Selection) -> EditorResult<()> {
    if selection.start > selection.end {
        return Err(EditorError::Codec(CodecError::InvertedRange {
            start: selection.start,
            end: selection.end,
        }));
    }
    let max = rendered_len(runs);
    if selection.end > max {
        return Err(EditorError::PreviewRangeOutOfBounds {
            start: selection.start,
            end: selection.end,
            max,
        });
    }
    Ok(())
}

fn map_range<F>(runs: &[StyledRun], selection: Selection, restyle: F) -> Vec<StyledRun>
where
    F: Fn(RunStyle, bool) -> (RunStyle, bool),
{
    if selection.is_caret() {
        return runs.to_vec();
    }

    let mut out: Vec<StyledRun> = Vec::with_capacity(runs.len() + 2);
    for run in runs {
        let run_start = run.start;
        let run_end = run.end();
        let covered_start = selection.start.clamp(run_start, run_end);
        let covered_end = selection.end.clamp(run_start, run_end);
        if covered_start >= covered_end {
            push_merged(&mut out, run.clone());
            continue;
        }

        let chars: Vec<char> = run.text.chars().collect();
        let head: String = chars[..covered_start - run_start].iter().collect();
        let mid: String = chars[covered_start - run_start..covered_end - run_start]
            .iter()
            .collect();
        let tail: String = chars[covered_end - run_start..].iter().collect();

        if !head.is_empty() {
            push_merged(
                &mut out,
                StyledRun {
                    start: run_start,
                    text: head,
                    style: run.style,
                    obfuscated: run.obfuscated,
                },
            );
        }
        let (style, obfuscated) = restyle(run.style, run.obfuscated);
        push_merged(
            &mut out,
            StyledRun {
                start: covered_start,
                text: mid,
                style,
                obfuscated,
            },
        );
        if !tail.is_empty() {
            push_merged(
                &mut out,
                StyledRun {
                    start: covered_end,
                    text: tail,
                    style: run.style,
                    obfuscated: run.obfuscated,
                },
            );
        }
    }
    out
}

fn push_merged(out: &mut Vec<StyledRun>, run: StyledRun) {
    if let Some(last) = out.last_mut() {
        if last.style == run.style && last.obfuscated == run.obfuscated && last.end() == run.start {
            last.text.push_str(&run.text);
            return;
        }
    }
    out.push(run);
}
