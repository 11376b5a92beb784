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

//! The editor session: the single owner of all mutable editor state.
//!
//! A session holds the current coded buffer, the current encoding, the
//! run list of the last parse, and the animator slot. Every mutation goes
//! through `&mut self`, which serializes buffer edits, parses, and toggle
//! operations; the only asynchronous activity is the animator task, whose
//! handle is swapped atomically on every reparse.
//!
//! Animator swapping uses the current Tokio runtime, so a session must
//! live on one.

use crate::animator::{AnimationFrame, AnimatorHandle, ObfuscationAnimator};
use crate::config::EditorConfig;
use crate::error::EditorResult;
use crate::preview;
use minefmt_codec::toggle;
use minefmt_codec::{Encoding, FormatCode, RunStyle, Selection, StyledRun, parse_runs, translate};
use tokio::sync::mpsc;
use tracing::debug;

/// An editor session over one coded buffer.
#[derive(Debug)]
pub struct EditorSession {
    /// Session configuration.
    config: EditorConfig,
    /// The raw coded buffer, exactly as the user typed it.
    buffer: String,
    /// Current code encoding of the buffer.
    encoding: Encoding,
    /// Styled runs from the most recent parse.
    runs: Vec<StyledRun>,
    /// Running animator, if the last parse had obfuscated runs.
    animator: Option<AnimatorHandle>,
    /// Frame channel for the running animator, until taken by the UI.
    frames: Option<mpsc::Receiver<AnimationFrame>>,
}

impl EditorSession {
    /// Creates a session with the default configuration.
    pub fn new() -> EditorSession {
        EditorSession::with_config(EditorConfig::default())
    }

    /// Creates a session with the given configuration.
    pub fn with_config(config: EditorConfig) -> EditorSession {
        EditorSession {
            encoding: config.default_encoding,
            config,
            buffer: String::new(),
            runs: Vec::new(),
            animator: None,
            frames: None,
        }
    }

    // ===== State Accessors =====

    /// The raw coded buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The current encoding.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Styled runs from the most recent parse.
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Whether an obfuscation animator is currently running.
    pub fn is_animating(&self) -> bool {
        self.animator
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    // ===== External Interface =====

    /// Replaces the buffer and reparses, driving the live preview.
    ///
    /// Called on every keystroke. The previous animator is stopped before
    /// the new parse becomes observable, and a new one starts only when
    /// the parse yields obfuscated runs. The returned run list replaces
    /// the rendered content wholesale.
    pub fn on_buffer_changed(&mut self, text: &str) -> &[StyledRun] {
        self.buffer.clear();
        self.buffer.push_str(text);
        self.reparse();
        &self.runs
    }

    /// Applies a format code over a selection of the coded buffer.
    ///
    /// Called by each format and color control. On success the buffer is
    /// replaced and reparsed; on a precondition violation the buffer is
    /// unchanged.
    pub fn on_toggle_requested(
        &mut self,
        code: FormatCode,
        selection: Selection,
    ) -> EditorResult<&str> {
        let next = toggle::apply(&self.buffer, selection, code, self.encoding)?;
        debug!(
            code = %code.code_char(),
            start = selection.start,
            end = selection.end,
            "applied format toggle"
        );
        self.buffer = next;
        self.reparse();
        Ok(&self.buffer)
    }

    /// Inserts a reset over a selection of the coded buffer.
    pub fn insert_reset(&mut self, selection: Selection) -> EditorResult<&str> {
        let next = toggle::insert_reset(&self.buffer, selection, self.encoding)?;
        self.buffer = next;
        self.reparse();
        Ok(&self.buffer)
    }

    /// Switches between the chat and MOTD encodings.
    ///
    /// Existing codes are translated, never discarded; a non-empty buffer
    /// is rewritten into the target encoding and reparsed. Switching to
    /// the encoding already in effect is a no-op on the buffer text.
    pub fn on_mode_switch(&mut self, to_escaped: bool) -> &str {
        let target = if to_escaped {
            Encoding::Escaped
        } else {
            Encoding::Marker
        };
        debug!(?target, "switching encoding");
        self.encoding = target;
        if !self.buffer.is_empty() {
            self.buffer = translate(&self.buffer, target);
        }
        self.reparse();
        &self.buffer
    }

    /// The raw coded buffer, for export (e.g. copy to clipboard).
    pub fn export_plain_text(&self) -> &str {
        &self.buffer
    }

    /// Takes the frame channel of the running animator, if any.
    ///
    /// The receiver yields one [`AnimationFrame`] per tick until the next
    /// reparse stops the animator.
    pub fn animation_frames(&mut self) -> Option<mpsc::Receiver<AnimationFrame>> {
        self.frames.take()
    }

    // ===== Preview-Only Styling =====

    /// Clears the rendered preview's style attributes over a selection
    /// without altering the coded buffer.
    ///
    /// The selection addresses rendered characters. A caret is a no-op.
    pub fn reset_preview_selection(&mut self, selection: Selection) -> EditorResult<&[StyledRun]> {
        self.runs = preview::clear_style(&self.runs, selection)?;
        Ok(&self.runs)
    }

    /// Merges style attributes into the rendered preview over a selection
    /// without altering the coded buffer.
    pub fn apply_preview_style(
        &mut self,
        selection: Selection,
        patch: RunStyle,
    ) -> EditorResult<&[StyledRun]> {
        self.runs = preview::merge_style(&self.runs, selection, patch)?;
        Ok(&self.runs)
    }

    // ===== Internals =====

    /// Reparses the current buffer and swaps the animator.
    ///
    /// The old animator is dropped (aborting its task) before the new one
    /// spawns, so at most one tick source is ever live.
    fn reparse(&mut self) {
        self.animator = None;
        self.frames = None;

        let output = parse_runs(&self.buffer, self.encoding);
        self.runs = output.runs;

        if let Some((handle, frames)) = ObfuscationAnimator::spawn(output.obfuscated, &self.config)
        {
            self.animator = Some(handle);
            self.frames = Some(frames);
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
