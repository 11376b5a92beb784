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

//! The obfuscation animator.
//!
//! After a parse yields obfuscated runs, the animator regenerates their
//! glyphs on a fixed tick without re-parsing and without touching any
//! other run. It is either Idle (no tracked runs, no task) or Running
//! (one timer task feeding a frame channel); the spawned task's handle is
//! the disposal handle, aborted on [`AnimatorHandle::stop`] or drop, so
//! replacing an animator atomically cancels the previous tick source.

use crate::config::EditorConfig;
use minefmt_codec::{ObfuscatedRun, RunStyle, scramble_text};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// Replacement glyphs for one obfuscated run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphPatch {
    /// Start position of the run in rendered characters.
    pub start: usize,
    /// Number of glyphs replaced.
    pub len: usize,
    /// Fresh scratch glyphs for the run.
    pub text: String,
    /// The run's recorded style, reapplied unchanged.
    pub style: RunStyle,
}

/// One animation tick: fresh glyphs for every tracked run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationFrame {
    /// Patches in rendered order, one per tracked run.
    pub patches: Vec<GlyphPatch>,
}

impl AnimationFrame {
    /// Generates a frame of fresh glyphs for the tracked runs.
    ///
    /// Pure apart from the glyph randomness: positions, lengths, and
    /// styles always mirror the tracked runs exactly.
    pub fn generate(runs: &[ObfuscatedRun]) -> AnimationFrame {
        AnimationFrame {
            patches: runs
                .iter()
                .map(|run| GlyphPatch {
                    start: run.start,
                    len: run.len,
                    text: scramble_text(run.len),
                    style: run.style,
                })
                .collect(),
        }
    }
}

/// Disposal handle for a running animator task.
///
/// Dropping the handle aborts the task, which closes the frame channel.
#[derive(Debug)]
pub struct AnimatorHandle {
    task: JoinHandle<()>,
}

impl AnimatorHandle {
    /// Stops the animator task.
    pub fn stop(self) {
        self.task.abort();
    }

    /// Whether the task has already terminated.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for AnimatorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawns the periodic regeneration task for obfuscated runs.
pub struct ObfuscationAnimator;

impl ObfuscationAnimator {
    /// Starts animating the given runs, if there are any.
    ///
    /// Returns `None` (Idle) when `runs` is empty. Otherwise spawns a
    /// timer task on the current Tokio runtime that emits an
    /// [`AnimationFrame`] every `config.tick`; a slow consumer causes
    /// ticks to be dropped, never queued without bound, and a closed
    /// receiver ends the task.
    pub fn spawn(
        runs: Vec<ObfuscatedRun>,
        config: &EditorConfig,
    ) -> Option<(AnimatorHandle, mpsc::Receiver<AnimationFrame>)> {
        if runs.is_empty() {
            return None;
        }

        let (frame_tx, frame_rx) = mpsc::channel(config.frame_capacity);
        let tick = config.tick;
        debug!(runs = runs.len(), tick_ms = tick.as_millis() as u64, "starting obfuscation animator");

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of a fresh interval completes immediately;
            // consume it so frames start one period after spawn.
            interval.tick().await;
            loop {
                interval.tick().await;
                let frame = AnimationFrame::generate(&runs);
                match frame_tx.try_send(frame) {
                    Ok(()) => {}
                    Err(mpsc::error::TrySendError::Full(_)) => {
                        // Consumer is behind; skip this tick.
                    }
                    Err(mpsc::error::TrySendError::Closed(_)) => {
                        debug!("animation frame channel closed, stopping animator");
                        break;
                    }
                }
            }
        });

        Some((AnimatorHandle { task }, frame_rx))
    }
}
