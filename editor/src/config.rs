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

//! Editor session configuration

use minefmt_codec::Encoding;
use std::time::Duration;

/// Configuration for an editor session and its animator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    /// Period between obfuscation regeneration ticks.
    pub tick: Duration,

    /// Capacity of the animation frame channel. When the consumer falls
    /// behind, ticks are dropped rather than queued without bound.
    pub frame_capacity: usize,

    /// Encoding a new session starts in.
    pub default_encoding: Encoding,
}

impl EditorConfig {
    /// Creates a configuration with the default values.
    pub fn new() -> EditorConfig {
        EditorConfig {
            tick: Duration::from_millis(50),
            frame_capacity: 8,
            default_encoding: Encoding::Marker,
        }
    }

    /// Sets the animator tick period.
    pub fn with_tick(mut self, tick: Duration) -> EditorConfig {
        self.tick = tick;
        self
    }

    /// Sets the animation frame channel capacity.
    pub fn with_frame_capacity(mut self, capacity: usize) -> EditorConfig {
        self.frame_capacity = capacity.max(1);
        self
    }

    /// Sets the encoding a new session starts in.
    pub fn with_default_encoding(mut self, encoding: Encoding) -> EditorConfig {
        self.default_encoding = encoding;
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}
