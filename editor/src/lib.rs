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

mod animator;
mod config;
mod error;
mod preview;
mod session;

pub use self::animator::{AnimationFrame, AnimatorHandle, GlyphPatch, ObfuscationAnimator};
pub use self::config::EditorConfig;
pub use self::error::{EditorError, EditorResult};
pub use self::preview::{clear_style, merge_style, rendered_len};
pub use self::session::EditorSession;
pub use minefmt_codec::{
    CodecError, CodecResult, Encoding, FormatCode, ObfuscatedRun, ParseOutput, RunStyle, Selection,
    StyledRun, TextColor, parse_runs, to_escaped, to_marker, translate,
};

#[cfg(test)]
mod tests {

    #[test]
    fn test_module_exports_exist() {
        let _ = std::any::type_name::<super::EditorSession>();
        let _ = std::any::type_name::<super::EditorConfig>();
        let _ = std::any::type_name::<super::AnimationFrame>();
        let _ = std::any::type_name::<super::AnimatorHandle>();
        let _ = std::any::type_name::<super::EditorError>();
        let _ = std::any::type_name::<super::EditorResult<()>>();
    }
}
