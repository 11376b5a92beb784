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

mod consts;
mod grammar;
mod parser;
mod result;
mod scramble;
mod selection;
mod style;
pub mod toggle;
mod translate;

pub use self::consts::{ESCAPE_TOKEN, MARKER, MARKER_STR, SCRAMBLE_ALPHABET};
pub use self::grammar::{FormatCode, TextColor};
pub use self::parser::{ParseOutput, parse_runs};
pub use self::result::{CodecError, CodecResult};
pub use self::scramble::scramble_text;
pub use self::selection::Selection;
pub use self::style::{ActiveStyle, ObfuscatedRun, RunStyle, StyledRun};
pub use self::translate::{Encoding, normalize_to_marker, to_escaped, to_marker, translate};

#[cfg(test)]
mod tests {

    #[test]
    fn test_module_exports_exist() {
        let _ = std::any::type_name::<super::FormatCode>();
        let _ = std::any::type_name::<super::ParseOutput>();
        let _ = std::any::type_name::<super::Selection>();
        let _ = std::any::type_name::<super::StyledRun>();
        let _ = std::any::type_name::<super::CodecResult<()>>();
    }
}
