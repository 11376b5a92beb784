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

//! Tests for the editor session interface

use minefmt_editor::{
    EditorError, EditorSession, Encoding, FormatCode, RunStyle, Selection, TextColor,
};
use tracing_test::traced_test;

#[test]
fn test_new_session_is_empty() {
    let session = EditorSession::new();
    assert_eq!(session.buffer(), "");
    assert_eq!(session.encoding(), Encoding::Marker);
    assert!(session.runs().is_empty());
    assert!(!session.is_animating());
}

#[test]
fn test_buffer_change_drives_preview() {
    let mut session = EditorSession::new();
    let runs = session.on_buffer_changed("\u{00A7}lHello \u{00A7}r\u{00A7}4World");
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].text, "Hello ");
    assert!(runs[0].style.bold);
    assert_eq!(runs[1].text, "World");
    assert_eq!(runs[1].style.color, Some(TextColor::DarkRed));
}

#[test]
fn test_buffer_change_replaces_previous_parse() {
    let mut session = EditorSession::new();
    session.on_buffer_changed("\u{00A7}4Old");
    let runs = session.on_buffer_changed("New");
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text, "New");
    assert!(runs[0].style.is_plain());
}

#[test]
fn test_mode_switch_translates_buffer() {
    let mut session = EditorSession::new();
    session.on_buffer_changed("\u{00A7}aHi");

    let escaped = session.on_mode_switch(true);
    assert_eq!(escaped, "\\u00A7aHi");
    assert_eq!(session.encoding(), Encoding::Escaped);

    let restored = session.on_mode_switch(false);
    assert_eq!(restored, "\u{00A7}aHi");
    assert_eq!(session.encoding(), Encoding::Marker);
}

#[test]
fn test_mode_switch_preserves_preview() {
    let mut session = EditorSession::new();
    session.on_buffer_changed("\u{00A7}aHi");
    let before: Vec<_> = session.runs().to_vec();
    session.on_mode_switch(true);
    assert_eq!(session.runs(), before.as_slice());
}

#[test]
fn test_mode_switch_to_current_mode_is_no_op() {
    let mut session = EditorSession::new();
    session.on_buffer_changed("\u{00A7}aHi");
    let buffer = session.on_mode_switch(false);
    assert_eq!(buffer, "\u{00A7}aHi");
}

#[test]
fn test_mode_switch_with_empty_buffer() {
    let mut session = EditorSession::new();
    let buffer = session.on_mode_switch(true);
    assert_eq!(buffer, "");
    assert_eq!(session.encoding(), Encoding::Escaped);
}

#[test]
fn test_toggle_through_session() {
    let mut session = EditorSession::new();
    session.on_buffer_changed("\u{00A7}4World");
    let buffer = session
        .on_toggle_requested(FormatCode::Bold, Selection::new(3, 8))
        .unwrap();
    assert_eq!(buffer, "\u{00A7}4\u{00A7}lWorld\u{00A7}r");

    // The preview reflects the new codes immediately.
    assert_eq!(session.runs().len(), 1);
    assert!(session.runs()[0].style.bold);
    assert_eq!(session.runs()[0].style.color, Some(TextColor::DarkRed));
}

#[test]
fn test_toggle_in_escaped_mode_uses_escaped_codes() {
    let mut session = EditorSession::new();
    session.on_buffer_changed("\u{00A7}4World");
    session.on_mode_switch(true);
    let buffer = session
        .on_toggle_requested(FormatCode::Bold, Selection::new(7, 12))
        .unwrap();
    assert_eq!(buffer, "\\u00A74\\u00A7lWorld\\u00A7r");
}

#[test]
fn test_toggle_error_leaves_buffer_unchanged() {
    let mut session = EditorSession::new();
    session.on_buffer_changed("Hello");
    let result = session.on_toggle_requested(FormatCode::Bold, Selection::new(2, 99));
    assert!(matches!(result, Err(EditorError::Codec(_))));
    assert_eq!(session.buffer(), "Hello");
}

#[traced_test]
#[test]
fn test_toggle_logs_operation() {
    let mut session = EditorSession::new();
    session.on_buffer_changed("\u{00A7}4World");
    session
        .on_toggle_requested(FormatCode::Bold, Selection::new(3, 8))
        .unwrap();
    assert!(logs_contain("applied format toggle"));
}

#[test]
fn test_insert_reset_through_session() {
    let mut session = EditorSession::new();
    session.on_buffer_changed("Hello");
    let buffer = session.insert_reset(Selection::caret(5)).unwrap();
    assert_eq!(buffer, "Hello\u{00A7}r");
}

#[test]
fn test_export_plain_text_is_raw_buffer() {
    let mut session = EditorSession::new();
    session.on_buffer_changed("\u{00A7}4\u{00A7}lWorld\u{00A7}r");
    assert_eq!(session.export_plain_text(), "\u{00A7}4\u{00A7}lWorld\u{00A7}r");
}

#[test]
fn test_reset_preview_selection_keeps_buffer() {
    let mut session = EditorSession::new();
    session.on_buffer_changed("\u{00A7}lHelloWorld");

    let runs = session
        .reset_preview_selection(Selection::new(2, 7))
        .unwrap();
    assert_eq!(runs.len(), 3);
    assert!(runs[0].style.bold);
    assert!(runs[1].style.is_plain());
    assert!(runs[2].style.bold);

    // The coded buffer is untouched by preview-only operations.
    assert_eq!(session.buffer(), "\u{00A7}lHelloWorld");
}

#[test]
fn test_apply_preview_style_keeps_buffer() {
    let mut session = EditorSession::new();
    session.on_buffer_changed("HelloWorld");

    let patch = RunStyle {
        underline: true,
        ..RunStyle::default()
    };
    let runs = session
        .apply_preview_style(Selection::new(0, 5), patch)
        .unwrap();
    assert!(runs[0].style.underline);
    assert_eq!(session.buffer(), "HelloWorld");
}

#[test]
fn test_preview_selection_out_of_bounds() {
    let mut session = EditorSession::new();
    session.on_buffer_changed("Hello");
    let result = session.reset_preview_selection(Selection::new(0, 10));
    assert!(matches!(
        result,
        Err(EditorError::PreviewRangeOutOfBounds { .. })
    ));
}

// ===== Animator Integration =====

#[tokio::test]
async fn test_obfuscated_parse_starts_animator() {
    let mut session = EditorSession::new();
    session.on_buffer_changed("\u{00A7}kHello");
    assert!(session.is_animating());
    assert!(session.animation_frames().is_some());
}

#[tokio::test]
async fn test_plain_parse_stops_animator() {
    let mut session = EditorSession::new();
    session.on_buffer_changed("\u{00A7}kHello");
    assert!(session.is_animating());

    session.on_buffer_changed("Hello");
    assert!(!session.is_animating());
    assert!(session.animation_frames().is_none());
}

#[tokio::test]
async fn test_reparse_replaces_animator() {
    let mut session = EditorSession::new();
    session.on_buffer_changed("\u{00A7}kHello");
    let mut old_frames = session.animation_frames().expect("animator running");

    // A new parse with obfuscation swaps in a fresh animator; the old
    // task is aborted and its channel closes.
    session.on_buffer_changed("\u{00A7}kWorld");
    assert!(session.is_animating());
    assert!(old_frames.recv().await.is_none());
}

#[tokio::test]
async fn test_animation_frames_taken_once() {
    let mut session = EditorSession::new();
    session.on_buffer_changed("\u{00A7}kHello");
    assert!(session.animation_frames().is_some());
    assert!(session.animation_frames().is_none());
}
