// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use std::io::Write;

#[test]
fn test_begin_drains_queue_into_staged_input() {
    let queue = InputQueue::new();
    queue.push_all(["2", "newtitle"]);
    let mut capture = StreamCapture::new();

    let mut scope = capture.begin(&queue).unwrap();

    assert!(queue.is_empty());
    assert_eq!(scope.pending_input(), 2);
    assert_eq!(scope.read_line(), Some("2".to_string()));
    assert_eq!(scope.read_line(), Some("newtitle".to_string()));
    assert_eq!(scope.read_line(), None);
}

#[test]
fn test_begin_with_empty_queue_stages_no_input() {
    let queue = InputQueue::new();
    let mut capture = StreamCapture::new();

    let mut scope = capture.begin(&queue).unwrap();

    assert_eq!(scope.pending_input(), 0);
    assert_eq!(scope.read_line(), None);
}

#[test]
fn test_second_begin_while_active_fails() {
    let queue = InputQueue::new();
    let mut capture = StreamCapture::new();

    let _scope = capture.begin(&queue).unwrap();
    let err = capture.begin(&queue).unwrap_err();

    assert_eq!(err, CaptureError::AlreadyActive);
    assert!(capture.is_active());
}

#[test]
fn test_end_returns_written_text_and_releases_controller() {
    let queue = InputQueue::new();
    let mut capture = StreamCapture::new();

    let mut scope = capture.begin(&queue).unwrap();
    writeln!(scope.stdout(), "to stdout").unwrap();
    writeln!(scope.stderr(), "Error: to stderr").unwrap();
    let streams = capture.end(scope);

    assert_eq!(streams.stdout, "to stdout\n");
    assert_eq!(streams.stderr, "Error: to stderr\n");
    assert!(!capture.is_active());
}

#[test]
fn test_scopes_do_not_leak_between_invocations() {
    let queue = InputQueue::new();
    let mut capture = StreamCapture::new();

    let mut first = capture.begin(&queue).unwrap();
    writeln!(first.stdout(), "first run").unwrap();
    let first_streams = capture.end(first);

    let second = capture.begin(&queue).unwrap();
    let second_streams = capture.end(second);

    assert!(first_streams.stdout.contains("first run"));
    assert_eq!(second_streams.stdout, "");
    assert_eq!(second_streams.stderr, "");
}

#[test]
fn test_input_staged_at_begin_is_not_reread_by_later_scopes() {
    let queue = InputQueue::new();
    queue.push("only-once");
    let mut capture = StreamCapture::new();

    let mut first = capture.begin(&queue).unwrap();
    assert_eq!(first.read_line(), Some("only-once".to_string()));
    capture.end(first);

    let mut second = capture.begin(&queue).unwrap();
    assert_eq!(second.read_line(), None);
    capture.end(second);
}

#[test]
fn test_unread_staged_input_is_dropped_with_the_scope() {
    let queue = InputQueue::new();
    queue.push_all(["a", "b"]);
    let mut capture = StreamCapture::new();

    let scope = capture.begin(&queue).unwrap();
    capture.end(scope);

    assert!(queue.is_empty());
    let mut next = capture.begin(&queue).unwrap();
    assert_eq!(next.read_line(), None);
}

#[test]
fn test_controller_is_reusable_after_error_path() {
    // A dispatch that fails mid-handler still ends its scope before
    // propagating; the controller must accept the next begin.
    let queue = InputQueue::new();
    let mut capture = StreamCapture::new();

    let mut scope = capture.begin(&queue).unwrap();
    writeln!(scope.stderr(), "Error: handler gave up").unwrap();
    let streams = capture.end(scope);
    assert!(streams.stderr.starts_with("Error:"));

    assert!(capture.begin(&queue).is_ok());
}

#[test]
fn test_capture_error_display() {
    let err = CaptureError::AlreadyActive;
    assert_eq!(
        err.to_string(),
        "a stream capture is already active on this context"
    );
}
