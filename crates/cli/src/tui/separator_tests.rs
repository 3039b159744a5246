// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn test_make_separator_width() {
    let sep = make_separator(10);
    assert_eq!(sep.chars().count(), 10);
    assert!(sep.chars().all(|c| c == SEPARATOR_CHAR));
}

#[test]
fn test_make_separator_zero_width() {
    assert_eq!(make_separator(0), "");
}

#[test]
fn test_compact_separator_centers_text() {
    let sep = make_compact_separator("Files", 21);
    assert_eq!(sep.chars().count(), 21);
    assert!(sep.contains(" Files "));
    assert!(sep.starts_with(COMPACT_SEPARATOR_CHAR));
    assert!(sep.ends_with(COMPACT_SEPARATOR_CHAR));
}

#[test]
fn test_compact_separator_narrow_width_keeps_text() {
    let sep = make_compact_separator("Preview", 4);
    assert_eq!(sep, " Preview ");
}
