// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn test_fg_escape_format() {
    assert_eq!(escape::fg(16, 185, 129), "\x1b[38;2;16;185;129m");
}

#[test]
fn test_styled_separator_wraps_with_reset() {
    let line = styled_separator("────");
    assert!(line.starts_with("\x1b[38;2;136;136;136m"));
    assert!(line.ends_with(escape::RESET));
    assert!(line.contains("────"));
}

#[test]
fn test_active_tab_is_inverse_and_bracketed() {
    let label = styled_tab_label("Preview", true);
    assert!(label.contains(escape::INVERSE));
    assert!(label.contains("[Preview]"));
}

#[test]
fn test_inactive_tab_is_dim_without_brackets() {
    let label = styled_tab_label("Code", false);
    assert!(label.contains(escape::DIM));
    assert!(!label.contains("[Code]"));
}

#[test]
fn test_indicator_colors() {
    assert!(styled_complete_indicator("●").contains("38;2;16;185;129"));
    assert!(styled_pending_indicator("✢").contains("38;2;37;99;235"));
}
