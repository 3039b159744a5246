// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TUI color definitions and styled text helpers.
//!
//! All helpers take plain text and return ANSI-styled strings; callers are
//! responsible for skipping them when output is not a TTY.

/// Gray for version, model, hints: RGB(153, 153, 153)
pub const TEXT_GRAY: (u8, u8, u8) = (153, 153, 153);

/// Dark gray for separator lines: RGB(136, 136, 136)
pub const SEPARATOR_GRAY: (u8, u8, u8) = (136, 136, 136);

/// Green for completed tool badges: RGB(16, 185, 129)
pub const BADGE_COMPLETE: (u8, u8, u8) = (16, 185, 129);

/// Blue for in-flight tool badges and the responding spinner: RGB(37, 99, 235)
pub const BADGE_PENDING: (u8, u8, u8) = (37, 99, 235);

/// Amber for the workspace tab strip accent: RGB(217, 119, 87)
pub const TAB_ACCENT: (u8, u8, u8) = (217, 119, 87);

/// ANSI escape sequence helpers (public for reuse)
pub mod escape {
    /// 24-bit foreground color
    pub fn fg(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }

    /// Reset all attributes
    pub const RESET: &str = "\x1b[0m";

    /// Bold
    pub const BOLD: &str = "\x1b[1m";

    /// Dim
    pub const DIM: &str = "\x1b[2m";

    /// Inverse/reverse video
    pub const INVERSE: &str = "\x1b[7m";
}

/// Separator line in dark gray.
pub fn styled_separator(line: &str) -> String {
    let gray = escape::fg(SEPARATOR_GRAY.0, SEPARATOR_GRAY.1, SEPARATOR_GRAY.2);
    format!("{}{}{}", gray, line, escape::RESET)
}

/// Dim placeholder text for the empty input line.
pub fn styled_placeholder(text: &str) -> String {
    format!("{}❯ {}{}", escape::DIM, text, escape::RESET)
}

/// Hint text (status bar, shortcut reminders) in gray.
pub fn styled_hint(text: &str) -> String {
    let gray = escape::fg(TEXT_GRAY.0, TEXT_GRAY.1, TEXT_GRAY.2);
    format!("{}{}{}", gray, text, escape::RESET)
}

/// A single tab label; the active tab renders inverse + bold.
pub fn styled_tab_label(label: &str, selected: bool) -> String {
    if selected {
        let accent = escape::fg(TAB_ACCENT.0, TAB_ACCENT.1, TAB_ACCENT.2);
        format!(
            "{}{}{}[{}]{}",
            escape::BOLD,
            escape::INVERSE,
            accent,
            label,
            escape::RESET
        )
    } else {
        format!("{} {} {}", escape::DIM, label, escape::RESET)
    }
}

/// Solid dot for a completed tool badge.
pub fn styled_complete_indicator(glyph: &str) -> String {
    let green = escape::fg(BADGE_COMPLETE.0, BADGE_COMPLETE.1, BADGE_COMPLETE.2);
    format!("{}{}{}", green, glyph, escape::RESET)
}

/// Spinner frame for a pending tool badge or the responding status line.
pub fn styled_pending_indicator(glyph: &str) -> String {
    let blue = escape::fg(BADGE_PENDING.0, BADGE_PENDING.1, BADGE_PENDING.2);
    format!("{}{}{}", blue, glyph, escape::RESET)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
