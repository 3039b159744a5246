// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conversation area rendering.
//!
//! Walks the session log and produces display lines: user prompts with the
//! `❯` prefix, assistant replies with the `⏺` prefix wrapped to the terminal
//! width, and one badge line per tool invocation.

use textwrap::Options;

use crate::session::{ChatEntry, SessionLog};
use crate::tui::widgets::tool_badge::badge_line;

/// Render the whole log as display lines.
pub fn conversation_lines(
    log: &SessionLog,
    width: usize,
    tick: u64,
    use_colors: bool,
) -> Vec<String> {
    let mut lines = Vec::new();

    for entry in log.entries() {
        match entry {
            ChatEntry::User(prompt) => {
                if !lines.is_empty() {
                    lines.push(String::new());
                }
                lines.push(format!("❯ {prompt}"));
            }
            ChatEntry::Assistant(text) => {
                lines.push(String::new());
                lines.extend(reply_lines(text, width));
            }
            ChatEntry::Tool(invocation) => {
                lines.push(format!("  {}", badge_line(invocation, tick, use_colors)));
            }
        }
    }

    lines
}

/// Wrap one assistant reply under the response indicator.
pub fn reply_lines(text: &str, width: usize) -> Vec<String> {
    let body_width = width.saturating_sub(2).max(20);
    let options = Options::new(body_width).subsequent_indent("  ");

    let mut lines = Vec::new();
    for (i, paragraph) in text.lines().enumerate() {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }
        for (j, wrapped) in textwrap::wrap(paragraph, &options).iter().enumerate() {
            if i == 0 && j == 0 {
                lines.push(format!("⏺ {wrapped}"));
            } else if j == 0 {
                lines.push(format!("  {wrapped}"));
            } else {
                lines.push(wrapped.to_string());
            }
        }
    }
    if lines.is_empty() {
        lines.push("⏺".to_string());
    }
    lines
}

#[cfg(test)]
#[path = "conversation_tests.rs"]
mod tests;
