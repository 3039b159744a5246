// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Code editor panel for the code view.
//!
//! Read-only, line-numbered view of the selected file. Mounted exactly when
//! the code view is active.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Code editor panel state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorPane {
    /// Path shown in the panel header, if a file is selected.
    pub path: Option<String>,
    /// Line-numbered display lines.
    pub lines: Vec<String>,
}

impl EditorPane {
    /// Project a file into numbered display lines, truncated to `width`.
    pub fn from_file(path: &str, contents: &str, width: usize) -> Self {
        let gutter = 6; // "  1 │ "
        let body_width = width.saturating_sub(gutter).max(8);

        let mut lines: Vec<String> = contents
            .lines()
            .enumerate()
            .map(|(i, line)| format!("{:>3} │ {}", i + 1, truncate_display(line, body_width)))
            .collect();
        if lines.is_empty() {
            lines.push("  1 │".to_string());
        }

        Self {
            path: Some(path.to_string()),
            lines,
        }
    }

    /// Panel shown when nothing is selected yet.
    pub fn empty() -> Self {
        Self {
            path: None,
            lines: vec!["(select a file with ↑/↓)".to_string()],
        }
    }

    /// Header line for the panel.
    pub fn header(&self) -> String {
        self.path.clone().unwrap_or_else(|| "(no file)".to_string())
    }
}

/// Truncate to a display width, appending an ellipsis when trimmed.
fn truncate_display(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "code_editor_tests.rs"]
mod tests;
