// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File tree panel for the code view.
//!
//! Pure projection of the virtual file tree into indented display lines with
//! a selection cursor. Mounted exactly when the code view is active.

use std::collections::BTreeSet;

use crate::vfs::Vfs;

/// Cursor prefix for the selected file.
const CURSOR: &str = "❯ ";

/// File tree panel state: one display line per directory or file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileTreePane {
    pub lines: Vec<String>,
}

impl FileTreePane {
    /// Project the tree, marking `selected` (a file path) with the cursor.
    pub fn from_vfs(vfs: &Vfs, selected: Option<&str>) -> Self {
        if vfs.is_empty() && vfs.dirs().is_empty() {
            return Self {
                lines: vec!["(no files yet)".to_string()],
            };
        }

        // Entries ordered by path; directories are explicit ones plus every
        // parent implied by a file path.
        let mut dirs: BTreeSet<String> = vfs.dirs().into_iter().collect();
        for path in vfs.paths() {
            let mut end = 0;
            for (i, c) in path.char_indices().skip(1) {
                if c == '/' {
                    end = i;
                    dirs.insert(path[..end].to_string());
                }
            }
        }

        let mut entries: Vec<(String, bool)> = dirs.into_iter().map(|d| (d, true)).collect();
        entries.extend(vfs.paths().into_iter().map(|p| (p, false)));
        entries.sort();

        let lines = entries
            .into_iter()
            .map(|(path, is_dir)| {
                let depth = path.matches('/').count().saturating_sub(1);
                let name = path.rsplit('/').next().unwrap_or(&path).to_string();
                let marker = if !is_dir && selected == Some(path.as_str()) {
                    CURSOR
                } else {
                    "  "
                };
                let suffix = if is_dir { "/" } else { "" };
                format!("{}{}{}{}", marker, "  ".repeat(depth), name, suffix)
            })
            .collect();

        Self { lines }
    }
}

#[cfg(test)]
#[path = "file_tree_tests.rs"]
mod tests;
