// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Preview panel: a text approximation of the generated app.
//!
//! The real app is a component tree in the virtual workspace; the terminal
//! cannot run it, so the panel summarizes what would mount. Needs nothing
//! from the view controller beyond "mount when the preview view is active".

use crate::prompts::ENTRY_PATH;
use crate::vfs::Vfs;

/// Preview panel state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewPane {
    /// Whether the fixed entry point exists in the workspace.
    pub entry_present: bool,
    pub file_count: usize,
    /// Component names mounted beside the root, derived from file stems.
    pub components: Vec<String>,
}

impl PreviewPane {
    pub fn from_vfs(vfs: &Vfs) -> Self {
        let components = vfs
            .paths()
            .into_iter()
            .filter(|p| p != ENTRY_PATH)
            .filter_map(|p| {
                let name = p.rsplit('/').next()?;
                name.strip_suffix(".jsx").map(str::to_string)
            })
            .collect();

        Self {
            entry_present: vfs.contains(ENTRY_PATH),
            file_count: vfs.file_count(),
            components,
        }
    }

    /// Display lines for the panel body.
    pub fn lines(&self) -> Vec<String> {
        if !self.entry_present {
            return vec![
                String::new(),
                "  Nothing to preview yet.".to_string(),
                "  Ask for a component or a mini app to get started.".to_string(),
            ];
        }

        let mut lines = vec![
            String::new(),
            format!("  ▌ App · {} mounted", ENTRY_PATH),
            format!("  {} file(s) in the workspace", self.file_count),
        ];
        if !self.components.is_empty() {
            lines.push(String::new());
            for name in &self.components {
                lines.push(format!("  · <{name} />"));
            }
        }
        lines
    }
}

#[cfg(test)]
#[path = "preview_tests.rs"]
mod tests;
