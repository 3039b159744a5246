// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Virtual file tree the assistant works against.
//!
//! Paths are absolute ("/App.jsx", "/components/Button.jsx") and nothing ever
//! touches the host file system. The tree interprets classified tool actions
//! and reports a short outcome string that becomes the invocation's result
//! payload.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};
use tracing::debug;

use crate::tui::widgets::tool_badge::{
    EditorCommand, FileManagerCommand, ToolAction, ToolInvocation,
};

/// Outcome of applying one tool action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub summary: String,
    pub changed: bool,
}

impl ApplyOutcome {
    fn changed(summary: String) -> Self {
        Self {
            summary,
            changed: true,
        }
    }

    fn unchanged(summary: String) -> Self {
        Self {
            summary,
            changed: false,
        }
    }

    /// The outcome as an invocation result payload.
    pub fn into_value(self) -> Value {
        Value::String(self.summary)
    }
}

/// Snapshot of the last editor mutation, for `undo_edit`.
#[derive(Clone, Debug)]
struct LastEdit {
    path: String,
    /// Contents before the mutation; `None` means the file did not exist.
    previous: Option<String>,
}

/// The virtual file tree: file contents plus explicitly created directories.
#[derive(Clone, Debug, Default)]
pub struct Vfs {
    files: BTreeMap<String, String>,
    dirs: BTreeSet<String>,
    last_edit: Option<LastEdit>,
}

impl Vfs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// All file paths in tree order.
    pub fn paths(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    /// All explicitly created directories in tree order.
    pub fn dirs(&self) -> Vec<String> {
        self.dirs.iter().cloned().collect()
    }

    /// Apply one invocation to the tree.
    pub fn apply(&mut self, invocation: &ToolInvocation) -> ApplyOutcome {
        let action = ToolAction::classify(invocation);
        debug!(tool = %invocation.tool_name, "applying tool action");
        match action {
            ToolAction::Editor { command, path } => {
                self.apply_editor(command, path, invocation.args.as_ref())
            }
            ToolAction::FileManager { command, path } => {
                self.apply_file_manager(command, path, invocation.args.as_ref())
            }
            ToolAction::Unrecognized { name } => {
                ApplyOutcome::unchanged(format!("No handler for {name}"))
            }
        }
    }

    fn apply_editor(
        &mut self,
        command: EditorCommand,
        path: Option<String>,
        args: Option<&Map<String, Value>>,
    ) -> ApplyOutcome {
        let Some(path) = path.map(|p| normalize(&p)) else {
            return ApplyOutcome::unchanged("Missing path".to_string());
        };

        match command {
            EditorCommand::Create => {
                let text = extract_str(args, "file_text").unwrap_or_default();
                self.remember(&path);
                self.files.insert(path.clone(), text.to_string());
                ApplyOutcome::changed(format!("Created {path}"))
            }
            EditorCommand::StrReplace => {
                let old = extract_str(args, "old_str").unwrap_or_default();
                let new = extract_str(args, "new_str").unwrap_or_default();
                let Some(contents) = self.files.get(&path).cloned() else {
                    return ApplyOutcome::unchanged(format!("No such file {path}"));
                };
                if old.is_empty() || !contents.contains(old) {
                    return ApplyOutcome::unchanged(format!("No match in {path}"));
                }
                self.remember(&path);
                self.files.insert(path.clone(), contents.replacen(old, new, 1));
                ApplyOutcome::changed(format!("Edited {path}"))
            }
            EditorCommand::Insert => {
                let new = extract_str(args, "new_str").unwrap_or_default();
                let line = args
                    .and_then(|a| a.get("insert_line"))
                    .and_then(Value::as_u64)
                    .unwrap_or(0) as usize;
                let Some(contents) = self.files.get(&path).cloned() else {
                    return ApplyOutcome::unchanged(format!("No such file {path}"));
                };
                self.remember(&path);
                let mut lines: Vec<&str> = contents.lines().collect();
                let at = line.min(lines.len());
                lines.insert(at, new);
                self.files.insert(path.clone(), lines.join("\n"));
                ApplyOutcome::changed(format!("Inserted into {path}"))
            }
            EditorCommand::View => {
                if self.files.contains_key(&path) || self.is_dir(&path) {
                    ApplyOutcome::unchanged(format!("Viewed {path}"))
                } else {
                    ApplyOutcome::unchanged(format!("No such file {path}"))
                }
            }
            EditorCommand::UndoEdit => match self.last_edit.take() {
                Some(edit) => {
                    let undone = edit.path.clone();
                    match edit.previous {
                        Some(previous) => self.files.insert(edit.path, previous),
                        None => self.files.remove(&edit.path),
                    };
                    ApplyOutcome::changed(format!("Undid changes to {undone}"))
                }
                None => ApplyOutcome::unchanged("Nothing to undo".to_string()),
            },
            EditorCommand::Other(command) => {
                debug!(%command, "unsupported editor command");
                ApplyOutcome::unchanged(format!("Skipped unsupported command on {path}"))
            }
        }
    }

    fn apply_file_manager(
        &mut self,
        command: FileManagerCommand,
        path: Option<String>,
        args: Option<&Map<String, Value>>,
    ) -> ApplyOutcome {
        match command {
            FileManagerCommand::CreateDirectory => {
                let Some(path) = path.map(|p| normalize(&p)) else {
                    return ApplyOutcome::unchanged("Missing path".to_string());
                };
                self.dirs.insert(path.clone());
                ApplyOutcome::changed(format!("Created directory {path}"))
            }
            FileManagerCommand::Delete => {
                let Some(path) = path.map(|p| normalize(&p)) else {
                    return ApplyOutcome::unchanged("Missing path".to_string());
                };
                if self.files.remove(&path).is_some() {
                    return ApplyOutcome::changed(format!("Deleted {path}"));
                }
                if self.is_dir(&path) {
                    let prefix = child_prefix(&path);
                    self.files.retain(|p, _| !p.starts_with(&prefix));
                    self.dirs
                        .retain(|d| d != &path && !d.starts_with(&prefix));
                    return ApplyOutcome::changed(format!("Deleted {path}"));
                }
                ApplyOutcome::unchanged(format!("No such path {path}"))
            }
            FileManagerCommand::Rename => {
                let Some(path) = path.map(|p| normalize(&p)) else {
                    return ApplyOutcome::unchanged("Missing path".to_string());
                };
                let Some(target) = extract_str(args, "new_path").map(normalize) else {
                    return ApplyOutcome::unchanged("Missing new_path".to_string());
                };
                if let Some(contents) = self.files.remove(&path) {
                    self.files.insert(target.clone(), contents);
                    return ApplyOutcome::changed(format!("Renamed {path} to {target}"));
                }
                if self.is_dir(&path) {
                    let prefix = child_prefix(&path);
                    let moved: Vec<(String, String)> = self
                        .files
                        .iter()
                        .filter(|(p, _)| p.starts_with(&prefix))
                        .map(|(p, c)| (p.clone(), c.clone()))
                        .collect();
                    for (old_path, contents) in moved {
                        let new_path =
                            format!("{}{}", child_prefix(&target), &old_path[prefix.len()..]);
                        self.files.remove(&old_path);
                        self.files.insert(new_path, contents);
                    }
                    self.dirs.remove(&path);
                    self.dirs.insert(target.clone());
                    return ApplyOutcome::changed(format!("Renamed {path} to {target}"));
                }
                ApplyOutcome::unchanged(format!("No such path {path}"))
            }
            FileManagerCommand::List => {
                let path = match path.map(|p| normalize(&p)) {
                    Some(p) if !p.is_empty() => p,
                    _ => "/".to_string(),
                };
                let entries = self.children(&path);
                let listing = if entries.is_empty() {
                    "(empty)".to_string()
                } else {
                    entries.join(", ")
                };
                ApplyOutcome::unchanged(format!("Listed {path}: {listing}"))
            }
            FileManagerCommand::Other(command) => {
                debug!(%command, "unsupported file manager command");
                ApplyOutcome::unchanged("Skipped unsupported command".to_string())
            }
        }
    }

    /// Direct children of a directory: file names, plus directory names with
    /// a trailing slash.
    pub fn children(&self, path: &str) -> Vec<String> {
        let prefix = child_prefix(&normalize(path));
        let mut entries = BTreeSet::new();

        for file in self.files.keys() {
            if let Some(rest) = file.strip_prefix(&prefix) {
                match rest.split_once('/') {
                    Some((dir, _)) => entries.insert(format!("{dir}/")),
                    None => entries.insert(rest.to_string()),
                };
            }
        }
        for dir in &self.dirs {
            if let Some(rest) = dir.strip_prefix(&prefix) {
                if !rest.is_empty() && !rest.contains('/') {
                    entries.insert(format!("{rest}/"));
                }
            }
        }

        entries.into_iter().collect()
    }

    fn is_dir(&self, path: &str) -> bool {
        if path == "/" {
            return true;
        }
        if self.dirs.contains(path) {
            return true;
        }
        let prefix = child_prefix(path);
        self.files.keys().any(|p| p.starts_with(&prefix))
            || self.dirs.iter().any(|d| d.starts_with(&prefix))
    }

    fn remember(&mut self, path: &str) {
        self.last_edit = Some(LastEdit {
            path: path.to_string(),
            previous: self.files.get(path).cloned(),
        });
    }
}

/// Strip a trailing slash, keeping the root as "/".
fn normalize(path: &str) -> String {
    if path.len() > 1 {
        path.trim_end_matches('/').to_string()
    } else {
        path.to_string()
    }
}

/// The prefix that direct and nested children of `path` start with.
fn child_prefix(path: &str) -> String {
    if path == "/" {
        "/".to_string()
    } else {
        format!("{path}/")
    }
}

fn extract_str<'a>(args: Option<&'a Map<String, Value>>, key: &str) -> Option<&'a str> {
    args.and_then(|a| a.get(key)).and_then(Value::as_str)
}

#[cfg(test)]
#[path = "vfs_tests.rs"]
mod tests;
