// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool invocation badge: status indicator plus a human-readable action line.
//!
//! The upstream assistant hands this module immutable invocation snapshots.
//! Classification turns the loose wire shape (tool name plus an optional JSON
//! argument bag) into a closed [`ToolAction`] union, and formatting is an
//! exhaustive two-level match over it: action family first, command second,
//! each level with a single explicit fallback arm.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::tui::colors::{styled_complete_indicator, styled_pending_indicator};
use crate::tui::spinner;

/// Tool name of the file editor action family.
pub const EDITOR_TOOL: &str = "str_replace_editor";

/// Tool name of the file manager action family.
pub const FILE_MANAGER_TOOL: &str = "file_manager";

/// Glyph for a completed badge.
pub const COMPLETE_GLYPH: &str = "●";

/// Lifecycle stage of an invocation snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationState {
    Pending,
    Result,
}

/// One assistant-initiated action on the virtual file tree.
///
/// Snapshots are created and owned by the playback side; the badge renderer
/// neither mutates nor retains them. A snapshot whose state moved backwards
/// simply renders as pending again.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ToolInvocation {
    #[serde(rename = "toolName")]
    pub tool_name: String,
    pub state: InvocationState,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub args: Option<Map<String, Value>>,
}

impl ToolInvocation {
    /// New in-flight invocation. Non-object argument values are treated as
    /// absent, matching the loose upstream shape.
    pub fn pending(tool_name: impl Into<String>, args: Value) -> Self {
        let args = match args {
            Value::Object(map) => Some(map),
            _ => None,
        };
        Self {
            tool_name: tool_name.into(),
            state: InvocationState::Pending,
            result: None,
            args,
        }
    }

    /// Record the action's outcome and move to the result state.
    pub fn finish(&mut self, result: Value) {
        self.state = InvocationState::Result;
        self.result = Some(result);
    }

    /// Complete iff the result state was reached and the payload is truthy.
    pub fn is_complete(&self) -> bool {
        self.state == InvocationState::Result && is_truthy(self.result.as_ref())
    }
}

/// JSON truthiness: null, false, 0 and "" are falsy; everything else,
/// including empty arrays and objects, is truthy.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Editor family command vocabulary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    Create,
    StrReplace,
    Insert,
    View,
    UndoEdit,
    /// Unknown or missing command, kept verbatim for diagnostics.
    Other(String),
}

impl EditorCommand {
    fn parse(command: &str) -> Self {
        match command {
            "create" => Self::Create,
            "str_replace" => Self::StrReplace,
            "insert" => Self::Insert,
            "view" => Self::View,
            "undo_edit" => Self::UndoEdit,
            other => Self::Other(other.to_string()),
        }
    }
}

/// File manager family command vocabulary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileManagerCommand {
    CreateDirectory,
    Delete,
    Rename,
    List,
    /// Unknown or missing command, kept verbatim for diagnostics.
    Other(String),
}

impl FileManagerCommand {
    fn parse(command: &str) -> Self {
        match command {
            "create_directory" => Self::CreateDirectory,
            "delete" => Self::Delete,
            "rename" => Self::Rename,
            "list" => Self::List,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Closed classification of an invocation snapshot: one variant per known
/// action family plus a verbatim fallback for everything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolAction {
    Editor {
        command: EditorCommand,
        path: Option<String>,
    },
    FileManager {
        command: FileManagerCommand,
        path: Option<String>,
    },
    Unrecognized {
        name: String,
    },
}

impl ToolAction {
    /// Classify a snapshot. A known tool name without an argument bag falls
    /// through to [`ToolAction::Unrecognized`], which displays the raw name.
    pub fn classify(invocation: &ToolInvocation) -> Self {
        match (invocation.tool_name.as_str(), invocation.args.as_ref()) {
            (EDITOR_TOOL, Some(args)) => Self::Editor {
                command: EditorCommand::parse(extract_str(args, "command").unwrap_or("")),
                path: extract_str(args, "path").map(str::to_string),
            },
            (FILE_MANAGER_TOOL, Some(args)) => Self::FileManager {
                command: FileManagerCommand::parse(extract_str(args, "command").unwrap_or("")),
                path: extract_str(args, "path").map(str::to_string),
            },
            (name, _) => Self::Unrecognized {
                name: name.to_string(),
            },
        }
    }

    /// The display message for this action.
    ///
    /// Paths substitute literally. A missing path renders as the empty
    /// string, except `list`, which falls back to the tree root "/" when the
    /// path is absent or empty.
    pub fn message(&self) -> String {
        match self {
            Self::Editor { command, path } => {
                let path = path.as_deref().unwrap_or("");
                match command {
                    EditorCommand::Create => format!("Creating {path}"),
                    EditorCommand::StrReplace => format!("Editing {path}"),
                    EditorCommand::Insert => format!("Inserting into {path}"),
                    EditorCommand::View => format!("Viewing {path}"),
                    EditorCommand::UndoEdit => format!("Undoing changes to {path}"),
                    EditorCommand::Other(_) => format!("Modifying {path}"),
                }
            }
            Self::FileManager { command, path } => {
                let path = path.as_deref().unwrap_or("");
                match command {
                    FileManagerCommand::CreateDirectory => format!("Creating directory {path}"),
                    FileManagerCommand::Delete => format!("Deleting {path}"),
                    FileManagerCommand::Rename => format!("Renaming {path}"),
                    FileManagerCommand::List => {
                        let path = if path.is_empty() { "/" } else { path };
                        format!("Listing {path}")
                    }
                    FileManagerCommand::Other(_) => format!("Managing {path}"),
                }
            }
            Self::Unrecognized { name } => name.clone(),
        }
    }
}

fn extract_str<'a>(args: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str)
}

/// Completion indicator of a badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeIndicator {
    Pending,
    Complete,
}

/// Pure projection of a snapshot into its badge parts.
pub fn render_badge(invocation: &ToolInvocation) -> (BadgeIndicator, String) {
    let indicator = if invocation.is_complete() {
        BadgeIndicator::Complete
    } else {
        BadgeIndicator::Pending
    };
    (indicator, ToolAction::classify(invocation).message())
}

/// Format one badge as a display line. Pending badges animate with the
/// spinner frame for `tick`; complete badges show a solid dot.
pub fn badge_line(invocation: &ToolInvocation, tick: u64, use_colors: bool) -> String {
    let (indicator, message) = render_badge(invocation);
    let glyph = match indicator {
        BadgeIndicator::Complete => {
            if use_colors {
                styled_complete_indicator(COMPLETE_GLYPH)
            } else {
                COMPLETE_GLYPH.to_string()
            }
        }
        BadgeIndicator::Pending => {
            let frame = spinner::frame_at(tick);
            if use_colors {
                styled_pending_indicator(frame)
            } else {
                frame.to_string()
            }
        }
    };
    format!("{glyph} {message}")
}

#[cfg(test)]
#[path = "tool_badge_tests.rs"]
mod tests;
