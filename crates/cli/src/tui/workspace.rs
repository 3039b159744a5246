// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace view controller: the exclusive choice between the preview and
//! the code-inspection view.
//!
//! The controller owns a single explicit state record, mutated only through
//! [`WorkspaceState::set_view`]. Rendering is a pure projection of that
//! record: [`WorkspaceView`] carries two tab controls (exactly one selected)
//! and exactly one active panel region, enforced by [`ActivePanel`] at the
//! type level. In code view the file tree and the editor mount together
//! inside that one region; the preview panel is not constructed at all.

use iocraft::prelude::*;
use tracing::debug;

use crate::tui::colors::{styled_separator, styled_tab_label};
use crate::tui::separator::{make_compact_separator, make_separator};
use crate::tui::widgets::code_editor::EditorPane;
use crate::tui::widgets::file_tree::FileTreePane;
use crate::tui::widgets::preview::PreviewPane;
use crate::vfs::Vfs;

/// Column width of the file tree in code view.
pub const TREE_WIDTH: usize = 28;

/// The two workspace views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Preview,
    Code,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Preview => "Preview",
            Self::Code => "Code",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Preview => Self::Code,
            Self::Code => Self::Preview,
        }
    }
}

/// The view controller's state record. One per mounted app instance, never
/// persisted; a fresh instance starts in preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkspaceState {
    mode: ViewMode,
}

impl WorkspaceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active view.
    pub fn current_view(&self) -> ViewMode {
        self.mode
    }

    /// Switch views. Idempotent: setting the active view again is a no-op.
    pub fn set_view(&mut self, mode: ViewMode) {
        if self.mode != mode {
            debug!(?mode, "switching workspace view");
            self.mode = mode;
        }
    }

    /// Tab-key activation: flip to the other view.
    pub fn toggle(&mut self) {
        self.set_view(self.mode.toggled());
    }
}

/// One tab control; `selected` is true for exactly one of the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabControl {
    pub label: &'static str,
    pub mode: ViewMode,
    pub selected: bool,
}

/// The two tab controls for a given active view.
pub fn tab_controls(active: ViewMode) -> [TabControl; 2] {
    [ViewMode::Preview, ViewMode::Code].map(|mode| TabControl {
        label: mode.label(),
        mode,
        selected: mode == active,
    })
}

/// The single active panel region. Constructing both views at once is
/// unrepresentable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActivePanel {
    Preview(PreviewPane),
    Code {
        tree: FileTreePane,
        editor: EditorPane,
    },
}

/// Pure projection of the controller state plus panel inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkspaceView {
    pub tabs: [TabControl; 2],
    pub panel: ActivePanel,
}

/// Build the projection. Only the active view's panels are constructed.
pub fn project(
    state: &WorkspaceState,
    vfs: &Vfs,
    selected: Option<&str>,
    width: usize,
) -> WorkspaceView {
    let panel = match state.current_view() {
        ViewMode::Preview => ActivePanel::Preview(PreviewPane::from_vfs(vfs)),
        ViewMode::Code => {
            let editor_width = width.saturating_sub(TREE_WIDTH + 1);
            let editor = match selected.and_then(|path| vfs.get(path).map(|c| (path, c))) {
                Some((path, contents)) => EditorPane::from_file(path, contents, editor_width),
                None => EditorPane::empty(),
            };
            ActivePanel::Code {
                tree: FileTreePane::from_vfs(vfs, selected),
                editor,
            }
        }
    };

    WorkspaceView {
        tabs: tab_controls(state.current_view()),
        panel,
    }
}

/// The tab strip line above the panel region.
pub fn tab_strip(tabs: &[TabControl; 2], use_colors: bool) -> String {
    let rendered: Vec<String> = tabs
        .iter()
        .map(|tab| {
            if use_colors {
                styled_tab_label(tab.label, tab.selected)
            } else if tab.selected {
                format!("[{}]", tab.label)
            } else {
                format!(" {} ", tab.label)
            }
        })
        .collect();
    format!(" {}", rendered.join("  "))
}

/// Render the workspace region: tab strip, rule, and the one active panel.
pub fn render_workspace(view: &WorkspaceView, width: usize, use_colors: bool) -> AnyElement<'static> {
    let strip = tab_strip(&view.tabs, use_colors);
    let rule = if use_colors {
        styled_separator(&make_separator(width))
    } else {
        make_separator(width)
    };

    match &view.panel {
        ActivePanel::Preview(pane) => {
            let lines = pane.lines();
            element! {
                View(flex_direction: FlexDirection::Column, width: 100pct) {
                    Text(content: strip, wrap: TextWrap::NoWrap)
                    Text(content: rule, wrap: TextWrap::NoWrap)
                    #(lines.into_iter().map(|line| {
                        element! { Text(content: line, wrap: TextWrap::NoWrap) }
                    }))
                }
            }
            .into()
        }
        ActivePanel::Code { tree, editor } => {
            let tree_lines = tree.lines.clone();
            let editor_lines = editor.lines.clone();
            let tree_header = make_compact_separator("Files", TREE_WIDTH);
            let editor_header =
                make_compact_separator(&editor.header(), width.saturating_sub(TREE_WIDTH + 1));
            element! {
                View(flex_direction: FlexDirection::Column, width: 100pct) {
                    Text(content: strip, wrap: TextWrap::NoWrap)
                    Text(content: rule, wrap: TextWrap::NoWrap)
                    View(flex_direction: FlexDirection::Row, width: 100pct) {
                        View(flex_direction: FlexDirection::Column, width: TREE_WIDTH as u32) {
                            Text(content: tree_header, wrap: TextWrap::NoWrap)
                            #(tree_lines.into_iter().map(|line| {
                                element! { Text(content: line, wrap: TextWrap::NoWrap) }
                            }))
                        }
                        View(flex_direction: FlexDirection::Column) {
                            Text(content: editor_header, wrap: TextWrap::NoWrap)
                            #(editor_lines.into_iter().map(|line| {
                                element! { Text(content: line, wrap: TextWrap::NoWrap) }
                            }))
                        }
                    }
                }
            }
            .into()
        }
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
