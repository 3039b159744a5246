// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! View switching through the public app state API.

use std::sync::Arc;

use iocraft::prelude::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use weft::script::Script;
use weft::tui::workspace::{ActivePanel, ViewMode};
use weft::tui::{TuiAppState, TuiConfig};

fn app() -> TuiAppState {
    TuiAppState::new(Arc::new(Script::sample()), TuiConfig::instant())
}

fn press(state: &TuiAppState, code: KeyCode) {
    let event = KeyEvent::new(KeyEventKind::Press, code);
    state.handle_key_event(event);
}

fn type_line(state: &TuiAppState, text: &str) {
    for c in text.chars() {
        let mut event = KeyEvent::new(KeyEventKind::Press, KeyCode::Char(c));
        event.modifiers = KeyModifiers::empty();
        state.handle_key_event(event);
    }
    press(state, KeyCode::Enter);
}

#[test]
fn defaults_to_preview_with_one_panel() {
    let state = app();

    assert_eq!(state.current_view(), ViewMode::Preview);
    let view = state.render_state().workspace_view;
    assert!(matches!(view.panel, ActivePanel::Preview(_)));
    assert_eq!(view.tabs.iter().filter(|t| t.selected).count(), 1);
}

#[test]
fn a_full_turn_then_tab_shows_generated_code() {
    let state = app();
    type_line(&state, "build a recipe card");

    // Preview reflects the new entry point.
    let view = state.render_state().workspace_view;
    match view.panel {
        ActivePanel::Preview(pane) => {
            assert!(pane.entry_present);
            assert_eq!(pane.file_count, 2);
        }
        ActivePanel::Code { .. } => panic!("preview must be active before switching"),
    }

    // Switch to code view: tree and editor mount together, preview is gone.
    press(&state, KeyCode::Tab);
    let view = state.render_state().workspace_view;
    match view.panel {
        ActivePanel::Code { tree, editor } => {
            assert!(tree.lines.iter().any(|l| l.contains("App.jsx")));
            assert!(editor.lines.iter().any(|l| l.contains("export default")));
        }
        ActivePanel::Preview(_) => panic!("preview panel must unmount in code view"),
    }

    // And back again.
    press(&state, KeyCode::Tab);
    assert!(matches!(
        state.render_state().workspace_view.panel,
        ActivePanel::Preview(_)
    ));
}

#[test]
fn tab_selection_always_tracks_the_active_view() {
    let state = app();

    for expected in [ViewMode::Code, ViewMode::Preview, ViewMode::Code] {
        press(&state, KeyCode::Tab);
        assert_eq!(state.current_view(), expected);

        let tabs = state.render_state().workspace_view.tabs;
        let selected: Vec<_> = tabs.iter().filter(|t| t.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].mode, expected);
    }
}

#[test]
fn repeated_activation_of_the_same_view_changes_nothing() {
    let state = app();
    state.set_view(ViewMode::Code);
    let first = state.render_state().workspace_view;

    state.set_view(ViewMode::Code);
    let second = state.render_state().workspace_view;

    assert_eq!(first, second);
}
